//! Heuristic scoring of plain-text posts.
//!
//! The [`Analyzer`] works on arbitrary text rather than Quill markup, so it
//! cannot see fields. It infers structure from lines and patterns, applies
//! the same style rules as the validator, and computes a score from 0 to 100
//! by subtracting a penalty for every finding.
//!
//! Errors make the analysis invalid; warnings only cost points.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;
use serde::Serialize;

use quill_core::rules::StyleRules;

use crate::config::AnalyzerConfig;

const MISSING_TITLE_PENALTY: u32 = 15;
const LONG_TITLE_PENALTY: u32 = 10;
const QUESTION_TITLE_PENALTY: u32 = 10;
const NO_EVIDENCE_PENALTY: u32 = 20;
const THIN_EVIDENCE_PENALTY: u32 = 5;
const NO_SOURCE_PENALTY: u32 = 15;
const TOO_SHORT_PENALTY: u32 = 10;
const NO_INSIGHT_PENALTY: u32 = 5;
const BANNED_PHRASE_PENALTY: u32 = 10;
const EMOJI_PENALTY: u32 = 10;
const EXCLAMATION_PENALTY: u32 = 5;
const LONG_TEXT_PENALTY: u32 = 5;

/// Percentages, multipliers and decimals.
static METRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:\.\d+)?\s?%|\b\d+(?:\.\d+)?\s?[x×]\b|\d+\.\d+")
        .expect("metric pattern is a valid regex")
});

/// URL schemes, well-known source hosts and explicit attributions.
static SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|arxiv\.org|github\.com|source:")
        .expect("source pattern is a valid regex")
});

const BULLETS: [char; 3] = ['-', '*', '•'];

/// Which parts of a post the analyzer believes are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Structure {
    title: bool,
    claim: bool,
    /// Number of evidence signals found.
    evidence: usize,
    insight: bool,
    source: bool,
}

impl Structure {
    pub fn has_title(&self) -> bool {
        self.title
    }

    pub fn has_claim(&self) -> bool {
        self.claim
    }

    pub fn evidence(&self) -> usize {
        self.evidence
    }

    pub fn has_insight(&self) -> bool {
        self.insight
    }

    pub fn has_source(&self) -> bool {
        self.source
    }
}

/// The result of analyzing one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    valid: bool,
    score: u8,
    structure: Structure,
    issues: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Analysis {
    /// Returns `true` if no error was found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the score, from 0 to 100.
    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    /// Returns the errors found.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns one suggestion per issue and warning, in the same order as
    /// they were found.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }
}

/// Running tally of findings and penalties.
#[derive(Debug)]
struct Scorecard {
    penalty: u32,
    issues: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Scorecard {
    fn new() -> Self {
        Self {
            penalty: 0,
            issues: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn error(&mut self, penalty: u32, message: impl Into<String>, suggestion: impl Into<String>) {
        self.penalty = self.penalty.saturating_add(penalty);
        self.issues.push(message.into());
        self.suggestions.push(suggestion.into());
    }

    fn warn(&mut self, penalty: u32, message: impl Into<String>, suggestion: impl Into<String>) {
        self.penalty = self.penalty.saturating_add(penalty);
        self.warnings.push(message.into());
        self.suggestions.push(suggestion.into());
    }

    fn finish(self, structure: Structure) -> Analysis {
        let score = 100u8.saturating_sub(u8::try_from(self.penalty).unwrap_or(u8::MAX));
        Analysis {
            valid: self.issues.is_empty(),
            score,
            structure,
            issues: self.issues,
            warnings: self.warnings,
            suggestions: self.suggestions,
        }
    }
}

/// Scores plain text against the house style.
///
/// # Example
///
/// ```
/// # use quill::{analyze::Analyzer, config::AnalyzerConfig};
/// # use quill_core::rules::StyleRules;
/// let config = AnalyzerConfig::default();
/// let analyzer = Analyzer::new(&config, StyleRules::standard());
///
/// let analysis = analyzer.analyze("");
/// assert!(!analysis.is_valid());
/// assert_eq!(analysis.issues()[0], "Missing title");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    config: &'a AnalyzerConfig,
    rules: &'a StyleRules,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer.
    ///
    /// # Arguments
    ///
    /// * `config` - Thresholds for the structural heuristics
    /// * `rules` - The style rule table shared with the validator
    pub fn new(config: &'a AnalyzerConfig, rules: &'a StyleRules) -> Self {
        Self { config, rules }
    }

    /// Analyze `text`. This never fails.
    pub fn analyze(&self, text: &str) -> Analysis {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        debug!(lines = lines.len(); "Analyzing text");

        let mut card = Scorecard::new();
        let mut structure = Structure::default();

        self.check_title(&lines, &mut structure, &mut card);
        check_evidence(&lines, self.config, &mut structure, &mut card);
        check_source(text, &mut structure, &mut card);
        self.check_claim(&lines, &mut structure, &mut card);
        self.check_insight(&lines, &mut structure, &mut card);
        self.check_style(text, &mut card);
        check_question_title(&lines, &mut card);

        let length = text.chars().count();
        if length > self.config.max_text_length() {
            card.warn(
                LONG_TEXT_PENALTY,
                format!(
                    "Post is long ({length}/{} characters)",
                    self.config.max_text_length()
                ),
                "Trim the post so readers finish it",
            );
        }

        let analysis = card.finish(structure);
        info!(
            score = analysis.score(),
            valid = analysis.is_valid(),
            issues = analysis.issues().len(),
            warnings = analysis.warnings().len();
            "Analysis finished"
        );
        analysis
    }

    fn check_title(&self, lines: &[&str], structure: &mut Structure, card: &mut Scorecard) {
        let Some(first) = lines.first() else {
            card.error(
                MISSING_TITLE_PENALTY,
                "Missing title",
                "Open with a one-line title stating the finding",
            );
            return;
        };

        let length = first.chars().count();
        if length > self.config.max_title_length() {
            card.error(
                LONG_TITLE_PENALTY,
                format!(
                    "Title too long ({length}/{} characters)",
                    self.config.max_title_length()
                ),
                "Shorten the first line to a headline",
            );
        } else {
            structure.title = true;
        }
    }

    fn check_claim(&self, lines: &[&str], structure: &mut Structure, card: &mut Scorecard) {
        if lines.len() >= self.config.min_claim_lines() {
            structure.claim = true;
        } else {
            card.error(
                TOO_SHORT_PENALTY,
                "Post too short to contain a claim",
                "Follow the title with the main claim",
            );
        }
    }

    fn check_insight(&self, lines: &[&str], structure: &mut Structure, card: &mut Scorecard) {
        let prose = lines
            .iter()
            .filter(|line| !line.starts_with('#') && !SOURCE.is_match(line))
            .count();
        debug!(prose_lines = prose; "Counted prose lines");

        if prose >= self.config.min_insight_lines() {
            structure.insight = true;
        } else {
            card.warn(
                NO_INSIGHT_PENALTY,
                "No insight detected",
                "Close with what the reader should take away",
            );
        }
    }

    fn check_style(&self, text: &str, card: &mut Scorecard) {
        let report = self.rules.scan(text);

        for phrase in report.banned_phrases {
            card.error(
                BANNED_PHRASE_PENALTY,
                format!("Banned phrase: \"{phrase}\""),
                format!("Replace \"{phrase}\" with a concrete statement"),
            );
        }

        if report.has_emoji {
            card.error(EMOJI_PENALTY, "Emojis are not allowed", "Remove emojis");
        }

        if report.exclamations > 0 {
            let count = report.exclamations;
            let penalty = u32::try_from(count).unwrap_or(u32::MAX);
            card.error(
                EXCLAMATION_PENALTY.saturating_mul(penalty),
                format!("Exclamation marks are not allowed (found {count})"),
                "Let the numbers carry the excitement",
            );
        }
    }
}

/// Count evidence signals: one per line matching a metric, one per bulleted line.
fn check_evidence(
    lines: &[&str],
    config: &AnalyzerConfig,
    structure: &mut Structure,
    card: &mut Scorecard,
) {
    let signals: usize = lines
        .iter()
        .map(|line| usize::from(METRIC.is_match(line)) + usize::from(line.starts_with(BULLETS)))
        .sum();
    structure.evidence = signals;
    debug!(signals; "Counted evidence signals");

    if signals == 0 {
        card.error(
            NO_EVIDENCE_PENALTY,
            "No evidence found",
            "Back the claim with concrete numbers such as percentages or multipliers",
        );
    } else if signals < config.min_evidence_signals() {
        card.warn(
            THIN_EVIDENCE_PENALTY,
            "Only one piece of evidence found",
            "Add a second data point",
        );
    }
}

fn check_source(text: &str, structure: &mut Structure, card: &mut Scorecard) {
    if SOURCE.is_match(text) {
        structure.source = true;
    } else {
        card.error(
            NO_SOURCE_PENALTY,
            "No source found",
            "Cite where the evidence comes from with a link or a `Source:` line",
        );
    }
}

fn check_question_title(lines: &[&str], card: &mut Scorecard) {
    if lines.first().is_some_and(|first| first.ends_with('?')) {
        card.error(
            QUESTION_TITLE_PENALTY,
            "Title must not be a question",
            "State the answer instead of asking",
        );
    }
}
