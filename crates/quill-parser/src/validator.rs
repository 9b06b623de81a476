//! Structural and stylistic validation of parsed documents.
//!
//! The [`Validator`] checks a [`Document`] against the effective [`Limits`]
//! and a [`StyleRules`] table. Every rule is evaluated and every violation is
//! collected; nothing short-circuits after the first problem.
//!
//! Rules, in reporting order:
//!
//! 1. Required fields: title, claim, at least one evidence item, insight, source.
//! 2. Lengths: title, claim, insight, each evidence item, and the evidence count.
//! 3. Context length, reported as a warning.
//! 4. Style: banned phrases, emoji and exclamation marks in prose.
//! 5. Title shape: no trailing `?`, no `!`.

use log::{debug, info};

use quill_core::{
    document::Document,
    limits::{LimitKey, Limits, MAX_EVIDENCE_ITEMS},
    rules::StyleRules,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::Symbol,
};

/// Errors and warnings produced by validating one document.
#[derive(Debug, Default)]
pub struct ValidationReport {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Returns the fatal violations, in rule order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Returns the advisory findings.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns `true` if no error was reported. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Splits the report into errors and warnings.
    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.warnings)
    }

    /// Returns `Ok` with the warnings if valid, otherwise every diagnostic.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            let mut diagnostics = self.errors;
            diagnostics.extend(self.warnings);
            Err(ParseError::new(diagnostics))
        }
    }
}

/// Returns the field value if it is present and not empty.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Validates documents against default limits and a style rule table.
///
/// # Example
///
/// ```
/// # use quill_core::{limits::Limits, rules::StyleRules};
/// # use quill_parser::{Validator, parse};
///
/// let parsed = parse("# \"Only a title\"");
/// let validator = Validator::new(Limits::default(), StyleRules::standard());
/// let report = validator.validate(parsed.document());
///
/// assert!(!report.is_valid());
/// assert_eq!(report.errors()[0].message(), "Missing ! (claim)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    defaults: Limits,
    rules: &'a StyleRules,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(Limits::default(), StyleRules::standard())
    }
}

impl<'a> Validator<'a> {
    /// Create a validator.
    ///
    /// # Arguments
    ///
    /// * `defaults` - Limits in effect before the document's `^` overrides
    /// * `rules` - The style rule table shared with the analyzer
    pub fn new(defaults: Limits, rules: &'a StyleRules) -> Self {
        Self { defaults, rules }
    }

    /// Returns the limits in effect for `document`.
    pub fn limits_for(&self, document: &Document) -> Limits {
        document.effective_limits(&self.defaults)
    }

    /// Run every rule against `document`.
    pub fn validate(&self, document: &Document) -> ValidationReport {
        let limits = self.limits_for(document);
        debug!(limits:?; "Validating with effective limits");

        let mut collector = DiagnosticCollector::new();
        check_presence(document, &mut collector);
        check_lengths(document, &limits, &mut collector);
        check_context(document, &limits, &mut collector);
        self.check_style(document, &mut collector);
        check_title(document, &mut collector);

        info!(has_errors = collector.has_errors(); "Validation finished");

        let (errors, warnings) = collector.into_parts();
        ValidationReport { errors, warnings }
    }

    /// Check the rendered output of `document` against its `total` limit.
    ///
    /// Returns the error to report if the output is too long.
    pub fn check_output(&self, document: &Document, output: &str) -> Option<Diagnostic> {
        let limit = self.limits_for(document).get(LimitKey::Total);
        let length = output.chars().count();
        (length > limit).then(|| {
            Diagnostic::error(format!("Post too long: {length}/{limit} characters"))
                .with_code(ErrorCode::E302)
                .with_help("shorten the prose or raise the limit with `^ total <n>`")
        })
    }

    fn check_style(&self, document: &Document, collector: &mut DiagnosticCollector) {
        let report = self.rules.scan(&document.prose());

        for phrase in report.banned_phrases {
            collector.emit(
                Diagnostic::error(format!("Banned phrase: \"{phrase}\""))
                    .with_code(ErrorCode::E400)
                    .with_help("say what actually happened instead"),
            );
        }

        if report.has_emoji {
            collector.emit(Diagnostic::error("Emojis are not allowed").with_code(ErrorCode::E401));
        }

        if report.exclamations > 0 {
            collector.emit(
                Diagnostic::error(format!(
                    "Exclamation marks are not allowed (found {})",
                    report.exclamations
                ))
                .with_code(ErrorCode::E402),
            );
        }
    }
}

fn check_presence(document: &Document, collector: &mut DiagnosticCollector) {
    let missing = [
        (Symbol::Title, present(document.title()).is_none()),
        (Symbol::Claim, present(document.claim()).is_none()),
        (Symbol::Evidence, document.evidence().is_empty()),
        (Symbol::Insight, present(document.insight()).is_none()),
        (Symbol::Source, document.source().is_none()),
    ];

    for (symbol, _) in missing.into_iter().filter(|(_, missing)| *missing) {
        collector.emit(
            Diagnostic::error(format!("Missing {} ({})", symbol, symbol.name()))
                .with_code(ErrorCode::E200)
                .with_help(format!("add a line like {}", symbol.template())),
        );
    }
}

fn check_lengths(document: &Document, limits: &Limits, collector: &mut DiagnosticCollector) {
    let fields = [
        ("Title", LimitKey::Title, document.title()),
        ("Claim", LimitKey::Claim, document.claim()),
        ("Insight", LimitKey::Insight, document.insight()),
    ];

    for (label, key, value) in fields {
        let Some(value) = present(value) else {
            continue;
        };
        let length = value.chars().count();
        let limit = limits.get(key);
        if length > limit {
            collector.emit(
                Diagnostic::error(format!("{label} too long: {length}/{limit} characters"))
                    .with_code(ErrorCode::E300),
            );
        }
    }

    let limit = limits.get(LimitKey::Evidence);
    for (index, item) in document.evidence().iter().enumerate() {
        let length = item.text().chars().count();
        if length > limit {
            collector.emit(
                Diagnostic::error(format!(
                    "Evidence {} too long: {length}/{limit} characters",
                    index + 1
                ))
                .with_code(ErrorCode::E301),
            );
        }
    }

    let count = document.evidence().len();
    if count > MAX_EVIDENCE_ITEMS {
        collector.emit(
            Diagnostic::error(format!(
                "Evidence limited to {MAX_EVIDENCE_ITEMS} items (found {count})"
            ))
            .with_code(ErrorCode::E201)
            .with_help("keep the strongest data points"),
        );
    }
}

fn check_context(document: &Document, limits: &Limits, collector: &mut DiagnosticCollector) {
    let Some(context) = present(document.context()) else {
        return;
    };
    let length = context.chars().count();
    let limit = limits.get(LimitKey::Context);
    if length > limit {
        collector.emit(
            Diagnostic::warning(format!("Context too long: {length}/{limit} characters"))
                .with_code(ErrorCode::W300),
        );
    }
}

fn check_title(document: &Document, collector: &mut DiagnosticCollector) {
    let Some(title) = present(document.title()) else {
        return;
    };

    if title.ends_with('?') {
        collector.emit(
            Diagnostic::error("Title must not end with a question mark")
                .with_code(ErrorCode::E403)
                .with_help("state the finding instead of asking about it"),
        );
    }

    if title.contains('!') {
        collector.emit(
            Diagnostic::error("Title must not contain exclamation marks")
                .with_code(ErrorCode::E404),
        );
    }
}
