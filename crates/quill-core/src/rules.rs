//! The shared style rule table.
//!
//! Both the validator and the plain-text analyzer check prose against the
//! same rules: a fixed list of banned phrases, a ban on emoji, and a ban on
//! exclamation marks. [`StyleRules::standard`] returns the single immutable
//! table both consumers are handed.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

/// Clichéd business and AI-hype phrases that are not allowed in prose.
///
/// Matching is case-insensitive substring containment.
pub const BANNED_PHRASES: &[&str] = &[
    "game-changer",
    "game changer",
    "game-changing",
    "revolutionary",
    "revolutionize",
    "paradigm shift",
    "disruptive",
    "synergy",
    "leverage",
    "cutting-edge",
    "cutting edge",
    "groundbreaking",
    "state-of-the-art",
    "best-in-class",
    "world-class",
    "next-level",
    "unlock the power",
    "harness the power",
    "unleash",
    "supercharge",
    "delve",
    "deep dive",
    "mind-blowing",
    "in today's fast-paced world",
    "ever-evolving landscape",
    "seamless",
    "transformative",
    "move the needle",
    "think outside the box",
    "at the end of the day",
];

/// Pictographic, symbol and dingbat ranges, plus the emoji variation selector.
const EMOJI_PATTERN: &str = concat!(
    "[",
    r"\x{1F000}-\x{1FAFF}",
    r"\x{2600}-\x{27BF}",
    r"\x{2B00}-\x{2BFF}",
    r"\x{1F1E6}-\x{1F1FF}",
    r"\x{FE0F}",
    "]",
);

static STANDARD: LazyLock<StyleRules> = LazyLock::new(|| {
    StyleRules::new(
        BANNED_PHRASES,
        Regex::new(EMOJI_PATTERN).expect("emoji pattern is a valid regex"),
    )
});

/// What a style scan found in a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleReport {
    /// Banned phrases present in the text, in table order.
    pub banned_phrases: Vec<&'static str>,
    /// Whether any emoji is present.
    pub has_emoji: bool,
    /// Number of `!` characters.
    pub exclamations: usize,
}

impl StyleReport {
    /// Returns `true` if no rule was violated.
    pub fn is_clean(&self) -> bool {
        self.banned_phrases.is_empty() && !self.has_emoji && self.exclamations == 0
    }
}

/// An immutable set of style rules.
#[derive(Debug)]
pub struct StyleRules {
    banned_phrases: &'static [&'static str],
    emoji: Regex,
}

impl StyleRules {
    /// Creates a rule table from a phrase list and an emoji matcher.
    ///
    /// Phrases are expected in lowercase.
    pub fn new(banned_phrases: &'static [&'static str], emoji: Regex) -> Self {
        Self {
            banned_phrases,
            emoji,
        }
    }

    /// Returns the standard rule table.
    pub fn standard() -> &'static StyleRules {
        &STANDARD
    }

    /// Returns the banned phrase list.
    pub fn banned_phrases(&self) -> &[&'static str] {
        self.banned_phrases
    }

    /// Returns the banned phrases contained in `text`, ignoring case.
    pub fn banned_phrases_in(&self, text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        self.banned_phrases
            .iter()
            .copied()
            .filter(|phrase| lowered.contains(phrase))
            .collect()
    }

    /// Returns `true` if `text` contains at least one emoji.
    pub fn has_emoji(&self, text: &str) -> bool {
        self.emoji.is_match(text)
    }

    /// Counts the exclamation marks in `text`.
    pub fn exclamations(&self, text: &str) -> usize {
        text.matches('!').count()
    }

    /// Runs every rule against `text`.
    pub fn scan(&self, text: &str) -> StyleReport {
        let report = StyleReport {
            banned_phrases: self.banned_phrases_in(text),
            has_emoji: self.has_emoji(text),
            exclamations: self.exclamations(text),
        };
        trace!(report:?; "Style scan complete");
        report
    }
}
