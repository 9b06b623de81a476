//! Configuration types for Quill compilation and analysis.
//!
//! This module provides configuration structures that control the default
//! character limits used when compiling markup and the thresholds used by the
//! plain-text analyzer. All types implement [`serde::Deserialize`] for loading
//! from external sources; every section and field is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining limits and analyzer settings.
//! - [`Limits`] - Default character limits, overridable per document with `^` directives.
//! - [`AnalyzerConfig`] - Thresholds for the plain-text heuristics.
//!
//! # Example
//!
//! ```
//! # use quill::config::AppConfig;
//! # use quill_core::limits::LimitKey;
//! let config = AppConfig::default();
//! assert_eq!(config.limits().get(LimitKey::Total), 700);
//! assert_eq!(config.analyzer().max_text_length(), 1300);
//! ```

use serde::Deserialize;

pub use quill_core::limits::Limits;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default limits section.
    #[serde(default)]
    limits: Limits,

    /// Analyzer section.
    #[serde(default)]
    analyzer: AnalyzerConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(limits: Limits, analyzer: AnalyzerConfig) -> Self {
        Self { limits, analyzer }
    }

    /// Returns the default limits.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Returns the analyzer configuration.
    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.analyzer
    }
}

/// Thresholds for the plain-text analyzer.
///
/// The analyzer cannot see fields, so it infers structure from line counts
/// and patterns. These values decide where each inference flips.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// A first line longer than this is not accepted as a title.
    pub(crate) max_title_length: usize,

    /// Non-blank lines needed before a claim is assumed present.
    pub(crate) min_claim_lines: usize,

    /// Prose lines (not tags, not sources) needed before an insight is assumed present.
    pub(crate) min_insight_lines: usize,

    /// Evidence signals needed to avoid the thin-evidence warning.
    pub(crate) min_evidence_signals: usize,

    /// Texts longer than this draw a length warning.
    pub(crate) max_text_length: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_title_length: 100,
            min_claim_lines: 2,
            min_insight_lines: 3,
            min_evidence_signals: 2,
            max_text_length: 1300,
        }
    }
}

impl AnalyzerConfig {
    pub fn max_title_length(&self) -> usize {
        self.max_title_length
    }

    pub fn min_claim_lines(&self) -> usize {
        self.min_claim_lines
    }

    pub fn min_insight_lines(&self) -> usize {
        self.min_insight_lines
    }

    pub fn min_evidence_signals(&self) -> usize {
        self.min_evidence_signals
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }
}
