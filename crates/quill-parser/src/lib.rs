//! # Quill Parser
//!
//! Parser and validator for the Quill post markup language. This crate turns
//! source text into a [`Document`](quill_core::document::Document) and checks
//! it against the structural and stylistic rules.
//!
//! ## Usage
//!
//! ```
//! # use quill_parser::{parse, validate};
//!
//! let source = concat!(
//!     "# \"Title\"\n",
//!     "! \"Claim\"\n",
//!     "+ 10% | \"improvement\"\n",
//!     "> \"Insight\"\n",
//!     "@ \"Source\" | https://example.com\n",
//! );
//!
//! let parsed = parse(source);
//! assert!(!parsed.has_errors());
//!
//! let report = validate(parsed.document());
//! assert!(report.is_valid());
//! ```

pub mod error;
pub mod lexer;
mod parser;
mod span;
mod validator;

pub use parser::Parsed;
pub use span::Span;
pub use validator::{ValidationReport, Validator};

use log::info;

use quill_core::document::Document;

/// Parse source text into a document.
///
/// This is the first stage of the pipeline:
///
/// 1. **Classify** - Split the source into lines, dropping blanks and comments
/// 2. **Parse** - Match each directive line against its grammar
///
/// Parsing never stops at a bad line. The returned [`Parsed`] carries the
/// document built from every well-formed directive plus one diagnostic per
/// malformed strict directive.
pub fn parse(source: &str) -> Parsed {
    info!(bytes = source.len(); "Parsing post");
    let parsed = parser::parse_document(source);
    info!(errors = parsed.errors().len(); "Parsing finished");
    parsed
}

/// Validate a document with the default limits and the standard style rules.
///
/// Use [`Validator`] to supply different default limits.
pub fn validate(document: &Document) -> ValidationReport {
    Validator::default().validate(document)
}
