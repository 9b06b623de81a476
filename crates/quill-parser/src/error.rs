//! Error and diagnostic system for the Quill parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending directive line
//! - Severity levels separating fatal errors from advisory warnings
//! - Diagnostic collector for accumulating every problem in one pass
//!
//! # Example
//!
//! ```
//! # use quill_parser::error::{Diagnostic, ErrorCode};
//! # use quill_parser::Span;
//!
//! let diag = Diagnostic::error("Line 2: Invalid claim. Use ! \"Your main claim\"")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(12..30), "does not match the claim grammar")
//!     .with_help("wrap the claim in double quotes");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
