//! A single finding about a post.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// One error or warning.
///
/// The message is the complete human-readable text, such as
/// `Missing # (title)` or `Line 4: Invalid claim. Use ! "Your main claim"`,
/// and is what callers compare against. The code, label and help only add
/// context for rich rendering.
///
/// # Example
///
/// ```
/// # use quill_parser::error::{Diagnostic, ErrorCode};
/// # use quill_parser::Span;
/// let diag = Diagnostic::error("Line 1: Invalid title. Use # \"Your title\"")
///     .with_code(ErrorCode::E100)
///     .with_label(Span::new(0..7), "does not match the title grammar")
///     .with_help("text segments must be wrapped in double quotes");
///
/// assert_eq!(
///     diag.to_string(),
///     "error[E100]: Line 1: Invalid title. Use # \"Your title\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    label: Option<Label>,
    help: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, message)
    }

    fn with_severity(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            label: None,
            help: None,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source location, present only for syntax errors.
    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(self, code: ErrorCode) -> Self {
        Self {
            code: Some(code),
            ..self
        }
    }

    /// Point the diagnostic at `span`. A later call replaces the label.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        Self {
            label: Some(Label::new(span, message)),
            ..self
        }
    }

    pub fn with_help(self, help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..self
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_diagnostic() {
        let diag = Diagnostic::error("Missing # (title)");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "Missing # (title)");
        assert_eq!(diag.code(), None);
        assert_eq!(diag.label(), None);
        assert_eq!(diag.help(), None);
    }

    #[test]
    fn test_display() {
        let coded = Diagnostic::error("Missing > (insight)").with_code(ErrorCode::E200);
        let plain = Diagnostic::warning("Context too long: 101/100 characters");

        assert_eq!(coded.to_string(), "error[E200]: Missing > (insight)");
        assert_eq!(plain.to_string(), "warning: Context too long: 101/100 characters");
    }

    #[test]
    fn test_later_label_replaces_earlier() {
        let diag = Diagnostic::error("Line 2: Invalid claim. Use ! \"Your main claim\"")
            .with_label(Span::new(0..3), "first")
            .with_label(Span::new(8..20), "does not match the claim grammar");

        let label = diag.label().expect("label");
        assert_eq!(label.span(), Span::new(8..20));
        assert_eq!(label.message(), "does not match the claim grammar");
    }
}
