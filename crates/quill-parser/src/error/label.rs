//! Source annotations attached to diagnostics.
//!
//! Only syntax errors carry a label: it covers the trimmed text of the
//! directive line that failed to match. Structural and style findings are
//! about the document as a whole and have none.

use crate::span::Span;

/// A message pinned to a byte range of the source.
///
/// Rendered by the CLI as:
///
/// ```text
/// error[E100]: Line 3: Invalid title. Use # "Your title"
///    |
///  3 | # Missing quotes
///    | ^^^^^^^^^^^^^^^^ does not match the title grammar
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// The annotated byte range.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_covers_line() {
        let label = Label::new(Span::new(10..20), "does not match the claim grammar");

        assert_eq!(label.span().range(), 10..20);
        assert_eq!(label.message(), "does not match the claim grammar");
    }
}
