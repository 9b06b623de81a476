//! The error returned when a post does not compile.

use std::{fmt, slice};

use crate::error::Diagnostic;

/// Every error that blocked one stage of compilation.
///
/// A stage reports all of its problems at once, so this always wraps the
/// full list in source order rather than only the first finding.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn iter(&self) -> slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }
}

impl<'a> IntoIterator for &'a ParseError {
    type Item = &'a Diagnostic;
    type IntoIter = slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Shows the first diagnostic and how many follow it.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.diagnostics.split_first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        if !rest.is_empty() {
            write!(f, " (+{} more)", rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorCode;

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let err = ParseError::from(Diagnostic::error("Missing @ (source)").with_code(ErrorCode::E200));

        assert_eq!(err.to_string(), "error[E200]: Missing @ (source)");
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E200));
    }

    #[test]
    fn test_counts_remaining_diagnostics() {
        let err = ParseError::from(vec![
            Diagnostic::error("Missing # (title)"),
            Diagnostic::error("Missing ! (claim)"),
            Diagnostic::error("Missing > (insight)"),
        ]);

        assert_eq!(err.to_string(), "error: Missing # (title) (+2 more)");
        assert_eq!((&err).into_iter().count(), 3);
        assert_eq!(err.into_diagnostics()[2].message(), "Missing > (insight)");
    }

    #[test]
    fn test_empty_displays_nothing() {
        assert_eq!(ParseError::new(Vec::new()).to_string(), "");
    }
}
