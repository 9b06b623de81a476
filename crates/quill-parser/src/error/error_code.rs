//! Error codes for the Quill diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Directive syntax errors
//! - `E2xx` - Structural errors (required fields, evidence count)
//! - `E3xx` - Length errors
//! - `E4xx` - Style errors
//!
//! Warnings use the `W` prefix with the number of the related error family.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Malformed title directive.
    ///
    /// A `#` line did not match `# "Your title"`.
    E100,

    /// Malformed claim directive.
    ///
    /// A `!` line did not match `! "Your main claim"`.
    E101,

    /// Malformed evidence directive.
    ///
    /// A `+` line did not match `+ value | "context"`.
    E102,

    /// Malformed insight directive.
    ///
    /// A `>` line did not match `> "Your insight"`.
    E103,

    /// Malformed source directive.
    ///
    /// A `@` line did not match `@ "Title" | url` with an optional
    /// `| "credibility"` segment.
    E104,

    // =========================================================================
    // Structural Errors (E2xx)
    // =========================================================================
    /// Missing required field.
    ///
    /// One of title, claim, evidence, insight or source was never declared.
    E200,

    /// Too many evidence items.
    ///
    /// A post carries at most five evidence items.
    E201,

    // =========================================================================
    // Length Errors (E3xx)
    // =========================================================================
    /// Field exceeds its character limit.
    E300,

    /// Evidence item exceeds the evidence limit.
    ///
    /// Measured as the value and context joined by a space.
    E301,

    /// Rendered output exceeds the total limit.
    E302,

    // =========================================================================
    // Style Errors (E4xx)
    // =========================================================================
    /// Banned phrase.
    ///
    /// The prose contains a phrase from the banned list.
    E400,

    /// Emoji in prose.
    E401,

    /// Exclamation marks in prose.
    E402,

    /// Title phrased as a question.
    E403,

    /// Exclamation mark in title.
    E404,

    // =========================================================================
    // Warnings
    // =========================================================================
    /// Context exceeds its character limit.
    ///
    /// Unlike other length rules this one is advisory.
    W300,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Syntax errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            // Structural errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            // Length errors
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            // Style errors
            ErrorCode::E400 => "E400",
            ErrorCode::E401 => "E401",
            ErrorCode::E402 => "E402",
            ErrorCode::E403 => "E403",
            ErrorCode::E404 => "E404",
            // Warnings
            ErrorCode::W300 => "W300",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid title directive",
            ErrorCode::E101 => "invalid claim directive",
            ErrorCode::E102 => "invalid evidence directive",
            ErrorCode::E103 => "invalid insight directive",
            ErrorCode::E104 => "invalid source directive",
            ErrorCode::E200 => "missing required field",
            ErrorCode::E201 => "too many evidence items",
            ErrorCode::E300 => "field too long",
            ErrorCode::E301 => "evidence item too long",
            ErrorCode::E302 => "output too long",
            ErrorCode::E400 => "banned phrase",
            ErrorCode::E401 => "emoji not allowed",
            ErrorCode::E402 => "exclamation marks not allowed",
            ErrorCode::E403 => "question title",
            ErrorCode::E404 => "exclamation mark in title",
            ErrorCode::W300 => "context too long",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E200.to_string(), "E200");
        assert_eq!(ErrorCode::E302.to_string(), "E302");
        assert_eq!(ErrorCode::W300.to_string(), "W300");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E104.description(), "invalid source directive");
        assert_eq!(ErrorCode::E200.description(), "missing required field");
        assert_eq!(ErrorCode::E400.description(), "banned phrase");
    }
}
