//! Error types for Quill operations.
//!
//! This module provides the main error type [`QuillError`] which wraps the
//! error conditions that can occur while compiling a post.

use std::io;

use thiserror::Error;

use quill_parser::error::{Diagnostic, ParseError};

/// The main error type for Quill operations.
///
/// # Diagnostic Variants
///
/// The `Compile` variant carries every diagnostic that blocked compilation
/// together with the source text, so callers can render labeled snippets.
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Compile { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuillError {
    /// Create a new `Compile` error with the associated source code.
    pub fn new_compile_error(diagnostics: Vec<Diagnostic>, src: impl Into<String>) -> Self {
        Self::Compile {
            err: ParseError::new(diagnostics),
            src: src.into(),
        }
    }
}
