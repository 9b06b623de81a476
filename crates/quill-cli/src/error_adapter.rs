//! Error adapter for converting QuillError to miette diagnostics.
//!
//! This module bridges the library's error types and miette's rich
//! diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A failed compilation usually carries several diagnostics (one per missing
//! field, one per banned phrase, ...). Each is rendered independently so every
//! problem gets its own snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use quill::QuillError;
use quill_parser::{Span, error::Diagnostic};

/// Adapter for a single Quill diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diag.severity() {
            quill::Severity::Error => miette::Severity::Error,
            quill::Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self
            .diag
            .help()
            .or_else(|| self.diag.code().map(|code| code.description()))?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        // Structural and style findings have no location to show.
        self.diag
            .label()
            .map(|_| &self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = self.diag.label()?;
        let span = LabeledSpan::new_primary_with_span(
            Some(label.message().to_string()),
            span_to_miette(label.span()),
        );
        Some(Box::new(std::iter::once(span)))
    }
}

/// Adapter for [`QuillError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a QuillError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            QuillError::Io(_) => "quill::io",
            QuillError::Compile { .. } => return None,
            QuillError::Config(_) => "quill::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            QuillError::Config(_) => Some(Box::new(
                "configuration is read from --config, quill/config.toml or the user config directory",
            )),
            _ => None,
        }
    }
}

/// Anything the CLI can hand to miette's report handler.
pub type Reportable<'a> = Box<dyn MietteDiagnostic + 'a>;

/// Render a reportable with miette's graphical handler.
pub fn render(reportable: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut writer, reportable)
        .map(|()| writer)
        .unwrap_or_else(|_| reportable.to_string())
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`QuillError`] into a list of reportable errors.
///
/// [`QuillError::Compile`] yields one [`Reportable`] per diagnostic; every
/// other variant yields a single one.
pub fn to_reportables(err: &QuillError) -> Vec<Reportable<'_>> {
    match err {
        QuillError::Compile { err, src } => err
            .diagnostics()
            .iter()
            .map(|d| Box::new(DiagnosticAdapter::new(d, src)) as Reportable<'_>)
            .collect(),
        _ => vec![Box::new(ErrorAdapter(err))],
    }
}
