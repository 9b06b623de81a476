//! Quill - A markup language for structured, evidence-backed posts.
//!
//! Parsing, validation and rendering for Quill markup, plus a heuristic
//! analyzer that scores arbitrary plain text against the same house style.

pub mod analyze;
pub mod config;
pub mod render;

mod error;

pub use quill_core::{document, limits, rules};
pub use quill_parser::error::{Diagnostic, ErrorCode, Severity};

pub use error::QuillError;

use log::{debug, info, trace};

use quill_core::{document::Document, rules::StyleRules};
use quill_parser::{ValidationReport, Validator};

use analyze::{Analysis, Analyzer};
use config::AppConfig;

/// The outcome of compiling one source.
///
/// On success `output` holds the rendered post. On failure it is `None` and
/// `errors` holds the diagnostics of the first stage that failed. Warnings
/// are reported either way.
#[derive(Debug, Clone)]
pub struct Compilation {
    output: Option<String>,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Compilation {
    fn failed(errors: Vec<Diagnostic>, warnings: Vec<Diagnostic>) -> Self {
        Self {
            output: None,
            errors,
            warnings,
        }
    }

    /// Returns `true` if the source compiled.
    pub fn success(&self) -> bool {
        self.output.is_some()
    }

    /// Returns the rendered post, if compilation succeeded.
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Returns the rendered post, or a [`QuillError::Compile`] carrying the
    /// errors and `source` for snippet rendering. Warnings are discarded.
    pub fn into_result(self, source: &str) -> Result<String, QuillError> {
        match self.output {
            Some(output) => Ok(output),
            None => Err(QuillError::new_compile_error(self.errors, source)),
        }
    }
}

/// Builder for compiling Quill markup and analyzing plain text.
///
/// # Examples
///
/// ```rust
/// use quill::{PostBuilder, config::AppConfig};
///
/// let source = concat!(
///     "# \"Title\"\n",
///     "! \"Claim\"\n",
///     "+ 10% | \"improvement\"\n",
///     "> \"Insight\"\n",
///     "@ \"Source\" | https://example.com\n",
/// );
///
/// let builder = PostBuilder::new(AppConfig::default());
/// let compilation = builder.compile(source);
/// assert!(compilation.success());
///
/// let analysis = builder.analyze(compilation.output().unwrap());
/// assert_eq!(analysis.score(), 100);
/// ```
#[derive(Debug, Default)]
pub struct PostBuilder {
    config: AppConfig,
}

impl PostBuilder {
    /// Create a new post builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Default limits and analyzer thresholds
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn validator(&self) -> Validator<'static> {
        Validator::new(*self.config.limits(), StyleRules::standard())
    }

    /// Parse source into a document.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Compile`] with one diagnostic per malformed
    /// directive.
    pub fn parse(&self, source: &str) -> Result<Document, QuillError> {
        let parsed = quill_parser::parse(source);
        let document = parsed
            .into_result()
            .map_err(|err| QuillError::Compile {
                err,
                src: source.to_string(),
            })?;
        trace!(document:?; "Parsed document");
        Ok(document)
    }

    /// Check a document against the configured limits and the style rules.
    pub fn validate(&self, document: &Document) -> ValidationReport {
        self.validator().validate(document)
    }

    /// Compile source into a rendered post.
    ///
    /// Stages run in order and the first failing stage ends compilation:
    /// syntax errors are returned without validating, validation errors are
    /// returned without rendering, and the rendered post is finally checked
    /// against the effective `total` limit.
    pub fn compile(&self, source: &str) -> Compilation {
        info!("Compiling post");

        let (document, syntax_errors) = quill_parser::parse(source).into_parts();
        if !syntax_errors.is_empty() {
            info!(errors = syntax_errors.len(); "Compilation stopped at parsing");
            return Compilation::failed(syntax_errors, Vec::new());
        }

        let validator = self.validator();
        let (errors, warnings) = validator.validate(&document).into_parts();
        for warning in &warnings {
            debug!(warning:%; "Validation warning");
        }
        if !errors.is_empty() {
            info!(errors = errors.len(); "Compilation stopped at validation");
            return Compilation::failed(errors, warnings);
        }

        let output = render::generate(&document);
        if let Some(too_long) = validator.check_output(&document, &output) {
            info!("Compilation stopped at output length check");
            return Compilation::failed(vec![too_long], warnings);
        }

        debug!(chars = output.chars().count(); "Post compiled");
        Compilation {
            output: Some(output),
            errors: Vec::new(),
            warnings,
        }
    }

    /// Score plain text against the house style. This never fails.
    pub fn analyze(&self, text: &str) -> Analysis {
        Analyzer::new(self.config.analyzer(), StyleRules::standard()).analyze(text)
    }
}

/// Compile source with the default configuration.
pub fn compile(source: &str) -> Compilation {
    PostBuilder::default().compile(source)
}

/// Analyze plain text with the default configuration.
pub fn analyze(text: &str) -> Analysis {
    PostBuilder::default().analyze(text)
}
