//! Quill CLI library
//!
//! This module contains the core CLI logic for the Quill post tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, STDIN};

use std::{
    fmt::Write as _,
    fs,
    io::{self, Read as _},
    process::ExitCode,
};

use log::{info, log};

use quill::{PostBuilder, QuillError, analyze::Analysis};

use error_adapter::{DiagnosticAdapter, render};

/// Run the Quill CLI application
///
/// `compile` turns markup into a post and writes it to the output file or
/// standard output. `analyze` prints a summary (or JSON) of the analysis of
/// plain text.
///
/// # Returns
///
/// [`ExitCode::FAILURE`] when `analyze` finds the text invalid, otherwise
/// [`ExitCode::SUCCESS`].
///
/// # Errors
///
/// Returns `QuillError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Compilation errors
pub fn run(args: &Args) -> Result<ExitCode, QuillError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = PostBuilder::new(app_config);

    let source = read_input(args.command.input())?;

    match &args.command {
        Command::Compile { input, output } => {
            info!(input_path = input, output_path:? = output; "Compiling post");

            let compilation = builder.compile(&source);
            for diag in compilation.warnings() {
                let report = render(&DiagnosticAdapter::new(diag, &source));
                log!(diag.severity().log_level(), "{report}");
            }
            let post = compilation.into_result(&source)?;

            match output {
                Some(path) => {
                    fs::write(path, &post)?;
                    info!(output_file = path; "Post written");
                }
                None => println!("{post}"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze { input, json } => {
            info!(input_path = input, json = *json; "Analyzing text");

            let analysis = builder.analyze(&source);
            if *json {
                let json = serde_json::to_string_pretty(&analysis)
                    .map_err(|err| QuillError::Io(io::Error::other(err)))?;
                println!("{json}");
            } else {
                print!("{}", summary(&analysis));
            }

            Ok(if analysis.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Read the whole input, from standard input when `path` is `-`.
fn read_input(path: &str) -> Result<String, QuillError> {
    if path == STDIN {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn yes_no(present: bool) -> &'static str {
    if present { "yes" } else { "no" }
}

/// Human-readable report of an analysis.
fn summary(analysis: &Analysis) -> String {
    let structure = analysis.structure();
    let mut out = String::new();

    let verdict = if analysis.is_valid() { "valid" } else { "invalid" };
    let _ = writeln!(out, "Score: {}/100 ({verdict})", analysis.score());
    let _ = writeln!(
        out,
        "Structure: title {}, claim {}, evidence {}, insight {}, source {}",
        yes_no(structure.has_title()),
        yes_no(structure.has_claim()),
        structure.evidence(),
        yes_no(structure.has_insight()),
        yes_no(structure.has_source()),
    );

    for (heading, items) in [
        ("Issues", analysis.issues()),
        ("Warnings", analysis.warnings()),
        ("Suggestions", analysis.suggestions()),
    ] {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{heading}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }

    out
}
