//! Command-line argument definitions for the Quill CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A subcommand selects compilation or analysis; the global
//! options control configuration file selection and logging verbosity.

use clap::{Parser, Subcommand};

/// Input path that reads from standard input.
pub const STDIN: &str = "-";

/// Command-line arguments for the Quill post tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile Quill markup into a plain-text post
    Compile {
        /// Path to the input Quill file, or `-` for standard input
        #[arg(help = "Path to the input file, or - for stdin")]
        input: String,

        /// Path to the output text file; prints to standard output if omitted
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Score plain text against the house style
    Analyze {
        /// Path to the input text file, or `-` for standard input
        #[arg(help = "Path to the input file, or - for stdin")]
        input: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Returns the input path of the subcommand.
    pub fn input(&self) -> &str {
        match self {
            Command::Compile { input, .. } | Command::Analyze { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_subcommand() {
        let args = Args::parse_from(["quill", "compile", "post.quill", "-o", "post.txt"]);

        match args.command {
            Command::Compile { input, output } => {
                assert_eq!(input, "post.quill");
                assert_eq!(output.as_deref(), Some("post.txt"));
            }
            Command::Analyze { .. } => panic!("Expected Compile"),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_analyze_subcommand_with_global_options() {
        let args = Args::parse_from([
            "quill",
            "analyze",
            "-",
            "--json",
            "--config",
            "quill.toml",
            "--log-level",
            "debug",
        ]);

        assert!(matches!(args.command, Command::Analyze { json: true, .. }));
        assert_eq!(args.command.input(), STDIN);
        assert_eq!(args.config.as_deref(), Some("quill.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["quill"]).is_err());
    }
}
