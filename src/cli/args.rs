//! Command line argument parsing for the Legible CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Legible - Flesch-Kincaid readability checker
#[derive(Parser, Debug, Clone)]
#[command(name = "legible")]
#[command(about = "Score text readability and highlight hard sentences")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LegibleArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Readability configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEGIBLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LegibleArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compute word, sentence and syllable counts and the grade level
    Analyze(AnalyzeArgs),

    /// Label each sentence as normal, hard or very hard
    Highlight(HighlightArgs),

    /// Estimate the syllables of individual words
    Syllables(SyllablesArgs),

    /// Print the bundled sample text
    Sample,
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Texts to analyze; reads standard input when omitted
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Analyze the bundled sample text instead
    #[arg(long, conflicts_with = "texts")]
    pub sample: bool,

    /// Override the configured target grade level
    #[arg(short, long)]
    pub target_grade: Option<f64>,
}

/// Arguments for highlighting sentences
#[derive(Parser, Debug, Clone)]
pub struct HighlightArgs {
    /// Text to highlight; reads standard input when omitted
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Highlight the bundled sample text instead
    #[arg(long, conflicts_with = "text")]
    pub sample: bool,

    /// Only show hard and very hard sentences
    #[arg(long)]
    pub flagged_only: bool,
}

/// Arguments for syllable estimation
#[derive(Parser, Debug, Clone)]
pub struct SyllablesArgs {
    /// Words to estimate
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let args = LegibleArgs::parse_from(["legible", "-f", "json", "analyze", "One.", "Two."]);
        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Analyze(analyze) => {
                assert_eq!(analyze.texts, vec!["One.", "Two."]);
                assert!(!analyze.sample);
                assert!(analyze.target_grade.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = LegibleArgs::parse_from(["legible", "sample"]);
        assert_eq!(args.verbosity(), 1);

        let args = LegibleArgs::parse_from(["legible", "-vvv", "sample"]);
        assert_eq!(args.verbosity(), 3);

        let args = LegibleArgs::parse_from(["legible", "-vv", "-q", "sample"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_syllables_requires_words() {
        assert!(LegibleArgs::try_parse_from(["legible", "syllables"]).is_err());
        assert!(LegibleArgs::try_parse_from(["legible", "syllables", "word"]).is_ok());
    }

    #[test]
    fn test_sample_conflicts_with_text() {
        assert!(
            LegibleArgs::try_parse_from(["legible", "highlight", "--sample", "Some text."])
                .is_err()
        );
    }
}
