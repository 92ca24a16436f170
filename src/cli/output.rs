//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cli::args::{LegibleArgs, OutputFormat};
use crate::error::Result;
use crate::readability::{AnalysisResult, ClassifiedSentence, Difficulty};

/// Types that can be rendered for a terminal reader.
pub trait HumanReadable {
    /// Render this value as human-readable text.
    fn to_human(&self) -> String;
}

/// Result structure for one analyzed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub target_grade: f64,
    pub meets_target: bool,
}

/// Result structure for the analyze command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReports {
    pub results: Vec<AnalysisReport>,
}

/// Result structure for the highlight command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightReport {
    pub sentences: Vec<ClassifiedSentence>,
    pub hard: usize,
    pub very_hard: usize,
}

impl HighlightReport {
    /// Build a report, counting flagged sentences before any filtering.
    pub fn new(sentences: Vec<ClassifiedSentence>, flagged_only: bool) -> Self {
        let hard = count_of(&sentences, Difficulty::Hard);
        let very_hard = count_of(&sentences, Difficulty::VeryHard);
        let sentences = if flagged_only {
            sentences
                .into_iter()
                .filter(|s| s.difficulty.is_flagged())
                .collect()
        } else {
            sentences
        };

        HighlightReport {
            sentences,
            hard,
            very_hard,
        }
    }
}

fn count_of(sentences: &[ClassifiedSentence], difficulty: Difficulty) -> usize {
    sentences
        .iter()
        .filter(|s| s.difficulty == difficulty)
        .count()
}

/// Syllable estimate for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSyllables {
    pub word: String,
    pub syllables: usize,
}

/// Result structure for the syllables command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableReport {
    pub words: Vec<WordSyllables>,
    pub total: usize,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &LegibleArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    println!("{}", render(result, args.output_format, args.pretty)?);
    Ok(())
}

/// Render a result without printing it.
pub fn render<T: Serialize + HumanReadable>(
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(result.to_human()),
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Json => Ok(serde_json::to_string(result)?),
    }
}

impl HumanReadable for AnalysisReport {
    fn to_human(&self) -> String {
        let analysis = &self.analysis;
        let mut out = String::new();

        let _ = writeln!(out, "Readability:");
        let _ = writeln!(out, "════════════");
        if analysis.is_empty() {
            let _ = writeln!(out, "Grade level: ...");
        } else {
            let verdict = if self.meets_target {
                "within target"
            } else {
                "above target"
            };
            let _ = writeln!(
                out,
                "Grade level: {} (target {}, {verdict})",
                analysis.grade_level, self.target_grade
            );
        }
        let _ = writeln!(out, "Words:       {}", analysis.words);
        let _ = writeln!(out, "Sentences:   {}", analysis.sentences);
        let _ = write!(out, "Syllables:   {}", analysis.syllables);
        out
    }
}

impl HumanReadable for AnalysisReports {
    fn to_human(&self) -> String {
        self.results
            .iter()
            .map(HumanReadable::to_human)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl HumanReadable for HighlightReport {
    fn to_human(&self) -> String {
        let mut out = String::new();

        for sentence in &self.sentences {
            let _ = writeln!(
                out,
                "[{:>9}] ({:>2} words) {}",
                sentence.difficulty.as_str(),
                sentence.word_count,
                sentence.text.trim()
            );
        }

        let _ = write!(
            out,
            "{} hard, {} very hard",
            self.hard, self.very_hard
        );
        out
    }
}

impl HumanReadable for SyllableReport {
    fn to_human(&self) -> String {
        let width = self.words.iter().map(|w| w.word.chars().count()).max().unwrap_or(0);
        let mut out = String::new();

        for word in &self.words {
            let _ = writeln!(out, "{:<width$}  {}", word.word, word.syllables);
        }
        let _ = write!(out, "Total: {}", self.total);
        out
    }
}

impl HumanReadable for String {
    fn to_human(&self) -> String {
        self.clone()
    }
}
