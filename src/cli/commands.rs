//! Command implementations for the Legible CLI.

use std::io::{self, Read};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{LegibleError, Result};
use crate::readability::{ReadabilityAnalyzer, ReadabilityConfig, SAMPLE_TEXT};

/// Execute a CLI command.
pub fn execute_command(args: LegibleArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args.clone(), config, &args),
        Command::Highlight(highlight_args) => {
            highlight_text(highlight_args.clone(), config, &args)
        }
        Command::Syllables(syllables_args) => {
            count_syllables(syllables_args.clone(), config, &args)
        }
        Command::Sample => output_result("Sample text", &SAMPLE_TEXT.to_string(), &args),
    }
}

/// Load the readability configuration named on the command line, or the defaults.
pub fn load_config(args: &LegibleArgs) -> Result<ReadabilityConfig> {
    match &args.config {
        Some(path) => ReadabilityConfig::from_json_file(path),
        None => Ok(ReadabilityConfig::default()),
    }
}

/// Analyze one or more texts.
fn analyze_text(
    args: AnalyzeArgs,
    config: ReadabilityConfig,
    cli_args: &LegibleArgs,
) -> Result<()> {
    let config = match args.target_grade {
        Some(target_grade) => config.target_grade(target_grade),
        None => config,
    };
    let analyzer = ReadabilityAnalyzer::with_config(config)?;

    let texts = if args.sample {
        vec![SAMPLE_TEXT.to_string()]
    } else if args.texts.is_empty() {
        vec![read_stdin()?]
    } else {
        args.texts
    };

    let reports = analyze_reports(&analyzer, texts.as_slice());
    log::debug!("analyzed {} text(s)", reports.results.len());

    output_result("Readability analysis", &reports, cli_args)
}

/// Score every text and attach the target verdict.
pub fn analyze_reports<S: AsRef<str> + Sync>(
    analyzer: &ReadabilityAnalyzer,
    texts: &[S],
) -> AnalysisReports {
    let target_grade = analyzer.config().target_grade;
    let results = analyzer
        .analyze_batch(texts)
        .into_iter()
        .map(|analysis| AnalysisReport {
            analysis,
            target_grade,
            meets_target: analyzer.meets_target(&analysis),
        })
        .collect();

    AnalysisReports { results }
}

/// Label the sentences of a text.
fn highlight_text(
    args: HighlightArgs,
    config: ReadabilityConfig,
    cli_args: &LegibleArgs,
) -> Result<()> {
    let analyzer = ReadabilityAnalyzer::with_config(config)?;

    let text = if args.sample {
        SAMPLE_TEXT.to_string()
    } else {
        match args.text {
            Some(text) => text,
            None => read_stdin()?,
        }
    };

    let report = HighlightReport::new(analyzer.classify_sentences(&text), args.flagged_only);
    output_result("Sentence difficulty", &report, cli_args)
}

/// Estimate syllables for individual words.
fn count_syllables(
    args: SyllablesArgs,
    config: ReadabilityConfig,
    cli_args: &LegibleArgs,
) -> Result<()> {
    let analyzer = ReadabilityAnalyzer::with_config(config)?;
    let report = syllable_report(&analyzer, &args.words);
    output_result("Syllable estimates", &report, cli_args)
}

/// Estimate syllables for each word, in order.
pub fn syllable_report(analyzer: &ReadabilityAnalyzer, words: &[String]) -> SyllableReport {
    let words: Vec<WordSyllables> = words
        .iter()
        .map(|word| WordSyllables {
            word: word.clone(),
            syllables: analyzer.count_syllables(word),
        })
        .collect();
    let total = words.iter().map(|w| w.syllables).sum();

    SyllableReport { words, total }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    if text.is_empty() {
        return Err(LegibleError::invalid_argument(
            "no text given; pass TEXT or pipe it on standard input",
        ));
    }
    Ok(text)
}
