//! A text document with a live readability analysis.
//!
//! [`Document`] is the single source of truth for the text a user is
//! editing. Every change goes through [`Document::set_text`], which
//! recomputes the analysis, so the analysis never goes stale. Any editable
//! view of the text is a projection that writes back through that path.

use std::sync::Arc;

use crate::error::{LegibleError, Result};
use crate::readability::{AnalysisResult, ClassifiedSentence, ReadabilityAnalyzer, SAMPLE_TEXT};
use crate::rewrite::Rewriter;

/// Text plus its current analysis.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    analysis: AnalysisResult,
    analyzer: Arc<ReadabilityAnalyzer>,
}

impl Document {
    /// Create a document analyzed with the default analyzer.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::with_analyzer(text, Arc::new(ReadabilityAnalyzer::new()))
    }

    /// Create a document analyzed with a shared analyzer.
    pub fn with_analyzer<S: Into<String>>(text: S, analyzer: Arc<ReadabilityAnalyzer>) -> Self {
        let text = text.into();
        let analysis = analyzer.analyze(&text);
        Document {
            text,
            analysis,
            analyzer,
        }
    }

    /// Create a document holding [`SAMPLE_TEXT`].
    pub fn sample() -> Self {
        Self::new(SAMPLE_TEXT)
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The analysis of the current text.
    pub fn analysis(&self) -> AnalysisResult {
        self.analysis
    }

    /// Whether the document has nothing to analyze.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the text and recompute the analysis.
    pub fn set_text<S: Into<String>>(&mut self, text: S) -> AnalysisResult {
        self.text = text.into();
        self.analysis = self.analyzer.analyze(&self.text);
        self.analysis
    }

    /// Replace the text with [`SAMPLE_TEXT`].
    pub fn reset_to_sample(&mut self) -> AnalysisResult {
        self.set_text(SAMPLE_TEXT)
    }

    /// Difficulty labels for every sentence of the current text.
    pub fn highlights(&self) -> Vec<ClassifiedSentence> {
        self.analyzer.classify_sentences(&self.text)
    }

    /// Whether the current text is at or below the analyzer's target grade.
    pub fn meets_target(&self) -> bool {
        self.analyzer.meets_target(&self.analysis)
    }

    /// Rewrite the text with an external service.
    ///
    /// On success the rewritten text replaces the current text and the new
    /// analysis is returned. On failure, or when the service returns blank
    /// text, the error is returned and the document is left exactly as it
    /// was. Empty documents are rejected without calling the service.
    pub async fn rewrite_with(
        &mut self,
        rewriter: &dyn Rewriter,
        target_grade: f64,
    ) -> Result<AnalysisResult> {
        if self.is_empty() {
            return Err(LegibleError::invalid_argument("nothing to rewrite"));
        }

        log::info!(
            "rewriting {} words towards grade {} with {}",
            self.analysis.words,
            target_grade,
            rewriter.name()
        );

        let rewritten = match rewriter.rewrite(&self.text, target_grade).await {
            Ok(rewritten) => rewritten,
            Err(e) => {
                log::warn!("rewrite with {} failed: {e}", rewriter.name());
                return Err(e);
            }
        };

        if rewritten.trim().is_empty() {
            log::warn!("rewrite with {} returned blank text", rewriter.name());
            return Err(LegibleError::rewrite("service returned blank text"));
        }

        Ok(self.set_text(rewritten))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(String::new())
    }
}
