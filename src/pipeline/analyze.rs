// Single-document analysis.
//
// Runs every component over one text and assembles the AnalysisReport.
// Components don't depend on each other's output, so order only matters for
// failure policy: a normalization or sentiment fault aborts the request,
// a topic extraction fault leaves a placeholder and the report continues.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::document::NormalizedDocument;
use crate::error::{AnalysisError, PreprocessingError};
use crate::metrics::frequency::{self, TermCount};
use crate::metrics::readability::{self, ReadabilityMetric};
use crate::metrics;
use crate::sentiment::scorer::{SentimentResult, SentimentScorer};
use crate::sentiment::traits::SentimentOracle;
use crate::summary;
use crate::text::normalizer::TextNormalizer;
use crate::text::resources::LanguageResources;
use crate::topics::traits::TopicModel;
use crate::topics::Topic;

/// Per-request knobs for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many ranked keywords to keep
    pub keyword_count: usize,
    /// How many topics to ask the topic model for
    pub topic_count: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            keyword_count: 12,
            topic_count: 3,
        }
    }
}

/// Topics, or why there aren't any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TopicSection {
    Extracted { topics: Vec<Topic> },
    Unavailable { reason: String },
}

impl TopicSection {
    pub fn topics(&self) -> &[Topic] {
        match self {
            TopicSection::Extracted { topics } => topics,
            TopicSection::Unavailable { .. } => &[],
        }
    }
}

/// Everything derived from one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Source column for tabular input
    pub column: Option<String>,
    pub word_count: usize,
    pub sentence_count: usize,
    pub character_count: usize,
    pub average_word_length: f64,
    pub sentiment: SentimentResult,
    pub keywords: Vec<TermCount>,
    pub topics: TopicSection,
    pub readability: ReadabilityMetric,
    pub summary: String,
    pub extractive_summary: String,
}

pub struct Analyzer {
    normalizer: TextNormalizer,
    sentiment: SentimentScorer,
    topics: Box<dyn TopicModel>,
    options: AnalysisOptions,
}

impl Analyzer {
    pub fn new(
        normalizer: TextNormalizer,
        sentiment: SentimentScorer,
        topics: Box<dyn TopicModel>,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            normalizer,
            sentiment,
            topics,
            options,
        }
    }

    /// English resources with the given oracle and topic model.
    pub fn english(
        oracle: Arc<dyn SentimentOracle>,
        topics: Box<dyn TopicModel>,
        options: AnalysisOptions,
    ) -> Self {
        Self::new(
            TextNormalizer::new(LanguageResources::english()),
            SentimentScorer::new(oracle),
            topics,
            options,
        )
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Normalize raw text, then analyze the normalized form.
    pub fn analyze_text(&self, raw: &str) -> Result<AnalysisReport, AnalysisError> {
        let normalized = self.normalizer.normalize_text(raw);
        self.analyze_document(&normalized)
    }

    /// Decode a byte payload as UTF-8 and analyze it.
    pub fn analyze_bytes(&self, bytes: Vec<u8>) -> Result<AnalysisReport, AnalysisError> {
        let text = String::from_utf8(bytes).map_err(PreprocessingError::wrap)?;
        self.analyze_text(&text)
    }

    pub fn analyze_document(
        &self,
        doc: &NormalizedDocument,
    ) -> Result<AnalysisReport, AnalysisError> {
        let mut report = self.analyze_prepared(&doc.text)?;
        report.column = doc.column.clone();
        Ok(report)
    }

    /// Analyze `text` exactly as given, without normalizing it first.
    pub fn analyze_prepared(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let sentiment = self
            .sentiment
            .score(text)
            .map_err(AnalysisError::Sentiment)?;

        let keywords = frequency::top_tokens(text, self.options.keyword_count);

        let topics = match self.topics.extract_topics(text, self.options.topic_count) {
            Ok(topics) => TopicSection::Extracted { topics },
            Err(e) => {
                warn!(error = %e, "Topic extraction skipped");
                TopicSection::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        let readability = readability::estimate(text);
        let summary = summary::comprehensive_summary(text, &sentiment.scores, &keywords);

        let report = AnalysisReport {
            column: None,
            word_count: metrics::word_count(text),
            sentence_count: metrics::sentence_count(text),
            character_count: metrics::character_count(text),
            average_word_length: metrics::average_word_length(text),
            sentiment,
            keywords,
            topics,
            readability,
            summary,
            extractive_summary: summary::extractive_summary(text),
        };

        info!(
            words = report.word_count,
            sentences = report.sentence_count,
            sentiment = %report.sentiment.label,
            topics = report.topics.topics().len(),
            "Analysis complete"
        );

        Ok(report)
    }
}
