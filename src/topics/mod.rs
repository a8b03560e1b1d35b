// Topic extraction: latent topics from the sentences of a document.
//
// The TopicModel trait is the seam. LdaModeler (TF-IDF vector space + seeded
// LDA) is the default; KeywordClusterModeler groups co-occurring TF-IDF
// keywords instead and needs no model fit.
//
// Both share the same sentence preparation: split on periods, drop blanks,
// shrink the topic count for short texts, cap the sentence window.

pub mod keywords;
pub mod lda;
pub mod traits;
pub mod vectorizer;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TopicExtractionError;
use crate::metrics;

/// Keywords kept per topic.
pub const KEYWORDS_PER_TOPIC: usize = 5;

/// A labeled group of keywords, highest weight first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// "Topic 1", "Topic 2", ... by component index
    pub label: String,
    pub keywords: Vec<String>,
}

impl Topic {
    pub fn new(index: usize, keywords: Vec<String>) -> Self {
        Self {
            label: format!("Topic {}", index + 1),
            keywords,
        }
    }
}

/// Tuning knobs shared by the topic models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSettings {
    /// Only the first this-many sentences are modeled
    pub sentence_window: usize,
    /// Vocabulary cap for the vector space
    pub max_features: usize,
    /// LDA iteration budget
    pub max_iterations: usize,
    /// Seed for the model's random initialization
    pub seed: u64,
}

impl Default for TopicSettings {
    fn default() -> Self {
        Self {
            sentence_window: 100,
            max_features: 50,
            max_iterations: 20,
            seed: 42,
        }
    }
}

/// Sentences ready for vectorizing, plus the topic count after reduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSentences {
    pub sentences: Vec<String>,
    pub topic_count: usize,
}

/// Split, validate and window the sentences of `text`.
///
/// Fewer than two usable sentences is an error. When there are fewer
/// sentences than requested topics, the count drops to `max(1, n - 1)`.
pub fn prepare_sentences(
    text: &str,
    requested: usize,
    sentence_window: usize,
) -> Result<PreparedSentences, TopicExtractionError> {
    let all = metrics::sentences(text);
    if all.len() < 2 {
        return Err(TopicExtractionError::InsufficientSentences { found: all.len() });
    }

    let mut topic_count = requested.max(1);
    if all.len() < topic_count {
        topic_count = (all.len() - 1).max(1);
    }

    let sentences: Vec<String> = all
        .into_iter()
        .take(sentence_window.max(1))
        .map(str::to_string)
        .collect();

    debug!(
        sentences = sentences.len(),
        requested,
        topic_count,
        "Prepared sentences for topic extraction"
    );

    Ok(PreparedSentences {
        sentences,
        topic_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sentence_rejected() {
        let err = prepare_sentences("Only one sentence here.", 3, 100).unwrap_err();
        assert_eq!(err, TopicExtractionError::InsufficientSentences { found: 1 });
    }

    #[test]
    fn test_topic_count_reduced() {
        let prepared = prepare_sentences("One. Two.", 3, 100).unwrap();
        assert_eq!(prepared.topic_count, 1);
        let prepared = prepare_sentences("One. Two. Three. Four.", 3, 100).unwrap();
        assert_eq!(prepared.topic_count, 3);
    }

    #[test]
    fn test_window_caps_sentences() {
        let text = "a b. c d. e f. g h. i j.";
        let prepared = prepare_sentences(text, 2, 3).unwrap();
        assert_eq!(prepared.sentences, vec!["a b", "c d", "e f"]);
    }
}
