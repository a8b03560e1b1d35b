// Summary synthesis: an extractive excerpt and a templated narrative.
//
// Both are pure functions of their inputs: no randomness, no I/O.

use crate::metrics::{self, frequency::TermCount};
use crate::sentiment::scorer::SentimentLabel;
use crate::sentiment::traits::PolarityScores;

const EXCERPT_CHARS: usize = 1000;

/// First sentence plus the second-to-last period-delimited segment.
///
/// Texts with two or fewer segments get their first 1000 characters and
/// an ellipsis instead.
pub fn extractive_summary(text: &str) -> String {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() > 2 {
        format!(
            "{}. {}.",
            segments[0].trim(),
            segments[segments.len() - 2].trim()
        )
    } else {
        let excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
        format!("{excerpt}...")
    }
}

fn sentiment_descriptor(compound: f64) -> &'static str {
    match SentimentLabel::from_compound(compound) {
        SentimentLabel::Positive => "predominantly positive tone",
        SentimentLabel::Negative => "predominantly negative tone",
        SentimentLabel::Neutral => "neutral sentiment",
    }
}

fn complexity_descriptor(average_word_length: f64) -> &'static str {
    if average_word_length > 6.0 {
        "sophisticated and complex language"
    } else if average_word_length > 4.5 {
        "moderate vocabulary complexity"
    } else {
        "simple and accessible language"
    }
}

/// Narrative paragraph built from counts, tone, vocabulary and top terms.
///
/// Only the first five entries of `keywords` are used.
pub fn comprehensive_summary(text: &str, scores: &PolarityScores, keywords: &[TermCount]) -> String {
    let words = metrics::word_count(text);
    let sentences = metrics::sentence_count(text);
    let tone = sentiment_descriptor(scores.compound);
    let complexity = complexity_descriptor(metrics::average_word_length(text));

    let top_terms = keywords
        .iter()
        .take(5)
        .map(|k| k.term.to_lowercase())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "This text contains {words} words organized across {sentences} sentences, \
         maintaining a {tone}. The content demonstrates {complexity}, with primary focus \
         on topics including {top_terms}. The analysis reveals a well-structured composition \
         that effectively communicates its key messages through strategic use of language \
         and thematic elements."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractive_multi_sentence() {
        assert_eq!(
            extractive_summary("First one. Middle. Last one."),
            "First one. Last one."
        );
    }

    #[test]
    fn test_extractive_short_text() {
        assert_eq!(extractive_summary("No periods here"), "No periods here...");
        assert_eq!(extractive_summary("One."), "One....");
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(complexity_descriptor(6.1), "sophisticated and complex language");
        assert_eq!(complexity_descriptor(6.0), "moderate vocabulary complexity");
        assert_eq!(complexity_descriptor(4.5), "simple and accessible language");
    }

    #[test]
    fn test_narrative_mentions_counts_and_terms() {
        let keywords = vec![
            TermCount { term: "Cat".into(), count: 2 },
            TermCount { term: "dog".into(), count: 1 },
        ];
        let scores = PolarityScores {
            compound: 0.5,
            ..Default::default()
        };
        let summary = comprehensive_summary("The cat sat. The dog ran.", &scores, &keywords);
        assert!(summary.starts_with("This text contains 6 words organized across 2 sentences"));
        assert!(summary.contains("predominantly positive tone"));
        assert!(summary.contains("topics including cat, dog."));
    }
}
