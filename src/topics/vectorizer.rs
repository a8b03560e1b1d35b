// TF-IDF vector space over a set of sentences.
//
// Each sentence is one row. Tokens are runs of two or more word characters,
// lowercased, with English stop words removed. The vocabulary is capped to
// the terms with the highest total count across all rows (ties broken
// alphabetically) and then sorted alphabetically.
//
// Weights use smoothed IDF, and each row is scaled to unit L2 length:
//
//   idf(t) = ln((1 + n) / (1 + df(t))) + 1

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

use crate::error::TopicExtractionError;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Dense document-term matrix with its vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatrix {
    /// Column terms, alphabetical
    pub vocabulary: Vec<String>,
    /// One row per input sentence, `vocabulary.len()` columns each
    pub rows: Vec<Vec<f64>>,
}

impl TermMatrix {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

pub struct TfIdfVectorizer {
    max_features: usize,
    stop_words: HashSet<String>,
}

impl TfIdfVectorizer {
    /// Vectorizer using the stop-words crate's English list.
    pub fn new(max_features: usize) -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::with_stop_words(max_features, stop_words.into_iter().collect())
    }

    pub fn with_stop_words(max_features: usize, stop_words: HashSet<String>) -> Self {
        Self {
            max_features,
            stop_words,
        }
    }

    fn tokenize(&self, sentence: &str) -> Vec<String> {
        let lower = sentence.to_lowercase();
        TOKEN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }

    pub fn fit_transform(&self, sentences: &[String]) -> Result<TermMatrix, TopicExtractionError> {
        let tokenized: Vec<Vec<String>> = sentences.iter().map(|s| self.tokenize(s)).collect();

        // Corpus-wide counts, alphabetical by construction.
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in &tokenized {
            for token in tokens {
                *totals.entry(token.as_str()).or_insert(0) += 1;
            }
        }
        if totals.is_empty() {
            return Err(TopicExtractionError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        // Stable sort keeps alphabetical order among equal counts.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.max_features.max(1));

        let mut vocabulary: Vec<String> = ranked.into_iter().map(|(t, _)| t.to_string()).collect();
        vocabulary.sort();

        let column_of = |term: &str| vocabulary.binary_search_by(|v| v.as_str().cmp(term)).ok();

        let mut rows: Vec<Vec<f64>> = tokenized
            .iter()
            .map(|tokens| {
                let mut row = vec![0.0; vocabulary.len()];
                for token in tokens {
                    if let Some(col) = column_of(token) {
                        row[col] += 1.0;
                    }
                }
                row
            })
            .collect();

        let n = rows.len() as f64;
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|col| {
                let df = rows.iter().filter(|row| row[col] > 0.0).count() as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        for row in rows.iter_mut() {
            for (value, weight) in row.iter_mut().zip(&idf) {
                *value *= weight;
            }
            let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if norm > 0.0 {
                for value in row.iter_mut() {
                    *value /= norm;
                }
            }
        }

        Ok(TermMatrix { vocabulary, rows })
    }
}
