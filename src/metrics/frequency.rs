// FrequencyAnalyzer: exact token counts and the top-N ranking.
//
// Ties keep first-occurrence order: the ranking is a stable sort over tokens
// in the order they were first seen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default ranking length when the caller doesn't ask for one.
pub const DEFAULT_TOP_N: usize = 10;

/// A ranked term and its exact occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Count every distinct whitespace-separated token, in first-seen order.
pub fn token_frequency(text: &str) -> Vec<TermCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TermCount> = Vec::new();

    for token in text.split_whitespace() {
        match index.get(token) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(token, counts.len());
                counts.push(TermCount {
                    term: token.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// The `n` most frequent tokens, highest count first.
pub fn top_tokens(text: &str, n: usize) -> Vec<TermCount> {
    let mut counts = token_frequency(text);
    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}
