// Sentiment oracle trait: the swap-ready abstraction.
//
// An oracle takes text and returns polarity proportions plus a compound
// score. It tokenizes internally, so raw or normalized text both work.
// Implementations are shared across requests and must be reentrant.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Polarity scores as reported by an oracle.
///
/// `compound` is in [-1, 1]. The three proportions sum to roughly 1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub compound: f64,
}

/// Trait for scoring text polarity.
pub trait SentimentOracle: Send + Sync {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores>;
}
