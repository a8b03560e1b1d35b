// SentimentScorer: pass-through to the oracle plus a three-way label.
//
// Classification uses a fixed ±0.2 band around zero on the compound score.
// Both boundaries belong to Neutral.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{PolarityScores, SentimentOracle};

pub const POSITIVE_THRESHOLD: f64 = 0.2;
pub const NEGATIVE_THRESHOLD: f64 = -0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The oracle's three proportions, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentDistribution {
    pub fn from_scores(scores: &PolarityScores) -> Self {
        Self {
            positive: scores.positive,
            negative: scores.negative,
            neutral: scores.neutral,
        }
    }

    /// Same proportions scaled to 0-100.
    pub fn as_percentages(&self) -> Self {
        Self {
            positive: self.positive * 100.0,
            negative: self.negative * 100.0,
            neutral: self.neutral * 100.0,
        }
    }
}

/// Oracle scores together with their classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub scores: PolarityScores,
    pub label: SentimentLabel,
}

impl SentimentResult {
    pub fn distribution(&self) -> SentimentDistribution {
        SentimentDistribution::from_scores(&self.scores)
    }
}

/// Wraps a shared oracle. Oracle faults propagate untouched.
#[derive(Clone)]
pub struct SentimentScorer {
    oracle: Arc<dyn SentimentOracle>,
}

impl SentimentScorer {
    pub fn new(oracle: Arc<dyn SentimentOracle>) -> Self {
        Self { oracle }
    }

    pub fn score(&self, text: &str) -> Result<SentimentResult> {
        let scores = self.oracle.polarity_scores(text)?;
        let label = SentimentLabel::from_compound(scores.compound);
        debug!(compound = scores.compound, label = %label, "Scored sentiment");
        Ok(SentimentResult { scores, label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_neutral() {
        assert_eq!(SentimentLabel::from_compound(0.2), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(-0.2), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_compound(0.2000001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_compound(-0.2000001), SentimentLabel::Negative);
    }

    #[test]
    fn test_percentages() {
        let dist = SentimentDistribution {
            positive: 0.25,
            negative: 0.05,
            neutral: 0.7,
        }
        .as_percentages();
        assert!((dist.positive - 25.0).abs() < 1e-9);
        assert!((dist.neutral - 70.0).abs() < 1e-9);
    }
}
