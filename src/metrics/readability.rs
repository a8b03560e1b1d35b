// Readability grade estimate (Flesch-Kincaid style).
//
//   score = 0.39 * words/sentences + 11.8 * (letters/word / 5) - 15.59
//
// "Letters" is the character length of each whitespace token, punctuation
// included. Clamped at zero and rounded to one decimal, half to even.

use serde::{Deserialize, Serialize};

use super::{sentence_count, word_count};

/// Qualitative bucket for a grade-level score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLevel {
    Elementary,
    MiddleSchool,
    HighSchool,
    College,
    Graduate,
}

impl ReadingLevel {
    /// Lower bounds are inclusive, upper bounds exclusive.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 16.0 => ReadingLevel::Graduate,
            s if s >= 13.0 => ReadingLevel::College,
            s if s >= 9.0 => ReadingLevel::HighSchool,
            s if s >= 6.0 => ReadingLevel::MiddleSchool,
            _ => ReadingLevel::Elementary,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Elementary => "Elementary School",
            ReadingLevel::MiddleSchool => "Middle School",
            ReadingLevel::HighSchool => "High School",
            ReadingLevel::College => "College",
            ReadingLevel::Graduate => "Graduate",
        }
    }

    /// One-line reading of the level for display.
    pub fn interpretation(&self) -> String {
        format!(
            "The text is written at a level suitable for {} readers.",
            self.as_str().to_lowercase()
        )
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A grade-level score and its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetric {
    pub score: f64,
    pub level: ReadingLevel,
}

/// Grade-level score for `text`. Zero sentences gives 0.0.
pub fn readability_score(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }

    let words = word_count(text);
    let letters: usize = text.split_whitespace().map(|w| w.chars().count()).sum();

    let avg_words_per_sentence = words as f64 / sentences as f64;
    let avg_letters_per_word = letters as f64 / words.max(1) as f64;

    let grade = 0.39 * avg_words_per_sentence + 11.8 * (avg_letters_per_word / 5.0) - 15.59;
    if grade <= 0.0 {
        return 0.0;
    }
    round_one_decimal(grade)
}

/// Round to one decimal on the exact binary value, ties to even.
///
/// Scaling by ten first would round 12.95 (stored as 12.9499...) up to 13.0
/// and move it into the next bucket. The formatter works on the exact value.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn estimate(text: &str) -> ReadabilityMetric {
    let score = readability_score(text);
    ReadabilityMetric {
        score,
        level: ReadingLevel::from_score(score),
    }
}
