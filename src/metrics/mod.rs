// Surface statistics: word and sentence counts, keyword frequency, readability.
//
// Sentences are whatever sits between literal periods; blank segments don't
// count. Words are whitespace-separated tokens. These definitions are shared
// by every component so their numbers agree with each other.

pub mod frequency;
pub mod readability;

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-blank segments between periods, trimmed.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn sentence_count(text: &str) -> usize {
    sentences(text).len()
}

/// Length of the text in characters (not bytes).
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

/// Characters per word, counting every character of the text including
/// spaces and punctuation. Zero words divides by one.
pub fn average_word_length(text: &str) -> f64 {
    character_count(text) as f64 / word_count(text).max(1) as f64
}
