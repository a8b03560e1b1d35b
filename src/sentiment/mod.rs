// Sentiment scoring: trait-based abstraction over a lexicon polarity oracle.
//
// The SentimentOracle trait is the seam. LexiconOracle is the built-in
// implementation; SentimentScorer wraps any oracle and adds the
// positive/negative/neutral classification.

pub mod lexicon;
pub mod scorer;
pub mod traits;
