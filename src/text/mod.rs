// Text normalization: stopwords, lemmatization, and the normalizer itself.
//
// The stopword set and the lemmatizer live in a LanguageResources value that
// is built once and shared read-only, so tests can swap in their own.

pub mod lemmatizer;
pub mod normalizer;
pub mod resources;
pub mod stopwords;
