// Process-wide language resources: the stopword set and the lemmatizer.
//
// Built once at startup and shared behind an Arc. Nothing mutates these after
// construction, so concurrent requests can read them without locking.

use std::collections::HashSet;
use std::sync::Arc;

use super::lemmatizer::{Lemmatizer, RuleLemmatizer};
use super::stopwords;

pub struct LanguageResources {
    stopwords: HashSet<String>,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl LanguageResources {
    pub fn new(stopwords: HashSet<String>, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            stopwords,
            lemmatizer,
        }
    }

    /// NLTK English stopwords with the rule-based lemmatizer.
    pub fn english() -> Arc<Self> {
        let stopwords = stopwords::ENGLISH.iter().map(|w| w.to_string()).collect();
        Arc::new(Self::new(stopwords, Box::new(RuleLemmatizer::default())))
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn lemmatize(&self, token: &str) -> String {
        self.lemmatizer.lemmatize(token)
    }
}
