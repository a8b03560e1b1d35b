use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::pipeline::analyze::AnalysisOptions;
use crate::topics::TopicSettings;

/// Which topic model backs the topics section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicBackend {
    /// TF-IDF vector space + seeded LDA (default)
    Lda,
    /// TF-IDF keyword ranking + co-occurrence clustering, no model fit
    Keywords,
}

impl TopicBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicBackend::Lda => "lda",
            TopicBackend::Keywords => "keywords",
        }
    }
}

impl std::fmt::Display for TopicBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so an empty environment is a valid one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ranked keywords per report (NEXUS_KEYWORDS)
    pub keyword_count: usize,
    /// Requested topic count (NEXUS_TOPICS)
    pub topic_count: usize,
    pub topics: TopicSettings,
    pub topic_backend: TopicBackend,
    /// Optional VADER-format lexicon replacing the built-in one
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Numbers that don't parse are an error rather than a silent default.
    pub fn load() -> Result<Self> {
        let defaults = TopicSettings::default();
        let options = AnalysisOptions::default();

        let topic_backend = match env::var("NEXUS_TOPIC_BACKEND").as_deref() {
            Ok("keywords") => TopicBackend::Keywords,
            Ok("lda") | Err(_) => TopicBackend::Lda,
            Ok(other) => anyhow::bail!(
                "NEXUS_TOPIC_BACKEND must be 'lda' or 'keywords', got '{other}'"
            ),
        };

        Ok(Self {
            keyword_count: parse_var("NEXUS_KEYWORDS", options.keyword_count)?,
            topic_count: parse_var("NEXUS_TOPICS", options.topic_count)?,
            topics: TopicSettings {
                sentence_window: parse_var("NEXUS_SENTENCE_WINDOW", defaults.sentence_window)?,
                max_features: parse_var("NEXUS_MAX_FEATURES", defaults.max_features)?,
                max_iterations: parse_var("NEXUS_TOPIC_ITERATIONS", defaults.max_iterations)?,
                seed: parse_var("NEXUS_TOPIC_SEED", defaults.seed)?,
            },
            topic_backend,
            lexicon_path: env::var("NEXUS_LEXICON_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            keyword_count: self.keyword_count,
            topic_count: self.topic_count,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        _ => Ok(default),
    }
}
