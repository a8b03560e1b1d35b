// Error taxonomy for the analysis pipeline.
//
// Two severities exist. Normalization and sentiment failures abort the whole
// request. Topic extraction failures are soft: the pipeline records them in
// the report and keeps going. Readability never fails.

use thiserror::Error;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Normalization failed. Fatal to the request.
#[derive(Debug, Error)]
#[error("Preprocessing error: {message}")]
pub struct PreprocessingError {
    pub message: String,
    #[source]
    pub source: Option<BoxedCause>,
}

impl PreprocessingError {
    /// An error with no underlying cause (e.g. an unknown column name).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying fault, keeping it reachable through `source()`.
    pub fn wrap<E>(cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: cause.to_string(),
            source: Some(Box::new(cause)),
        }
    }
}

/// Topic extraction could not run on this input. Soft failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopicExtractionError {
    #[error("need at least 2 usable sentences for topic extraction, found {found}")]
    InsufficientSentences { found: usize },

    #[error("empty vocabulary; the sentences may only contain stop words")]
    EmptyVocabulary,
}

/// A fatal failure of a whole analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Preprocessing(#[from] PreprocessingError),

    /// The sentiment oracle faulted. Its error is passed through unchanged.
    #[error(transparent)]
    Sentiment(anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_cause_is_reachable() {
        let bytes = vec![0xff, 0xfe];
        let cause = String::from_utf8(bytes).unwrap_err();
        let err = PreprocessingError::wrap(cause);
        assert!(err.to_string().starts_with("Preprocessing error: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_sentiment_fault_message_is_unmodified() {
        let err = AnalysisError::Sentiment(anyhow::anyhow!("lexicon offline"));
        assert_eq!(err.to_string(), "lexicon offline");
    }
}
