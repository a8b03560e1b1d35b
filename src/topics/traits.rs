// Topic model trait: swap-ready abstraction.
//
// Callers only see labeled keyword groups, so the LDA model can be replaced
// (for instance by keyword clustering) without changing the pipeline.

use super::Topic;
use crate::error::TopicExtractionError;

pub trait TopicModel: Send + Sync {
    /// Extract up to `requested` topics from `text`.
    ///
    /// The count may be reduced for short inputs. Failure is soft: callers
    /// are expected to carry on without a topics section.
    fn extract_topics(&self, text: &str, requested: usize)
        -> Result<Vec<Topic>, TopicExtractionError>;
}
