// Keyword-clustering topic model: the deterministic alternative to LDA.
//
// Uses the `keyword_extraction` crate to rank TF-IDF keywords across the
// sentences, then groups keywords that co-occur in the same sentences.
// Each sentence is a separate document for IDF, so words that show up
// everywhere get downweighted and distinctive words get boosted.
//
// No randomness is involved. The number of topics is the requested count
// or the number of clusters the keywords can form, whichever is smaller.

use std::collections::HashSet;

use keyword_extraction::tf_idf::{TfIdf, TfIdfParams};
use stop_words::{get, LANGUAGE};
use tracing::info;

use super::traits::TopicModel;
use super::{prepare_sentences, Topic, TopicSettings, KEYWORDS_PER_TOPIC};
use crate::error::TopicExtractionError;

pub struct KeywordClusterModeler {
    settings: TopicSettings,
}

impl KeywordClusterModeler {
    pub fn new(settings: TopicSettings) -> Self {
        Self { settings }
    }
}

impl Default for KeywordClusterModeler {
    fn default() -> Self {
        Self::new(TopicSettings::default())
    }
}

impl TopicModel for KeywordClusterModeler {
    fn extract_topics(
        &self,
        text: &str,
        requested: usize,
    ) -> Result<Vec<Topic>, TopicExtractionError> {
        let prepared = prepare_sentences(text, requested, self.settings.sentence_window)?;
        let sentences = &prepared.sentences;

        let stop_words: Vec<String> = get(LANGUAGE::English);
        let params = TfIdfParams::UnprocessedDocuments(sentences, &stop_words, None);
        let tfidf = TfIdf::new(params);

        let ranked: Vec<(String, f32)> = tfidf.get_ranked_word_scores(self.settings.max_features);
        if ranked.is_empty() {
            return Err(TopicExtractionError::EmptyVocabulary);
        }

        let topic_count = prepared.topic_count.min(sentences.len());
        let groups = cluster_keywords(&ranked, sentences, topic_count);

        info!(
            keywords = ranked.len(),
            top_keyword = &ranked[0].0,
            topics = groups.len(),
            "Clustered TF-IDF keywords into topics"
        );

        Ok(groups
            .into_iter()
            .enumerate()
            .map(|(i, keywords)| Topic::new(i, keywords))
            .collect())
    }
}

/// Group keywords by co-occurrence in sentences.
///
/// Greedy: the highest-scored unassigned keyword seeds a cluster and pulls
/// in its most co-occurring unassigned neighbors, up to the per-topic limit.
/// Clusters come back in seed order, so the first holds the top keyword.
fn cluster_keywords(
    ranked: &[(String, f32)],
    sentences: &[String],
    max_clusters: usize,
) -> Vec<Vec<String>> {
    let words: Vec<HashSet<String>> = sentences.iter().map(|s| word_set(s)).collect();

    // Which sentences each keyword appears in, by sentence index.
    let presence: Vec<Vec<bool>> = ranked
        .iter()
        .map(|(term, _)| words.iter().map(|set| set.contains(term.as_str())).collect())
        .collect();

    let shared = |a: usize, b: usize| -> usize {
        presence[a]
            .iter()
            .zip(&presence[b])
            .filter(|(x, y)| **x && **y)
            .count()
    };

    let mut taken = vec![false; ranked.len()];
    let mut groups: Vec<Vec<String>> = Vec::new();

    for seed in 0..ranked.len() {
        if groups.len() == max_clusters {
            break;
        }
        if taken[seed] {
            continue;
        }
        taken[seed] = true;

        let mut neighbors: Vec<(usize, usize)> = (0..ranked.len())
            .filter(|&other| !taken[other])
            .map(|other| (other, shared(seed, other)))
            .filter(|&(_, together)| together > 0)
            .collect();
        // Stable: equal co-occurrence keeps the TF-IDF rank order.
        neighbors.sort_by(|a, b| b.1.cmp(&a.1));
        neighbors.truncate(KEYWORDS_PER_TOPIC - 1);

        let mut group = vec![ranked[seed].0.clone()];
        for (other, _) in neighbors {
            taken[other] = true;
            group.push(ranked[other].0.clone());
        }
        groups.push(group);
    }

    groups
}

/// Lowercased words of a sentence, split on anything that isn't alphanumeric.
fn word_set(sentence: &str) -> HashSet<String> {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
