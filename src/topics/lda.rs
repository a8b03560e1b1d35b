// Latent Dirichlet Allocation over a TF-IDF vector space.
//
// Batch variational Bayes: every iteration runs a full E-step over all rows,
// then replaces the topic-word parameters with prior + sufficient statistics.
// Both Dirichlet priors default to 1/K. Initialization is random but seeded,
// so the same input always yields the same topics. The iteration budget is
// fixed; convergence is not checked.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::function::gamma::digamma;
use tracing::{debug, info};

use super::traits::TopicModel;
use super::vectorizer::TfIdfVectorizer;
use super::{prepare_sentences, Topic, TopicSettings, KEYWORDS_PER_TOPIC};
use crate::error::TopicExtractionError;

const MAX_DOC_UPDATE_ITER: usize = 100;
const MEAN_CHANGE_TOL: f64 = 1e-3;
const EPS: f64 = f64::EPSILON;

/// Half-width of the uniform jitter used to initialize variational
/// parameters. Mean 1, standard deviation 0.1.
const INIT_JITTER: f64 = 0.173_205;

/// A fitted LDA model's topic-word weights, K rows by V columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LdaFit {
    pub components: Vec<Vec<f64>>,
}

impl LdaFit {
    /// Column indices of the `n` highest weights in topic `k`, descending.
    pub fn top_terms(&self, k: usize, n: usize) -> Vec<usize> {
        let weights = &self.components[k];
        let mut order: Vec<usize> = (0..weights.len()).collect();
        order.sort_by(|&a, &b| {
            weights[b]
                .partial_cmp(&weights[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        order.truncate(n);
        order
    }
}

/// Batch variational LDA.
#[derive(Debug, Clone)]
pub struct LatentDirichlet {
    pub n_components: usize,
    pub max_iterations: usize,
    pub seed: u64,
}

impl LatentDirichlet {
    pub fn fit(&self, rows: &[Vec<f64>]) -> LdaFit {
        let k = self.n_components.max(1);
        let vocab = rows.first().map(Vec::len).unwrap_or(0);
        let alpha = 1.0 / k as f64;
        let eta = 1.0 / k as f64;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut jitter = move || 1.0 + (rng.random::<f64>() * 2.0 - 1.0) * INIT_JITTER;

        let mut components: Vec<Vec<f64>> = (0..k)
            .map(|_| (0..vocab).map(|_| jitter()).collect())
            .collect();
        let mut exp_topic_word = exp_dirichlet_expectation(&components);

        // Sparse view of each row: (column, weight) for nonzero weights.
        let sparse: Vec<Vec<(usize, f64)>> = rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, w)| **w > 0.0)
                    .map(|(i, &w)| (i, w))
                    .collect()
            })
            .collect();

        for iteration in 0..self.max_iterations {
            let mut sstats = vec![vec![0.0; vocab]; k];

            for doc in &sparse {
                let mut doc_topic: Vec<f64> = (0..k).map(|_| jitter()).collect();
                if doc.is_empty() {
                    continue;
                }
                let mut exp_doc = exp_dirichlet_expectation_1d(&doc_topic);

                for _ in 0..MAX_DOC_UPDATE_ITER {
                    let last = doc_topic.clone();
                    let norm_phi = phi_norms(doc, &exp_doc, &exp_topic_word);

                    for t in 0..k {
                        let dot: f64 = doc
                            .iter()
                            .zip(&norm_phi)
                            .map(|(&(w, cnt), norm)| cnt / norm * exp_topic_word[t][w])
                            .sum();
                        doc_topic[t] = exp_doc[t] * dot + alpha;
                    }
                    exp_doc = exp_dirichlet_expectation_1d(&doc_topic);

                    let change = last
                        .iter()
                        .zip(&doc_topic)
                        .map(|(a, b)| (a - b).abs())
                        .sum::<f64>()
                        / k as f64;
                    if change < MEAN_CHANGE_TOL {
                        break;
                    }
                }

                let norm_phi = phi_norms(doc, &exp_doc, &exp_topic_word);
                for t in 0..k {
                    for (&(w, cnt), norm) in doc.iter().zip(&norm_phi) {
                        sstats[t][w] += exp_doc[t] * cnt / norm;
                    }
                }
            }

            for t in 0..k {
                for w in 0..vocab {
                    components[t][w] = eta + sstats[t][w] * exp_topic_word[t][w];
                }
            }
            exp_topic_word = exp_dirichlet_expectation(&components);
            debug!(iteration, "LDA iteration complete");
        }

        LdaFit { components }
    }
}

fn phi_norms(doc: &[(usize, f64)], exp_doc: &[f64], exp_topic_word: &[Vec<f64>]) -> Vec<f64> {
    doc.iter()
        .map(|&(w, _)| {
            exp_doc
                .iter()
                .zip(exp_topic_word)
                .map(|(theta, beta)| theta * beta[w])
                .sum::<f64>()
                + EPS
        })
        .collect()
}

/// exp(E[log x]) for x ~ Dirichlet(params).
fn exp_dirichlet_expectation_1d(params: &[f64]) -> Vec<f64> {
    let total = digamma(params.iter().sum());
    params.iter().map(|&p| (digamma(p) - total).exp()).collect()
}

fn exp_dirichlet_expectation(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter().map(|r| exp_dirichlet_expectation_1d(r)).collect()
}

/// TF-IDF + LDA topic model, the default TopicModel.
pub struct LdaModeler {
    settings: TopicSettings,
    vectorizer: TfIdfVectorizer,
}

impl LdaModeler {
    pub fn new(settings: TopicSettings) -> Self {
        let vectorizer = TfIdfVectorizer::new(settings.max_features);
        Self {
            settings,
            vectorizer,
        }
    }
}

impl Default for LdaModeler {
    fn default() -> Self {
        Self::new(TopicSettings::default())
    }
}

impl TopicModel for LdaModeler {
    fn extract_topics(
        &self,
        text: &str,
        requested: usize,
    ) -> Result<Vec<Topic>, TopicExtractionError> {
        let prepared = prepare_sentences(text, requested, self.settings.sentence_window)?;
        let matrix = self.vectorizer.fit_transform(&prepared.sentences)?;

        let topic_count = prepared.topic_count.min(matrix.row_count()).max(1);

        let model = LatentDirichlet {
            n_components: topic_count,
            max_iterations: self.settings.max_iterations,
            seed: self.settings.seed,
        };
        let fit = model.fit(&matrix.rows);

        let topics: Vec<Topic> = (0..topic_count)
            .map(|k| {
                let keywords = fit
                    .top_terms(k, KEYWORDS_PER_TOPIC)
                    .into_iter()
                    .map(|i| matrix.vocabulary[i].clone())
                    .collect();
                Topic::new(k, keywords)
            })
            .collect();

        info!(
            topics = topics.len(),
            vocabulary = matrix.vocabulary.len(),
            sentences = matrix.row_count(),
            "Extracted LDA topics"
        );

        Ok(topics)
    }
}
