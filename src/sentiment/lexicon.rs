// Built-in lexicon oracle, scoring text the way VADER does.
//
// Each token found in the lexicon contributes its valence, adjusted by
// preceding boosters ("very") and negations ("not"), and by a contrastive
// "but". The summed valence is squashed into a compound score:
//
//   compound = sum / sqrt(sum^2 + 15)
//
// Proportions come from the positive, negative and neutral token mass.
// A full VADER lexicon file can be loaded in place of the small built-in one.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::traits::{PolarityScores, SentimentOracle};

const NORMALIZATION_ALPHA: f64 = 15.0;
const BOOSTER_INCREMENT: f64 = 0.293;
const NEGATION_SCALAR: f64 = -0.74;
const CAPS_INCREMENT: f64 = 0.733;
const EXCLAMATION_INCREMENT: f64 = 0.292;

/// Valences on VADER's -4..4 scale.
const DEFAULT_LEXICON: &[(&str, f64)] = &[
    ("good", 1.9), ("great", 3.1), ("excellent", 2.7), ("amazing", 2.8),
    ("wonderful", 2.7), ("fantastic", 2.6), ("awesome", 3.1), ("love", 3.2),
    ("loved", 2.9), ("loving", 2.9), ("like", 1.5), ("liked", 1.8),
    ("happy", 2.7), ("happiness", 2.6), ("joy", 2.8), ("glad", 2.0),
    ("nice", 1.8), ("best", 3.2), ("better", 1.9), ("beautiful", 2.9),
    ("brilliant", 2.8), ("perfect", 2.7), ("pleasant", 2.3), ("enjoy", 2.2),
    ("enjoyed", 2.3), ("fun", 2.3), ("friendly", 2.2), ("friend", 2.2),
    ("friendship", 1.9), ("loyal", 2.1), ("kind", 2.4), ("helpful", 1.8),
    ("hope", 1.9), ("success", 2.7), ("successful", 2.8), ("win", 2.8),
    ("won", 2.7), ("gain", 2.4), ("benefit", 2.0), ("positive", 2.6),
    ("strong", 2.3), ("support", 1.7), ("thank", 1.5), ("thanks", 1.9),
    ("impressive", 2.3), ("recommend", 1.5), ("clear", 1.6), ("easy", 1.9),
    ("fair", 1.3), ("calm", 1.3), ("safe", 1.9), ("smart", 1.7),
    ("proud", 2.1), ("trust", 2.3), ("peace", 2.5), ("free", 2.3),
    ("play", 1.4), ("played", 1.4), ("care", 2.2),
    ("bad", -2.5), ("terrible", -2.1), ("awful", -2.0), ("horrible", -2.5),
    ("hate", -2.7), ("hated", -3.2), ("sad", -2.1), ("angry", -2.3),
    ("anger", -2.7), ("poor", -2.1), ("worse", -2.1), ("worst", -3.1),
    ("fail", -2.5), ("failed", -2.3), ("failure", -2.3), ("wrong", -2.1),
    ("problem", -1.7), ("difficult", -1.5), ("hard", -0.4), ("pain", -2.3),
    ("hurt", -2.4), ("fear", -2.2), ("afraid", -2.2), ("worry", -1.9),
    ("disappointed", -1.9), ("disappointing", -2.2), ("boring", -1.3),
    ("ugly", -2.3), ("broken", -2.1), ("loss", -1.3), ("lose", -1.7),
    ("lost", -1.3), ("negative", -2.7), ("weak", -1.9), ("crisis", -3.1),
    ("danger", -2.4), ("dangerous", -2.1), ("threat", -2.4), ("kill", -3.7),
    ("death", -2.9), ("die", -2.9), ("war", -2.9), ("cry", -2.1),
    ("lonely", -1.5), ("stupid", -2.4), ("annoying", -1.7), ("unfair", -2.1),
    ("useless", -1.8), ("sorry", -0.3), ("no", -1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor",
    "cannot", "cant", "can't", "dont", "don't", "doesnt", "doesn't", "didnt",
    "didn't", "isnt", "isn't", "wasnt", "wasn't", "wont", "won't", "without",
    "aint", "ain't", "shouldnt", "shouldn't", "wouldnt", "wouldn't",
];

const BOOSTERS: &[(&str, f64)] = &[
    ("very", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("absolutely", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("slightly", -BOOSTER_INCREMENT),
    ("somewhat", -BOOSTER_INCREMENT),
    ("barely", -BOOSTER_INCREMENT),
    ("hardly", -BOOSTER_INCREMENT),
    ("little", -BOOSTER_INCREMENT),
];

/// Lexicon-backed polarity oracle.
pub struct LexiconOracle {
    lexicon: HashMap<String, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for LexiconOracle {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_LEXICON
                .iter()
                .map(|(w, v)| (w.to_string(), *v))
                .collect(),
        )
    }
}

impl LexiconOracle {
    pub fn from_entries(lexicon: HashMap<String, f64>) -> Self {
        Self {
            lexicon,
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    /// Parse a VADER-format lexicon: `token<TAB>mean<TAB>...` per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (lineno, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(token), Some(mean)) = (fields.next(), fields.next()) else {
                anyhow::bail!("lexicon line {} has no valence column", lineno + 1);
            };
            let valence: f64 = mean
                .trim()
                .parse()
                .with_context(|| format!("lexicon line {}: bad valence {mean:?}", lineno + 1))?;
            lexicon.insert(token.to_lowercase(), valence);
        }
        info!(entries = lexicon.len(), "Loaded sentiment lexicon");
        Ok(Self::from_entries(lexicon))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open lexicon {}", path.display()))?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }

    fn valence_at(&self, words: &[Word], i: usize, caps_differential: bool) -> f64 {
        let word = &words[i];
        let Some(&base) = self.lexicon.get(&word.lower) else {
            return 0.0;
        };
        if base == 0.0 || self.boosters.contains_key(word.lower.as_str()) {
            return 0.0;
        }

        let mut valence = base;
        if caps_differential && word.shouting {
            valence += CAPS_INCREMENT * base.signum();
        }

        for distance in 1..=3 {
            let Some(j) = i.checked_sub(distance) else {
                break;
            };
            let prior = words[j].lower.as_str();
            if let Some(&boost) = self.boosters.get(prior) {
                let decay = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                let signed = if valence < 0.0 { -boost } else { boost };
                valence += signed * decay;
            }
            if NEGATIONS.contains(&prior) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }
}

struct Word {
    lower: String,
    shouting: bool,
}

fn tokenize(text: &str) -> Vec<Word> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .filter(|w| w.chars().count() > 1)
        .map(|w| Word {
            lower: w.to_lowercase(),
            shouting: w.chars().any(char::is_alphabetic)
                && w.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase),
        })
        .collect()
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl SentimentOracle for LexiconOracle {
    fn polarity_scores(&self, text: &str) -> Result<PolarityScores> {
        let words = tokenize(text);
        if words.is_empty() {
            return Ok(PolarityScores {
                neutral: 1.0,
                ..PolarityScores::default()
            });
        }

        // ALL-CAPS only emphasizes when the rest of the text isn't shouting too.
        let shouting = words.iter().filter(|w| w.shouting).count();
        let caps_differential = shouting > 0 && shouting < words.len();

        let mut valences: Vec<f64> = (0..words.len())
            .map(|i| self.valence_at(&words, i, caps_differential))
            .collect();

        if let Some(pivot) = words.iter().position(|w| w.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let exclamations = text.chars().filter(|&c| c == '!').count().min(4);
        let emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = if sum == 0.0 {
            0.0
        } else {
            (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
        };

        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neutral_count = 0.0;
        for &v in &valences {
            if v > 0.0 {
                pos_mass += v + 1.0;
            } else if v < 0.0 {
                neg_mass += v - 1.0;
            } else {
                neutral_count += 1.0;
            }
        }
        if pos_mass > neg_mass.abs() {
            pos_mass += emphasis;
        } else if pos_mass < neg_mass.abs() {
            neg_mass -= emphasis;
        }

        let total = pos_mass + neg_mass.abs() + neutral_count;
        Ok(PolarityScores {
            positive: round_to(pos_mass / total, 3),
            negative: round_to(neg_mass.abs() / total, 3),
            neutral: round_to(neutral_count / total, 3),
            compound: round_to(compound, 4),
        })
    }
}
