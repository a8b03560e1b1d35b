// Lemmatizer trait: morphological reduction to a base form.
//
// The default RuleLemmatizer handles English noun inflection: regular
// plurals, a table of irregular plurals, and a list of words that only look
// plural. It never consults a dictionary, so it can be swapped for a
// dictionary-backed reducer without touching the normalizer.

use std::collections::{HashMap, HashSet};

/// Reduce a single lowercase token to its base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, token: &str) -> String;
}

/// Suffix-rule lemmatizer for English nouns.
pub struct RuleLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
    ie_nouns: HashSet<&'static str>,
    che_nouns: HashSet<&'static str>,
}

const IRREGULAR: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
];

/// Words ending in "s" that are already singular.
const INVARIANT: &[&str] = &[
    "news", "series", "species", "physics", "mathematics", "economics", "politics",
    "ethics", "athletics", "always", "perhaps", "various", "previous", "whereas",
    "besides", "unless", "towards", "across", "thus", "lens", "plus", "canvas",
    "atlas", "alias", "bias", "chaos", "cosmos", "pants", "scissors", "sometimes",
    "ethos", "pathos", "logos", "kudos",
];

/// Singulars ending in "ie" whose plural would otherwise reduce to "-y".
const IE_NOUNS: &[&str] = &[
    "movie", "cookie", "zombie", "rookie", "calorie", "brownie", "hoodie", "selfie",
    "prairie", "genie", "goalie", "hippie", "pixie", "sortie", "auntie", "necktie",
];

/// Singulars ending in "che"; every other "-ches" plural drops "es".
const CHE_NOUNS: &[&str] = &[
    "cache", "ache", "headache", "toothache", "backache", "niche", "moustache",
    "mustache", "avalanche", "creche", "cliche", "psyche", "quiche", "microfiche",
];

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self {
            irregular: IRREGULAR.iter().copied().collect(),
            invariant: INVARIANT.iter().copied().collect(),
            ie_nouns: IE_NOUNS.iter().copied().collect(),
            che_nouns: CHE_NOUNS.iter().copied().collect(),
        }
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        // Tokens carrying digits or periods are left alone.
        if !token.chars().all(|c| c.is_ascii_lowercase()) {
            return token.to_string();
        }
        if let Some(base) = self.irregular.get(token) {
            return (*base).to_string();
        }
        if token.len() <= 3 || self.invariant.contains(token) {
            return token.to_string();
        }

        // Drop the "s" first; a few endings also drop the "e" before it.
        let Some(singular) = token.strip_suffix('s') else {
            return token.to_string();
        };

        if let Some(stem) = token.strip_suffix("ies") {
            // "ties", "pies": the "ie" belongs to a short stem
            if stem.len() <= 1 || self.ie_nouns.contains(singular) {
                return singular.to_string();
            }
            return format!("{stem}y");
        }
        if token.ends_with("ches") {
            if self.che_nouns.contains(singular) {
                return singular.to_string();
            }
            return token[..token.len() - 2].to_string();
        }
        for suffix in ["sses", "shes", "xes", "zzes"] {
            if token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }
        if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
            return token.to_string();
        }
        singular.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemma(token: &str) -> String {
        RuleLemmatizer::default().lemmatize(token)
    }

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemma("dogs"), "dog");
        assert_eq!(lemma("matters"), "matter");
        assert_eq!(lemma("cities"), "city");
        assert_eq!(lemma("boxes"), "box");
        assert_eq!(lemma("churches"), "church");
        assert_eq!(lemma("classes"), "class");
    }

    #[test]
    fn test_irregular_and_invariant() {
        assert_eq!(lemma("children"), "child");
        assert_eq!(lemma("news"), "news");
        assert_eq!(lemma("glass"), "glass");
        assert_eq!(lemma("status"), "status");
        assert_eq!(lemma("analysis"), "analysis");
        assert_eq!(lemma("gas"), "gas");
    }

    #[test]
    fn test_silent_e_plurals_keep_their_e() {
        assert_eq!(lemma("sizes"), "size");
        assert_eq!(lemma("prizes"), "prize");
        assert_eq!(lemma("caches"), "cache");
        assert_eq!(lemma("headaches"), "headache");
        assert_eq!(lemma("movies"), "movie");
        assert_eq!(lemma("ties"), "tie");
        assert_eq!(lemma("buzzes"), "buzz");
        assert_eq!(lemma("ethos"), "ethos");
    }

    #[test]
    fn test_non_alphabetic_untouched() {
        assert_eq!(lemma("animals."), "animals.");
        assert_eq!(lemma("1990s"), "1990s");
    }

    #[test]
    fn test_lemma_is_fixed_point() {
        for word in [
            "dogs", "cities", "boxes", "classes", "children", "leaves", "running", "sizes",
            "caches", "movies", "ties", "wishes",
        ] {
            let once = lemma(word);
            assert_eq!(lemma(&once), once, "lemma of {word} is not stable");
        }
    }
}
