// Unit tests for the text normalizer.
//
// Tests the output alphabet, idempotence, tabular column selection and the
// preprocessing failure cases.

use std::collections::HashSet;
use std::sync::Arc;

use nexus::document::{Cell, RawDocument, TabularDataset};
use nexus::text::lemmatizer::RuleLemmatizer;
use nexus::text::normalizer::TextNormalizer;
use nexus::text::resources::LanguageResources;

fn normalizer() -> TextNormalizer {
    TextNormalizer::new(LanguageResources::english())
}

const SAMPLES: &[&str] = &[
    "The cat sat. The cat played. Dogs are loyal and friendly animals. Friendship matters a lot.",
    "Héllo Wörld!! Ünïcode § and “quotes” everywhere...",
    "Numbers like 3.14, 1990s and 42 stay; symbols #@$% go.",
    "ALL CAPS SHOUTING ABOUT THE CITIES AND THEIR CHILDREN",
    "tabs\tand\nnewlines\r\nare whitespace too",
    "",
];

// ============================================================
// Output alphabet
// ============================================================

#[test]
fn output_uses_only_lowercase_alnum_periods_and_single_spaces() {
    let n = normalizer();
    for sample in SAMPLES {
        let out = n.clean_text(sample);
        assert!(
            out.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == ' '),
            "unexpected character in {out:?}"
        );
        assert!(!out.contains("  "), "double space in {out:?}");
        assert_eq!(out.trim(), out, "leading/trailing space in {out:?}");
    }
}

#[test]
fn stopwords_never_survive() {
    let n = normalizer();
    let resources = LanguageResources::english();
    for sample in SAMPLES {
        for token in n.clean_text(sample).split(' ').filter(|t| !t.is_empty()) {
            assert!(!resources.is_stopword(token), "stopword {token} survived");
        }
    }
}

// ============================================================
// Idempotence
// ============================================================

#[test]
fn normalizing_twice_changes_nothing() {
    let n = normalizer();
    for sample in SAMPLES {
        let once = n.clean_text(sample);
        assert_eq!(n.clean_text(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn token_order_is_preserved() {
    assert_eq!(
        normalizer().clean_text("Zebras chase antelopes across rivers"),
        "zebra chase antelope across river"
    );
}

// ============================================================
// Lemmatization: dictionary base forms
// ============================================================

#[test]
fn plurals_reduce_to_dictionary_forms() {
    let n = normalizer();
    let cases = [
        ("sizes", "size"),
        ("caches", "cache"),
        ("movies", "movie"),
        ("prizes", "prize"),
        ("headaches", "headache"),
        ("ethos", "ethos"),
        ("cookies", "cookie"),
        ("pies", "pie"),
        ("boxes", "box"),
        ("churches", "church"),
        ("wishes", "wish"),
        ("glasses", "glass"),
        ("stories", "story"),
    ];
    for (plural, base) in cases {
        assert_eq!(n.clean_text(plural), base, "lemma of {plural}");
    }
}

// ============================================================
// Injected resources
// ============================================================

#[test]
fn custom_stopwords_are_honored() {
    let stopwords: HashSet<String> = ["banana".to_string()].into_iter().collect();
    let resources = Arc::new(LanguageResources::new(
        stopwords,
        Box::new(RuleLemmatizer::default()),
    ));
    let n = TextNormalizer::new(resources);
    assert_eq!(n.clean_text("The banana bread"), "the bread");
}

// ============================================================
// Tabular input
// ============================================================

fn reviews() -> TabularDataset {
    let csv = "id,review,rating\n1,The dogs are GREAT!,5\n2,,3\n3,Terrible cats.,1\n";
    TabularDataset::from_csv_reader(csv.as_bytes()).unwrap()
}

#[test]
fn table_defaults_to_text_columns() {
    let table = normalizer().normalize_table(&reviews(), None).unwrap();
    assert_eq!(table.documents.len(), 1);
    assert_eq!(table.documents[0].column.as_deref(), Some("review"));
    // Missing cell coerces to "nan" before normalizing
    assert_eq!(table.documents[0].text, "dog great nan terrible cats.");
}

#[test]
fn table_rewrites_only_selected_columns() {
    let table = normalizer().normalize_table(&reviews(), None).unwrap();
    let rating = table.dataset.column("rating").unwrap();
    assert_eq!(rating.values[0], Cell::Integer(5));
    let review = table.dataset.column("review").unwrap();
    assert_eq!(review.values[0], Cell::Text("dog great".into()));
}

#[test]
fn explicit_numeric_column_is_coerced() {
    let cols = vec!["rating".to_string()];
    let table = normalizer().normalize_table(&reviews(), Some(&cols)).unwrap();
    assert_eq!(table.documents[0].text, "5 3 1");
}

#[test]
fn unknown_column_is_preprocessing_error() {
    let cols = vec!["nope".to_string()];
    let err = normalizer()
        .normalize_table(&reviews(), Some(&cols))
        .unwrap_err();
    assert!(err.to_string().starts_with("Preprocessing error:"));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn raw_document_from_invalid_utf8_fails() {
    let err = RawDocument::from_bytes(vec![0x66, 0x6f, 0xff, 0xfe]).unwrap_err();
    assert!(err.to_string().starts_with("Preprocessing error:"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn raw_text_normalizes_to_one_document() {
    let doc = RawDocument::from_bytes(b"Cats purr.".to_vec()).unwrap();
    let docs = normalizer().normalize(&doc, None).unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].column, None);
    assert_eq!(docs[0].text, "cat purr.");
}
