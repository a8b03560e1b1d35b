// Composition tests: verifying that the components chain into a report.
//
// These tests exercise the full data flow:
//   RawDocument -> TextNormalizer -> {frequency, sentiment, topics, readability}
//     -> SummarySynthesizer -> AnalysisReport -> text report / JSON
// with a deterministic stub oracle, no network and only temp-dir file writes.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, TimeZone};

use nexus::document::TabularDataset;
use nexus::error::TopicExtractionError;
use nexus::metrics::readability::ReadingLevel;
use nexus::output::report::{render_text_report, to_json, write_text_report};
use nexus::pipeline::analyze::{AnalysisOptions, Analyzer, TopicSection};
use nexus::sentiment::lexicon::LexiconOracle;
use nexus::sentiment::scorer::SentimentLabel;
use nexus::sentiment::traits::{PolarityScores, SentimentOracle};
use nexus::summary::comprehensive_summary;
use nexus::topics::lda::LdaModeler;
use nexus::topics::traits::TopicModel;
use nexus::topics::Topic;

const SCENARIO: &str =
    "The cat sat. The cat played. Dogs are loyal and friendly animals. Friendship matters a lot.";

struct StubOracle;

impl SentimentOracle for StubOracle {
    fn polarity_scores(&self, _text: &str) -> Result<PolarityScores> {
        Ok(PolarityScores {
            positive: 0.4,
            negative: 0.0,
            neutral: 0.6,
            compound: 0.7269,
        })
    }
}

/// Always fails, so the topics section must degrade.
struct FailingTopics;

impl TopicModel for FailingTopics {
    fn extract_topics(
        &self,
        _text: &str,
        _requested: usize,
    ) -> Result<Vec<Topic>, TopicExtractionError> {
        Err(TopicExtractionError::EmptyVocabulary)
    }
}

fn analyzer() -> Analyzer {
    Analyzer::english(
        Arc::new(StubOracle),
        Box::new(LdaModeler::default()),
        AnalysisOptions::default(),
    )
}

// ============================================================
// End-to-end scenario
// ============================================================

#[test]
fn scenario_counts_readability_and_summary() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();

    assert_eq!(report.word_count, 16);
    assert_eq!(report.sentence_count, 4);
    assert_eq!(report.readability.score, 0.0);
    assert_eq!(report.readability.level, ReadingLevel::Elementary);
    assert!(report.summary.contains("16 words"), "{}", report.summary);
    assert!(report.summary.contains("4 sentences"), "{}", report.summary);
    assert_eq!(report.sentiment.label, SentimentLabel::Positive);
    assert!(report.summary.contains("predominantly positive tone"));
}

#[test]
fn scenario_topics_reduced_to_at_most_three() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    match &report.topics {
        TopicSection::Extracted { topics } => {
            assert!(!topics.is_empty() && topics.len() <= 3);
        }
        TopicSection::Unavailable { reason } => panic!("topics unavailable: {reason}"),
    }
}

#[test]
fn scenario_keywords_ranked_from_analyzed_text() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    assert!(report.keywords.len() <= 12);
    assert_eq!(report.keywords[0].term, "The");
    assert_eq!(report.keywords[0].count, 2);
    assert_eq!(report.keywords[1].term, "cat");
}

#[test]
fn normalized_path_analyzes_cleaned_text() {
    let report = analyzer().analyze_text(SCENARIO).unwrap();
    // "cat sat. cat played. dog loyal friendly animals. friendship matter lot."
    assert_eq!(report.word_count, 11);
    assert_eq!(report.sentence_count, 4);
    assert_eq!(report.keywords[0].term, "cat");
    assert_eq!(report.keywords[0].count, 2);
}

#[test]
fn invalid_utf8_is_fatal() {
    let err = analyzer().analyze_bytes(vec![0xff, 0xfe, 0xfd]).unwrap_err();
    assert!(err.to_string().starts_with("Preprocessing error:"));
}

// ============================================================
// Soft failure policy
// ============================================================

#[test]
fn topic_failure_leaves_placeholder_and_rest_of_report() {
    let analyzer = Analyzer::english(
        Arc::new(StubOracle),
        Box::new(FailingTopics),
        AnalysisOptions::default(),
    );
    let report = analyzer.analyze_prepared(SCENARIO).unwrap();
    assert_eq!(
        report.topics,
        TopicSection::Unavailable {
            reason: TopicExtractionError::EmptyVocabulary.to_string()
        }
    );
    assert!(report.topics.topics().is_empty());
    assert_eq!(report.word_count, 16);
    assert!(!report.summary.is_empty());
}

#[test]
fn single_sentence_input_still_reports() {
    let report = analyzer().analyze_prepared("One simple sentence.").unwrap();
    assert!(matches!(report.topics, TopicSection::Unavailable { .. }));
    assert_eq!(report.sentence_count, 1);
    assert_eq!(report.readability.level, ReadingLevel::Elementary);
}

// ============================================================
// Determinism
// ============================================================

#[test]
fn same_input_same_report() {
    let a = analyzer().analyze_prepared(SCENARIO).unwrap();
    let b = analyzer().analyze_prepared(SCENARIO).unwrap();
    assert_eq!(a, b);
}

#[test]
fn summary_is_pure() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    let again = comprehensive_summary(SCENARIO, &report.sentiment.scores, &report.keywords);
    assert_eq!(report.summary, again);
}

// ============================================================
// Report rendering and export
// ============================================================

#[test]
fn text_report_carries_scenario_numbers() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    let at = Local.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
    let text = render_text_report(&report, at).unwrap();

    assert!(text.contains("Generated: 2025-06-01 09:30:00\n"));
    assert!(text.contains("• Total Words:              16\n"));
    assert!(text.contains("• Total Sentences:          4\n"));
    assert!(text.contains("• Average Word Length:      5.69\n"));
    assert!(text.contains("• Character Count:          91\n"));
    assert!(text.contains("• Overall Sentiment:        POSITIVE\n"));
    assert!(text.contains("• Compound Score:           0.7269\n"));
    assert!(text.contains("• Positive Sentences:       40.0%\n"));
    assert!(text.contains(" 1. THE                  (frequency: 2)\n"));
    assert!(text.contains(&report.summary));
}

#[test]
fn report_written_to_file() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    write_text_report(&report, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("NARRATIVE NEXUS - TEXT ANALYSIS REPORT"));
    assert!(written.contains("END OF REPORT"));
}

#[test]
fn json_export_round_trips_counts() {
    let report = analyzer().analyze_prepared(SCENARIO).unwrap();
    let json = to_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["word_count"], 16);
    assert_eq!(value["sentence_count"], 4);
    assert_eq!(value["sentiment"]["label"], "Positive");
    assert_eq!(value["topics"]["status"], "extracted");
}

// ============================================================
// Tabular flow
// ============================================================

#[test]
fn table_analysis_reports_each_text_column() {
    let csv = "id,review,notes\n\
               1,Great phone. Battery lasts all day.,Shipped fast\n\
               2,Screen cracked. Terrible support.,Box damaged\n";
    let table = TabularDataset::from_csv_reader(csv.as_bytes()).unwrap();
    let analyzer = Analyzer::english(
        Arc::new(LexiconOracle::default()),
        Box::new(LdaModeler::default()),
        AnalysisOptions::default(),
    );
    let analysis = analyzer.analyze_table(&table, None, |_| {}).unwrap();

    assert_eq!(analysis.shape.rows, 2);
    assert_eq!(analysis.shape.columns, 3);
    assert_eq!(analysis.shape.cells(), 6);
    assert_eq!(analysis.reports.len(), 2);
    assert_eq!(analysis.reports[0].column.as_deref(), Some("review"));
    assert_eq!(analysis.reports[1].column.as_deref(), Some("notes"));
}
