// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::pipeline::analyze::{AnalysisReport, TopicSection};
use crate::pipeline::table::TableAnalysis;
use crate::sentiment::scorer::SentimentLabel;

/// Display one analysis in the terminal.
pub fn display_report(report: &AnalysisReport) {
    let title = match &report.column {
        Some(column) => format!("=== Analysis of column '{column}' ==="),
        None => "=== Text Analysis ===".to_string(),
    };
    println!("\n{}", title.bold());

    println!(
        "  Words: {}  Sentences: {}  Characters: {}  Avg word length: {}",
        report.word_count,
        report.sentence_count,
        super::group_thousands(report.character_count),
        super::round2(report.average_word_length),
    );

    let dist = report.sentiment.distribution().as_percentages();
    println!(
        "  Sentiment: {} (compound {:.4})  pos {:.1}%  neu {:.1}%  neg {:.1}%",
        colorize_sentiment(report.sentiment.label),
        report.sentiment.scores.compound,
        dist.positive,
        dist.neutral,
        dist.negative,
    );

    println!(
        "  Readability: {:.1} ({})  {}",
        report.readability.score,
        report.readability.level.to_string().cyan(),
        report.readability.level.interpretation().dimmed(),
    );

    if report.keywords.is_empty() {
        println!("\n  {}", "No keywords.".dimmed());
    } else {
        println!("\n  {}", "Top keywords:".bold());
        for (i, kw) in report.keywords.iter().enumerate() {
            println!("    {:>2}. {:<20} {}", i + 1, kw.term, kw.count);
        }
    }

    match &report.topics {
        TopicSection::Extracted { topics } => {
            println!("\n  {}", "Topics:".bold());
            for topic in topics {
                println!("    {:<8} {}", topic.label, topic.keywords.join(", "));
            }
        }
        TopicSection::Unavailable { reason } => {
            println!(
                "\n  {} {}",
                "Topics unavailable:".yellow(),
                reason.dimmed()
            );
        }
    }

    println!("\n  {}", "Summary:".bold());
    println!("    {}", report.summary);
    println!(
        "\n  {} {}",
        "Excerpt:".bold(),
        super::truncate_chars(&report.extractive_summary, 200).dimmed()
    );
}

/// Display a whole table analysis: dataset shape, then one block per column.
pub fn display_table(analysis: &TableAnalysis) {
    println!(
        "\n{}",
        format!(
            "=== Dataset: {} rows x {} columns ({} cells) ===",
            analysis.shape.rows,
            analysis.shape.columns,
            analysis.shape.cells()
        )
        .bold()
    );

    if analysis.reports.is_empty() {
        println!("No text columns to analyze.");
        return;
    }

    for report in &analysis.reports {
        display_report(report);
    }
}

fn colorize_sentiment(label: SentimentLabel) -> colored::ColoredString {
    match label {
        SentimentLabel::Positive => label.as_str().green().bold(),
        SentimentLabel::Negative => label.as_str().red().bold(),
        SentimentLabel::Neutral => label.as_str().normal(),
    }
}
