// Plain-text report and JSON export.
//
// The text layout is fixed: banner, timestamp, then KEY METRICS, SENTIMENT
// ANALYSIS, TOP KEYWORDS and SUMMARY sections, then a closing banner.
// Downstream exporters parse it, so widths and number formats must not drift.

use std::fmt::{self, Write as _};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use super::{group_thousands, round2};
use crate::pipeline::analyze::AnalysisReport;

const BANNER: &str = "═══════════════════════════════════════════════════════════════";
const RULE: &str = "─────────────────────────────────────────────────────────────────";

fn section(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "{title}")?;
    writeln!(out, "{RULE}")
}

/// Render the plain-text report for one analysis.
///
/// `generated` is printed in the header as `%Y-%m-%d %H:%M:%S`.
pub fn render_text_report(
    report: &AnalysisReport,
    generated: DateTime<Local>,
) -> Result<String> {
    let mut out = String::new();
    write_report(&mut out, report, generated).context("Failed to format text report")?;
    Ok(out)
}

fn write_report(
    out: &mut String,
    report: &AnalysisReport,
    generated: DateTime<Local>,
) -> fmt::Result {
    let dist = report.sentiment.distribution().as_percentages();

    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "                    NARRATIVE NEXUS - TEXT ANALYSIS REPORT")?;
    writeln!(out, "{BANNER}")?;
    writeln!(out)?;
    writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(out)?;

    section(out, "📊 KEY METRICS")?;
    writeln!(out, "• Total Words:              {}", report.word_count)?;
    writeln!(out, "• Total Sentences:          {}", report.sentence_count)?;
    writeln!(
        out,
        "• Average Word Length:      {}",
        round2(report.average_word_length)
    )?;
    writeln!(
        out,
        "• Character Count:          {}",
        group_thousands(report.character_count)
    )?;
    writeln!(out)?;

    section(out, "💭 SENTIMENT ANALYSIS")?;
    writeln!(
        out,
        "• Overall Sentiment:        {}",
        report.sentiment.label.as_str().to_uppercase()
    )?;
    writeln!(
        out,
        "• Compound Score:           {:.4}",
        report.sentiment.scores.compound
    )?;
    writeln!(out, "• Positive Sentences:       {:.1}%", dist.positive)?;
    writeln!(out, "• Neutral Sentences:        {:.1}%", dist.neutral)?;
    writeln!(out, "• Negative Sentences:       {:.1}%", dist.negative)?;
    writeln!(out)?;

    section(out, "🔑 TOP KEYWORDS")?;
    for (i, kw) in report.keywords.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {:<20} (frequency: {})",
            i + 1,
            kw.term.to_uppercase(),
            kw.count
        )?;
    }
    writeln!(out)?;

    section(out, "📝 SUMMARY")?;
    writeln!(out, "{}", report.summary)?;
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "                        END OF REPORT")?;
    writeln!(out, "{BANNER}")
}

/// Write the plain-text report to `path`, stamped with the current time.
pub fn write_text_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let body = render_text_report(report, Local::now())?;
    std::fs::write(path, body)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}

/// Pretty-printed JSON for any serializable analysis output.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize analysis to JSON")
}
