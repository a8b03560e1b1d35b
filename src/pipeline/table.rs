// Tabular analysis.
//
// Normalizes the selected text columns of a dataset, then analyzes each
// column's joined text as its own document. Columns are reported in dataset
// order. The first fatal error stops the run.

use serde::Serialize;
use tracing::info;

use super::analyze::{AnalysisReport, Analyzer};
use crate::document::TabularDataset;
use crate::error::AnalysisError;

/// Shape of a dataset, as reported alongside its column analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetShape {
    pub rows: usize,
    pub columns: usize,
}

impl DatasetShape {
    pub fn of(table: &TabularDataset) -> Self {
        Self {
            rows: table.row_count(),
            columns: table.column_count(),
        }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableAnalysis {
    pub shape: DatasetShape,
    /// The input dataset with its selected columns normalized
    pub dataset: TabularDataset,
    /// One report per normalized column
    pub reports: Vec<AnalysisReport>,
}

impl Analyzer {
    /// Analyze every selected text column of `table`.
    ///
    /// `on_column` fires after each column finishes, with its name; the CLI
    /// drives its progress bar from it.
    pub fn analyze_table<F>(
        &self,
        table: &TabularDataset,
        columns: Option<&[String]>,
        mut on_column: F,
    ) -> Result<TableAnalysis, AnalysisError>
    where
        F: FnMut(&str),
    {
        let shape = DatasetShape::of(table);
        let normalized = self.normalizer().normalize_table(table, columns)?;

        info!(
            rows = shape.rows,
            columns = shape.columns,
            selected = normalized.documents.len(),
            "Analyzing table"
        );

        let mut reports = Vec::with_capacity(normalized.documents.len());
        for doc in &normalized.documents {
            reports.push(self.analyze_document(doc)?);
            on_column(doc.column.as_deref().unwrap_or_default());
        }

        Ok(TableAnalysis {
            shape,
            dataset: normalized.dataset,
            reports,
        })
    }
}
