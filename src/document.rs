// Input documents: free text or a tabular dataset.
//
// Everything here is created per request and never mutated after it is
// handed to the pipeline. Normalization produces new values rather than
// editing these in place.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::PreprocessingError;

/// A document as submitted by the caller.
#[derive(Debug, Clone)]
pub enum RawDocument {
    Text(String),
    Table(TabularDataset),
}

impl RawDocument {
    /// Decode a byte payload as UTF-8 text.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PreprocessingError> {
        String::from_utf8(bytes)
            .map(RawDocument::Text)
            .map_err(PreprocessingError::wrap)
    }
}

/// A single cell of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Cell {
    /// String form used when a cell is coerced to text. Missing values
    /// become "nan", matching how a dataframe stringifies them.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(i) => i.to_string(),
            Cell::Float(f) => format!("{f:?}"),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Null => "nan".to_string(),
        }
    }
}

/// The declared type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
    Bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub values: Vec<Cell>,
}

/// Named columns of equal length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TabularDataset {
    pub columns: Vec<Column>,
}

impl TabularDataset {
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of every string-typed column, in dataset order.
    pub fn text_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.kind == ColumnKind::Text)
            .map(|c| c.name.clone())
            .collect()
    }

    /// Read a CSV with a header row, inferring each column's kind.
    ///
    /// A column is Integer/Float/Bool only when every non-empty cell parses
    /// as that type; anything else makes it Text. Empty cells are Null.
    pub fn from_csv_reader<R: Read>(reader: R) -> anyhow::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

        let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record?;
            for (i, column) in raw.iter_mut().enumerate() {
                column.push(record.get(i).unwrap_or("").to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(raw)
            .map(|(name, cells)| infer_column(name, cells))
            .collect();

        Ok(Self { columns })
    }
}

fn infer_column(name: String, cells: Vec<String>) -> Column {
    let present: Vec<&str> = cells
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();

    let kind = if present.is_empty() {
        // All-missing columns come out as floats in a dataframe.
        ColumnKind::Float
    } else if present.iter().all(|c| c.parse::<i64>().is_ok()) {
        ColumnKind::Integer
    } else if present.iter().all(|c| c.parse::<f64>().is_ok()) {
        ColumnKind::Float
    } else if present.iter().all(|c| parse_bool(c).is_some()) {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    };

    let values = cells
        .into_iter()
        .map(|raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Cell::Null;
            }
            match kind {
                ColumnKind::Integer => trimmed.parse().map(Cell::Integer).unwrap_or(Cell::Null),
                ColumnKind::Float => trimmed.parse().map(Cell::Float).unwrap_or(Cell::Null),
                ColumnKind::Bool => parse_bool(trimmed).map(Cell::Bool).unwrap_or(Cell::Null),
                ColumnKind::Text => Cell::Text(raw),
            }
        })
        .collect();

    Column { name, kind, values }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Normalized output of the text normalizer.
///
/// For free text, `column` is None. For tabular input there is one of these
/// per selected column, holding that column's normalized cells joined by
/// single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedDocument {
    pub column: Option<String>,
    pub text: String,
}
