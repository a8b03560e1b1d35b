// TextNormalizer: lowercase, strip noise, drop stopwords, lemmatize.
//
// Output tokens are lowercase ASCII letters, digits and literal periods,
// joined by single spaces in their original order. Running the normalizer on
// its own output changes nothing.

use std::sync::{Arc, LazyLock};

use regex_lite::Regex;
use tracing::debug;

use super::resources::LanguageResources;
use crate::document::{Cell, ColumnKind, NormalizedDocument, RawDocument, TabularDataset};
use crate::error::PreprocessingError;

static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9.\s]").expect("noise pattern is valid"));

/// A normalized table: the dataset with its text columns rewritten, plus one
/// NormalizedDocument per rewritten column.
#[derive(Debug, Clone)]
pub struct NormalizedTable {
    pub dataset: TabularDataset,
    pub documents: Vec<NormalizedDocument>,
}

pub struct TextNormalizer {
    resources: Arc<LanguageResources>,
}

impl TextNormalizer {
    pub fn new(resources: Arc<LanguageResources>) -> Self {
        Self { resources }
    }

    /// Normalize a single string. Empty input gives an empty string.
    pub fn clean_text(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let stripped = NOISE.replace_all(&lowered, " ");

        let mut out = String::with_capacity(stripped.len());
        for token in stripped.split_whitespace() {
            if self.resources.is_stopword(token) {
                continue;
            }
            let lemma = self.resources.lemmatize(token);
            // A lemma can land on a stopword ("wills" -> "will").
            if lemma.is_empty() || self.resources.is_stopword(&lemma) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&lemma);
        }
        out
    }

    pub fn normalize_text(&self, text: &str) -> NormalizedDocument {
        NormalizedDocument {
            column: None,
            text: self.clean_text(text),
        }
    }

    /// Normalize the selected columns of a table.
    ///
    /// With `columns` None, every string-typed column is selected. Selected
    /// cells are coerced to text first; other columns pass through as-is.
    /// Naming a column that doesn't exist is a PreprocessingError.
    pub fn normalize_table(
        &self,
        table: &TabularDataset,
        columns: Option<&[String]>,
    ) -> Result<NormalizedTable, PreprocessingError> {
        let selected: Vec<String> = match columns {
            Some(names) => names.to_vec(),
            None => table.text_columns(),
        };

        for name in &selected {
            if table.column(name).is_none() {
                return Err(PreprocessingError::new(format!("column '{name}' not found")));
            }
        }

        let mut dataset = table.clone();
        let mut documents = Vec::with_capacity(selected.len());

        for column in dataset.columns.iter_mut() {
            if !selected.contains(&column.name) {
                continue;
            }
            column.values = column
                .values
                .iter()
                .map(|cell| Cell::Text(self.clean_text(&cell.to_text())))
                .collect();
            column.kind = ColumnKind::Text;

            let joined = column
                .values
                .iter()
                .filter_map(|cell| match cell {
                    Cell::Text(s) if !s.is_empty() => Some(s.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" ");

            debug!(column = %column.name, rows = column.values.len(), "Normalized column");
            documents.push(NormalizedDocument {
                column: Some(column.name.clone()),
                text: joined,
            });
        }

        Ok(NormalizedTable { dataset, documents })
    }

    /// Normalize any raw document into one or more NormalizedDocuments.
    pub fn normalize(
        &self,
        doc: &RawDocument,
        columns: Option<&[String]>,
    ) -> Result<Vec<NormalizedDocument>, PreprocessingError> {
        match doc {
            RawDocument::Text(text) => Ok(vec![self.normalize_text(text)]),
            RawDocument::Table(table) => Ok(self.normalize_table(table, columns)?.documents),
        }
    }
}
