//! Sample Table Loading
//!
//! Loads the input CSV with Polars and surfaces each data row as a
//! field-name → string mapping. Schema inference is disabled so every
//! column arrives as text; numeric coercion happens in the row parser,
//! which can then diagnose conversion failures per field.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;

/// One raw CSV row: 1-based data-row number plus column → cell text.
///
/// A column missing from the file has no key here; a present column with
/// an empty cell maps to the empty string. The row parser relies on that
/// distinction for the optional moisture column.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub row: usize,
    pub fields: FxHashMap<String, String>,
}

impl RawRecord {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            fields: FxHashMap::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// In-memory sample table loaded from the input CSV
pub struct SampleTable {
    df: DataFrame,
}

impl SampleTable {
    /// Load the CSV, keeping every column as text
    pub fn load(path: &Path) -> Result<Self> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0)) // 0 = read all columns as strings
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
            .finish()
            .with_context(|| format!("Failed to load samples CSV: {}", path.display()))?;

        Ok(Self { df })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Extract all rows in file order as field → string mappings
    pub fn records(&self) -> Result<Vec<RawRecord>> {
        let mut columns = Vec::with_capacity(self.df.width());
        for column in self.df.get_columns() {
            let cells = column
                .str()
                .with_context(|| format!("Column '{}' was not read as text", column.name()))?;
            columns.push((column.name().to_string(), cells));
        }

        let mut records = Vec::with_capacity(self.df.height());
        for idx in 0..self.df.height() {
            let mut record = RawRecord::new(idx + 1);
            for (name, cells) in &columns {
                let value = cells.get(idx).unwrap_or("");
                record.fields.insert(name.clone(), value.to_string());
            }
            records.push(record);
        }

        Ok(records)
    }
}
