//! CSV Data Loader Module
//! Handles CSV file loading and column inspection using Polars.

use crate::error::ReportError;
use log::{debug, info};
use polars::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Loads one comma-separated file (UTF-8, `"` quoting, header row) into a DataFrame.
///
/// Every column is read as text. Numeric coercion belongs to the cleaner, so
/// no value is lost to a type guessed from the leading rows.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars.
    ///
    /// The file handle lives only for the duration of this call. Header names
    /// must be unique; rows with more fields than the header are rejected and
    /// rows with fewer are padded with nulls.
    pub fn load_csv(&mut self, file_path: impl AsRef<Path>) -> Result<&DataFrame, ReportError> {
        let path = file_path.as_ref();
        self.df = None;

        let bytes = Self::read_file(path)?;

        let header = read_options(false)
            .with_n_rows(Some(1))
            .into_reader_with_file_handle(Cursor::new(bytes.as_slice()))
            .finish()
            .map_err(|err| ReportError::ParseError(err.to_string()))?;
        check_unique_header(&header)?;

        let df = read_options(true)
            .into_reader_with_file_handle(Cursor::new(bytes.as_slice()))
            .finish()
            .map_err(|err| ReportError::ParseError(err.to_string()))?;

        info!(
            "loaded {} rows, {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Ok(&*self.df.insert(df))
    }

    fn read_file(path: &Path) -> Result<Vec<u8>, ReportError> {
        let not_found = |err: std::io::Error| {
            debug!("cannot read {}: {}", path.display(), err);
            ReportError::FileNotFound {
                path: path.to_path_buf(),
            }
        };

        let mut file = File::open(path).map_err(not_found)?;
        let mut bytes = Vec::new();
        // Opening a directory succeeds on unix; reading it does not.
        file.read_to_end(&mut bytes).map_err(not_found)?;
        Ok(bytes)
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First `rows` records of the loaded DataFrame.
    pub fn preview(&self, rows: usize) -> Option<DataFrame> {
        self.df.as_ref().map(|df| df.head(Some(rows)))
    }

    /// Hand the loaded DataFrame to the next stage.
    pub fn into_dataframe(self) -> Option<DataFrame> {
        self.df
    }
}

fn read_options(has_header: bool) -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(has_header)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_separator(b',').with_quote_char(Some(b'"')))
}

/// The reader renames repeated header names; reject them instead.
fn check_unique_header(header: &DataFrame) -> Result<(), ReportError> {
    let mut seen = HashSet::new();
    for column in header.get_columns() {
        let name = match column.get(0) {
            Ok(value) if !value.is_null() => cell_text(value),
            _ => String::new(),
        };
        if !seen.insert(name.clone()) {
            return Err(ReportError::ParseError(format!(
                "duplicate column name '{name}' in header"
            )));
        }
    }
    Ok(())
}

/// Display text of one cell, without the quotes polars adds around strings.
pub(crate) fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// True when `column` names a header entry exactly (case-sensitive).
pub fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_names().iter().any(|name| name.as_str() == column)
}
