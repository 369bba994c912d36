//! Report Error Module
//! The closed set of failures a report run can end with.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("File '{}' not found. Please check the file path.", path.display())]
    FileNotFound { path: PathBuf },
    #[error("Column '{column}' not found. Check that it matches a column in the CSV header.")]
    MissingColumn { column: String },
    #[error("Failed to parse CSV: {0}")]
    ParseError(String),
    #[error("No rows left to chart after cleaning")]
    NothingToRender,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl ReportError {
    /// Every failure ends the run except an empty summary, which is reported
    /// as information only.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ReportError::NothingToRender)
    }

    pub(crate) fn missing_column(column: &str) -> Self {
        ReportError::MissingColumn {
            column: column.to_string(),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::Unexpected(err.to_string())
    }
}

/// Polars failures past loading are not expected; missing columns are
/// checked by name before any query runs.
impl From<PolarsError> for ReportError {
    fn from(err: PolarsError) -> Self {
        ReportError::Unexpected(err.to_string())
    }
}
