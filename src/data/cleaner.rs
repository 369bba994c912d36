//! Data Cleaner Module
//! Coerces the measure column to numbers and drops rows that do not coerce.

use crate::data::loader::has_column;
use crate::error::ReportError;
use log::debug;
use polars::prelude::*;

/// Handles numeric coercion of a single column.
pub struct DataCleaner;

impl DataCleaner {
    /// Cast `column` to Float64 and keep only the rows where that worked.
    ///
    /// Text is trimmed of surrounding whitespace first. Only literal numbers
    /// survive the cast; currency symbols, thousands separators, empty fields
    /// and `NaN` all count as absent. The input DataFrame is left untouched.
    pub fn coerce_numeric(df: &DataFrame, column: &str) -> Result<DataFrame, ReportError> {
        if !has_column(df, column) {
            return Err(ReportError::missing_column(column));
        }

        let raw = match df.column(column)?.dtype() {
            DataType::String => col(column).str().strip_chars(lit(NULL)),
            _ => col(column),
        };

        let cleaned = df
            .clone()
            .lazy()
            .with_column(raw.cast(DataType::Float64))
            .filter(col(column).is_not_null().and(col(column).is_not_nan()))
            .collect()?;

        let dropped = df.height() - cleaned.height();
        if dropped > 0 {
            debug!("dropped {} rows with non-numeric '{}'", dropped, column);
        }

        Ok(cleaned)
    }
}
