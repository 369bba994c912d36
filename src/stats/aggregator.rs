//! Group Aggregation Module
//! Groups cleaned records by a category column and sums the measure column.

use crate::data::{cell_text, has_column};
use crate::error::ReportError;
use log::{info, warn};
use polars::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;

/// Name of the summed column; kept apart from the inputs so a column can be
/// grouped and summed at once.
const TOTAL_COLUMN: &str = "__group_total";

/// Summed measure for one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub category: String,
    pub total: f64,
}

impl GroupTotal {
    pub fn new(category: impl Into<String>, total: f64) -> Self {
        Self {
            category: category.into(),
            total,
        }
    }
}

/// Category totals, largest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupSummary {
    entries: Vec<GroupTotal>,
}

impl GroupSummary {
    /// Build a summary from totals in any order. Equal totals keep their
    /// relative input order.
    pub fn new(mut entries: Vec<GroupTotal>) -> Self {
        entries.sort_by(|a, b| b.total.total_cmp(&a.total));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupTotal> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[GroupTotal] {
        &self.entries
    }

    pub fn categories(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.category.clone()).collect()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.total).collect()
    }

    /// Sum over every group.
    pub fn grand_total(&self) -> f64 {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Smallest and largest total, `None` when empty.
    pub fn total_range(&self) -> Option<(f64, f64)> {
        // entries are sorted descending
        Some((self.entries.last()?.total, self.entries.first()?.total))
    }

    /// Render as a two-column text table with the given header names.
    pub fn to_text_table(&self, group_col: &str, value_col: &str) -> String {
        let formatted: Vec<String> = self
            .entries
            .iter()
            .map(|e| format!("{:.2}", e.total))
            .collect();

        let key_width = self
            .entries
            .iter()
            .map(|e| e.category.chars().count())
            .chain(std::iter::once(group_col.chars().count()))
            .max()
            .unwrap_or(0);
        let value_width = formatted
            .iter()
            .map(|v| v.len())
            .chain(std::iter::once(value_col.chars().count()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{:<key_width$}  {:>value_width$}", group_col, value_col);
        for (entry, value) in self.entries.iter().zip(&formatted) {
            let _ = writeln!(out, "{:<key_width$}  {:>value_width$}", entry.category, value);
        }
        out
    }
}

impl<'a> IntoIterator for &'a GroupSummary {
    type Item = &'a GroupTotal;
    type IntoIter = std::slice::Iter<'a, GroupTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Grouped summation over a cleaned DataFrame.
pub struct Aggregator;

impl Aggregator {
    /// Sum `value_col` per distinct `group_col` value, sorted by total descending.
    ///
    /// Categories compare by exact value, so `"widget"` and `"Widget "` are
    /// separate groups. Ties keep the order in which categories first appear.
    /// Rows without a category belong to no group.
    pub fn summarize(
        df: &DataFrame,
        group_col: &str,
        value_col: &str,
    ) -> Result<GroupSummary, ReportError> {
        for column in [group_col, value_col] {
            if !has_column(df, column) {
                return Err(ReportError::missing_column(column));
            }
        }

        let unlabeled = df.column(group_col)?.null_count();
        if unlabeled > 0 {
            warn!("{} rows have no '{}' value and are left out", unlabeled, group_col);
        }

        let grouped = df
            .clone()
            .lazy()
            .filter(col(group_col).is_not_null())
            .group_by_stable([col(group_col)])
            .agg([col(value_col)
                .cast(DataType::Float64)
                .sum()
                .alias(TOTAL_COLUMN)])
            .sort(
                [TOTAL_COLUMN],
                SortMultipleOptions::default()
                    .with_order_descending(true)
                    .with_maintain_order(true),
            )
            .collect()?;

        let keys = grouped.column(group_col)?;
        let totals = grouped.column(TOTAL_COLUMN)?.f64()?;

        let mut entries = Vec::with_capacity(grouped.height());
        for i in 0..grouped.height() {
            entries.push(GroupTotal {
                category: cell_text(keys.get(i)?),
                total: totals.get(i).unwrap_or(0.0),
            });
        }

        info!("built {} groups by '{}'", entries.len(), group_col);

        Ok(GroupSummary { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataCleaner;

    fn pairs(summary: &GroupSummary) -> Vec<(String, f64)> {
        summary
            .iter()
            .map(|e| (e.category.clone(), e.total))
            .collect()
    }

    #[test]
    fn widget_gadget_scenario() {
        let df = df!(
            "Product" => ["Widget", "Widget", "Gadget", "Gadget"],
            "Sales" => ["10", "5", "20", "abc"],
        )
        .unwrap();
        let cleaned = DataCleaner::coerce_numeric(&df, "Sales").unwrap();

        let summary = Aggregator::summarize(&cleaned, "Product", "Sales").unwrap();

        assert_eq!(
            pairs(&summary),
            vec![("Gadget".to_string(), 20.0), ("Widget".to_string(), 15.0)]
        );
    }

    #[test]
    fn totals_are_conserved_and_sorted() {
        let df = df!(
            "Region" => ["N", "S", "E", "N", "W", "S", "E", "E"],
            "Sales" => [1.5f64, 2.0, 3.25, 4.0, 0.5, 6.0, 1.0, 1.0],
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Region", "Sales").unwrap();

        assert_eq!(summary.len(), 4);
        assert!((summary.grand_total() - 19.25).abs() < 1e-9);
        for pair in summary.entries().windows(2) {
            assert!(pair[0].total >= pair[1].total);
        }
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let df = df!(
            "Product" => ["b", "a", "c", "a", "b"],
            "Sales" => [1.0f64, 1.0, 5.0, 1.0, 1.0],
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Product", "Sales").unwrap();

        assert_eq!(summary.categories(), vec!["c", "b", "a"]);
    }

    #[test]
    fn categories_are_not_normalized() {
        let df = df!(
            "Product" => ["Widget", "widget", "Widget "],
            "Sales" => [1.0f64, 2.0, 3.0],
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Product", "Sales").unwrap();
        assert_eq!(summary.len(), 3);
    }

    #[test]
    fn numeric_categories_are_labelled() {
        let df = df!(
            "Year" => [2023i64, 2024, 2023],
            "Sales" => [1.0f64, 2.0, 3.0],
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Year", "Sales").unwrap();
        assert_eq!(
            pairs(&summary),
            vec![("2023".to_string(), 4.0), ("2024".to_string(), 2.0)]
        );
    }

    #[test]
    fn grouping_and_summing_one_column() {
        let df = df!("Sales" => [10.0f64, 5.0, 10.0]).unwrap();

        let summary = Aggregator::summarize(&df, "Sales", "Sales").unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.totals(), vec![20.0, 5.0]);
    }

    #[test]
    fn rows_without_category_form_no_group() {
        let df = df!(
            "Product" => [Some("A"), None, Some("A")],
            "Sales" => [1.0f64, 100.0, 2.0],
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Product", "Sales").unwrap();
        assert_eq!(pairs(&summary), vec![("A".to_string(), 3.0)]);
    }

    #[test]
    fn empty_table_gives_empty_summary() {
        let df = df!(
            "Product" => Vec::<String>::new(),
            "Sales" => Vec::<f64>::new(),
        )
        .unwrap();

        let summary = Aggregator::summarize(&df, "Product", "Sales").unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.total_range(), None);
    }

    #[test]
    fn missing_group_column_is_named() {
        let df = df!("Product" => ["A"], "Sales" => [1.0f64]).unwrap();

        let err = Aggregator::summarize(&df, "Region", "Sales").unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn { column } if column == "Region"));
    }

    #[test]
    fn new_sorts_descending_and_stably() {
        let summary = GroupSummary::new(vec![
            GroupTotal::new("low", 1.0),
            GroupTotal::new("first", 5.0),
            GroupTotal::new("second", 5.0),
            GroupTotal::new("neg", -2.0),
        ]);

        assert_eq!(summary.categories(), vec!["first", "second", "low", "neg"]);
        assert_eq!(summary.total_range(), Some((-2.0, 5.0)));
    }

    #[test]
    fn text_table_aligns_columns() {
        let summary = GroupSummary::new(vec![
            GroupTotal::new("Gadget", 20.0),
            GroupTotal::new("Widget", 15.0),
        ]);

        let table = summary.to_text_table("Product", "Sales");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines, vec!["Product  Sales", "Gadget   20.00", "Widget   15.00"]);
    }

    #[test]
    fn serializes_as_list_of_pairs() {
        let summary = GroupSummary::new(vec![GroupTotal::new("Gadget", 20.0)]);
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"[{"category":"Gadget","total":20.0}]"#);
    }
}
