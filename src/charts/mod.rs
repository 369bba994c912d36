//! Charts module - Bar chart rendering

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{StaticChartRenderer, DEFAULT_SIZE};

/// Bar fill, matplotlib's "skyblue".
pub const SKY_BLUE_RGB: (u8, u8, u8) = (135, 206, 235);

/// Category labels are rotated once there are more bars than this.
pub const ROTATE_LABELS_AFTER: usize = 6;

/// Longest category label drawn on the window's x axis before it is shortened.
pub const MAX_AXIS_LABEL_CHARS: usize = 12;

/// Titles and axis labels for one bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub group_col: String,
    pub value_col: String,
}

impl ChartSpec {
    pub fn new(group_col: impl Into<String>, value_col: impl Into<String>) -> Self {
        Self {
            group_col: group_col.into(),
            value_col: value_col.into(),
        }
    }

    pub fn title(&self) -> String {
        format!("Total {} Distribution by {}", self.value_col, self.group_col)
    }

    pub fn x_label(&self) -> &str {
        &self.group_col
    }

    pub fn y_label(&self) -> String {
        format!("Total {}", self.value_col)
    }

    pub fn rotate_labels(bar_count: usize) -> bool {
        bar_count > ROTATE_LABELS_AFTER
    }
}

/// Shorten `label` to at most `max_chars` characters, marking the cut with `…`.
pub fn short_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Y-axis bounds that always include zero and leave headroom above the tallest bar.
pub fn value_bounds(range: Option<(f64, f64)>) -> (f64, f64) {
    let (min, max) = range.unwrap_or((0.0, 0.0));
    let low = min.min(0.0);
    let high = max.max(0.0);
    if high == low {
        return (low, low + 1.0);
    }
    let pad = (high - low) * 0.05;
    (if low < 0.0 { low - pad } else { low }, high + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_columns() {
        let spec = ChartSpec::new("Product", "Sales");
        assert_eq!(spec.title(), "Total Sales Distribution by Product");
        assert_eq!(spec.x_label(), "Product");
        assert_eq!(spec.y_label(), "Total Sales");
    }

    #[test]
    fn rotation_starts_after_threshold() {
        assert!(!ChartSpec::rotate_labels(ROTATE_LABELS_AFTER));
        assert!(ChartSpec::rotate_labels(ROTATE_LABELS_AFTER + 1));
    }

    #[test]
    fn short_label_counts_chars() {
        assert_eq!(short_label("Widget", 12), "Widget");
        assert_eq!(short_label("Extra Large Widget", 8), "Extra L…");
        assert_eq!(short_label("ÄÖÜäöü", 6), "ÄÖÜäöü");
    }

    #[test]
    fn bounds_include_zero() {
        assert_eq!(value_bounds(None), (0.0, 1.0));
        assert_eq!(value_bounds(Some((10.0, 20.0))), (0.0, 21.0));
        let (low, high) = value_bounds(Some((-10.0, 10.0)));
        assert!(low < -10.0 && high > 10.0);
        assert_eq!(value_bounds(Some((0.0, 0.0))), (0.0, 1.0));
    }
}
