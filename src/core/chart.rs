//! Terminal rendering of the monthly symptom chart.

use crate::core::filter::{SERIES_LABELS, SymptomPoint};
use crate::models::month::YearMonth;
use crate::utils::colors::{BLUE, CYAN, MAGENTA, RED, RESET, YELLOW};
use crate::utils::formatting::pad_right;
use chrono::NaiveDate;

const SERIES_COLORS: [&str; 5] = [BLUE, RED, YELLOW, MAGENTA, CYAN];

/// Horizontal bar for a 0..=10 value scaled to `width` cells.
pub fn bar(value: u8, width: usize) -> String {
    let filled = (value as usize * width + 5) / 10;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Render one block per entry, one bar per symptom.
pub fn render(
    month: YearMonth,
    series: &[(NaiveDate, SymptomPoint)],
    width: usize,
    color: bool,
) -> String {
    let mut out = format!("Symptom trend - {} (level 0-10)\n", month);

    if series.is_empty() {
        out.push_str("No data for this month.\n");
        return out;
    }

    let label_w = SERIES_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);

    for (date, point) in series {
        out.push('\n');
        out.push_str(&date.format("%Y-%m-%d").to_string());
        out.push('\n');

        for (i, value) in point.values().iter().enumerate() {
            let b = bar(*value, width);
            let b = if color {
                format!("{}{}{}", SERIES_COLORS[i], b, RESET)
            } else {
                b
            };
            out.push_str(&format!(
                "  {} {} {:>2}\n",
                pad_right(SERIES_LABELS[i], label_w),
                b,
                value
            ));
        }
    }

    out
}
