//! Column widths and offsets for a row of dates.
//!
//! The same width table drives forward layout (dates → percentages) and the inverse
//! pointer lookup in `services::position`, so the two always agree.

use crate::models::grid::GridColumn;
use crate::utils::date::{is_weekend_date, CalendarDateTime};

pub const TOTAL_WIDTH: f64 = 100.0;

/// Narrowing only kicks in for rows longer than a work week.
const MIN_COLUMNS_FOR_NARROWING: usize = 5;

/// Width of every column, given which ones fall on a weekend.
///
/// With narrowing active, weekend columns are exactly half a weekday column and the
/// unit is chosen so the row still sums to `total_width`. Rows that are all weekend,
/// or have five columns or fewer, are never narrowed.
pub fn compute_width_table(
    weekend_flags: &[bool],
    narrow_weekend: bool,
    total_width: f64,
) -> Vec<f64> {
    let count = weekend_flags.len();
    if count == 0 {
        return Vec::new();
    }

    let weekend_count = weekend_flags.iter().filter(|weekend| **weekend).count();
    let narrow = narrow_weekend && count > MIN_COLUMNS_FOR_NARROWING && weekend_count < count;

    let unit = if narrow {
        total_width / (count as f64 - weekend_count as f64 / 2.0)
    } else {
        total_width / count as f64
    };

    weekend_flags
        .iter()
        .map(|&weekend| if narrow && weekend { unit / 2.0 } else { unit })
        .collect()
}

/// Running sum of the preceding widths; the first offset is always 0.
pub fn left_offsets(widths: &[f64]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(widths.len());
    let mut left = 0.0;
    for width in widths {
        offsets.push(left);
        left += width;
    }
    offsets
}

/// Sum of `widths[start..=end]`, ignoring indexes past the end of the table.
pub fn span_width(widths: &[f64], start: usize, end: usize) -> f64 {
    widths
        .iter()
        .enumerate()
        .filter(|(index, _)| start <= *index && *index <= end)
        .map(|(_, width)| width)
        .sum()
}

pub fn weekend_flags(dates: &[CalendarDateTime]) -> Vec<bool> {
    dates.iter().map(|date| is_weekend_date(*date)).collect()
}

/// Percentage width table for a row of dates.
pub fn date_width_table(dates: &[CalendarDateTime], narrow_weekend: bool) -> Vec<f64> {
    compute_width_table(&weekend_flags(dates), narrow_weekend, TOTAL_WIDTH)
}

/// Lay out one column per date.
pub fn compute_columns(dates: &[CalendarDateTime], narrow_weekend: bool) -> Vec<GridColumn> {
    let widths = date_width_table(dates, narrow_weekend);
    let offsets = left_offsets(&widths);

    let columns: Vec<GridColumn> = dates
        .iter()
        .zip(widths.iter().zip(offsets.iter()))
        .map(|(date, (width, left))| GridColumn {
            date: *date,
            width: *width,
            left: *left,
        })
        .collect();

    log::debug!(
        "Computed {} grid columns (narrow_weekend={})",
        columns.len(),
        narrow_weekend
    );
    columns
}
