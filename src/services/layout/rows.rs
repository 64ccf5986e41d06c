//! Time-grid rows: one 30-minute slot per row between `hour_start` and `hour_end`.

use crate::error::Result;
use crate::models::grid::{GridRow, TimeGridData, TimeSlot};
use crate::models::settings::{validate_hour_range, WeekOptions};
use crate::services::layout::columns::compute_columns;
use crate::utils::date::CalendarDateTime;

pub const SLOTS_PER_HOUR: u32 = 2;
pub const SLOT_MINUTES: u32 = 60 / SLOTS_PER_HOUR;

/// Equal-height rows partitioning `[hour_start, hour_end)`.
///
/// Inverted or empty ranges are rejected rather than clamped.
pub fn compute_time_rows(hour_start: u32, hour_end: u32) -> Result<Vec<GridRow>> {
    validate_hour_range(hour_start, hour_end)?;

    let steps = (hour_end - hour_start) * SLOTS_PER_HOUR;
    let base_height = 100.0 / f64::from(steps);

    let rows = (0..steps)
        .map(|index| {
            let start_minutes = hour_start * 60 + index * SLOT_MINUTES;
            let end_minutes = start_minutes + SLOT_MINUTES;
            Ok(GridRow {
                top: base_height * f64::from(index),
                height: base_height,
                start_time: TimeSlot::new(start_minutes / 60, start_minutes % 60)?,
                end_time: TimeSlot::new(end_minutes / 60, end_minutes % 60)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Computed {} time rows for {}..{}", rows.len(), hour_start, hour_end);
    Ok(rows)
}

/// Columns and rows for a week or day time grid.
pub fn create_time_grid_data(
    dates: &[CalendarDateTime],
    hour_start: u32,
    hour_end: u32,
    narrow_weekend: bool,
) -> Result<TimeGridData> {
    let rows = compute_time_rows(hour_start, hour_end)?;
    let columns = compute_columns(dates, narrow_weekend);
    Ok(TimeGridData { columns, rows })
}

impl TimeGridData {
    pub fn from_week_options(dates: &[CalendarDateTime], options: &WeekOptions) -> Result<Self> {
        create_time_grid_data(dates, options.hour_start, options.hour_end, options.narrow_weekend)
    }
}

/// Vertical position of `time` within `[start, end]`, as a percentage clamped to 0..=100.
pub fn top_percent_by_time(
    time: CalendarDateTime,
    start: CalendarDateTime,
    end: CalendarDateTime,
) -> f64 {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return 0.0;
    }
    let offset = (time - start).num_milliseconds();
    (offset as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
