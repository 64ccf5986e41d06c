//! Month view date matrix (weeks × days).

use crate::error::Result;
use crate::models::settings::{MonthOptions, DEFAULT_VISIBLE_WEEKS};
use crate::utils::date::{
    date_difference, day_of_week, end_of_month, is_weekend, start_of_day, start_of_day_after,
    start_of_month, CalendarDateTime, WEEK_DAYS,
};
use chrono::Datelike;

/// Build the dates shown by a month view.
///
/// The first date is the nearest `start_day_of_week` on or before the base date, where
/// the base is `target` itself when `visible_weeks_count > 0` and the first of the month
/// otherwise. Rows drop weekend dates when `workweek` is set, so they may hold fewer
/// than seven entries. Every date is normalised to the start of its day.
pub fn compute_month_matrix(
    target: CalendarDateTime,
    options: &MonthOptions,
) -> Result<Vec<Vec<CalendarDateTime>>> {
    options.validate()?;

    let apply_visible_weeks = options.visible_weeks_count > 0;
    let base = if apply_visible_weeks {
        start_of_day(target)
    } else {
        start_of_month(target)
    };

    let base_day = i64::from(day_of_week(base));
    let start_day = i64::from(options.start_day_of_week);
    let back = base_day - start_day + if base_day < start_day { WEEK_DAYS } else { 0 };
    let first_date = start_of_day_after(base, -back);
    let first_day = i64::from(day_of_week(first_date));

    let days_in_month = i64::from(end_of_month(target).day());
    let total_days = days_in_month + date_difference(first_date, base).abs();

    let weeks = if apply_visible_weeks {
        i64::from(options.visible_weeks_count)
    } else if !options.is_always_6_weeks {
        (total_days + WEEK_DAYS - 1) / WEEK_DAYS
    } else {
        i64::from(DEFAULT_VISIBLE_WEEKS)
    };

    let matrix: Vec<Vec<CalendarDateTime>> = (0..weeks)
        .map(|week| {
            (0..WEEK_DAYS)
                .filter_map(|day| {
                    let steps = week * WEEK_DAYS + day;
                    let current_day = ((steps + first_day) % WEEK_DAYS) as u8;
                    if options.workweek && is_weekend(current_day) {
                        None
                    } else {
                        Some(start_of_day_after(first_date, steps))
                    }
                })
                .collect()
        })
        .collect();

    log::debug!(
        "Computed month matrix: {} weeks x {} days",
        matrix.len(),
        matrix.first().map_or(0, Vec::len)
    );
    Ok(matrix)
}
