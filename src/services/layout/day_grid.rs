//! Horizontal placement of events in day-grid rows (all-day panels and month weeks).

use serde::Serialize;

use crate::models::ui::EventUiModel;
use crate::services::layout::columns::{date_width_table, span_width};
use crate::utils::date::{end_of_day, start_of_day, CalendarDateTime};

/// Default pixel height of one event lane in a day-grid cell
pub const EVENT_HEIGHT: f64 = 22.0;

/// Percentage `left` and `width` of an event inside a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalSpan {
    pub left: f64,
    pub width: f64,
}

/// Span covering cells `start_index..=end_index`; `None` runs to the end of the row.
pub fn left_and_width(
    start_index: usize,
    end_index: Option<usize>,
    row: &[CalendarDateTime],
    narrow_weekend: bool,
) -> HorizontalSpan {
    let widths = date_width_table(row, narrow_weekend);
    let end_index = end_index.unwrap_or_else(|| row.len().saturating_sub(1));

    HorizontalSpan {
        left: if start_index == 0 {
            0.0
        } else {
            span_width(&widths, 0, start_index - 1)
        },
        width: span_width(&widths, start_index, end_index),
    }
}

/// Span of an event clipped to the row: from the last cell starting at or before
/// `start` to the last cell starting at or before `end`.
pub fn event_left_and_width(
    start: CalendarDateTime,
    end: CalendarDateTime,
    row: &[CalendarDateTime],
    narrow_weekend: bool,
) -> HorizontalSpan {
    let mut start_index = 0;
    let mut end_index = row.len().saturating_sub(1);

    for (index, cell) in row.iter().enumerate() {
        let day = start_of_day(*cell);
        if day <= start {
            start_index = index;
        }
        if day <= end {
            end_index = index;
        }
    }

    left_and_width(start_index, Some(end_index), row, narrow_weekend)
}

/// Index of the cell whose day contains `date`.
pub fn grid_date_index(date: CalendarDateTime, row: &[CalendarDateTime]) -> Option<usize> {
    row.iter()
        .position(|cell| date >= start_of_day(*cell) && date <= end_of_day(*cell))
}

/// Cells of `row` covered by the day-span of `[start, end]`, as an inclusive index range.
pub fn covered_cells(
    start: CalendarDateTime,
    end: CalendarDateTime,
    row: &[CalendarDateTime],
) -> Option<(usize, usize)> {
    let event_start = start_of_day(start);
    let event_end = start_of_day(end);
    let covered: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|(_, cell)| {
            let day = start_of_day(**cell);
            event_start <= day && day <= event_end
        })
        .map(|(index, _)| index)
        .collect();

    Some((*covered.first()?, *covered.last()?))
}

/// Give each model the lowest lane that is free in every cell it covers.
///
/// Models are placed in the order given; callers sort them first (earlier and longer
/// events take the upper lanes). Models that touch no cell of the row keep lane 0.
pub fn assign_lanes(models: &mut [EventUiModel], row: &[CalendarDateTime]) {
    let mut occupied: Vec<Vec<bool>> = vec![Vec::new(); row.len()];

    for model in models.iter_mut() {
        let Some((first, last)) = covered_cells(model.starts(), model.ends(), row) else {
            continue;
        };

        let lane = (0..)
            .find(|lane| {
                occupied[first..=last]
                    .iter()
                    .all(|cell| !cell.get(*lane).copied().unwrap_or(false))
            })
            .unwrap_or(0);

        for cell in occupied[first..=last].iter_mut() {
            if cell.len() <= lane {
                cell.resize(lane + 1, false);
            }
            cell[lane] = true;
        }
        model.top = lane as f64;
    }
}

pub fn is_within_height(
    container_height: f64,
    event_height: f64,
) -> impl Fn(&EventUiModel) -> bool {
    move |model: &EventUiModel| container_height >= model.top * event_height
}

pub fn is_exceeded_height(
    container_height: f64,
    event_height: f64,
) -> impl Fn(&EventUiModel) -> bool {
    move |model: &EventUiModel| container_height < model.top * event_height
}

/// Number of models whose lane falls below the visible height of a cell ("+N more").
pub fn exceed_count(models: &[EventUiModel], container_height: f64, event_height: f64) -> usize {
    let exceeded = is_exceeded_height(container_height, event_height);
    models.iter().filter(|model| exceeded(*model)).count()
}
