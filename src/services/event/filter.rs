//! Event selection for grid ranges and assignment of events to days.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::models::event::{CalendarEvent, EventCategory, EventId};
use crate::models::grid::TimeSlot;
use crate::models::settings::{MonthOptions, WeekOptions};
use crate::models::ui::EventUiModel;
use crate::services::event::CalendarData;
use crate::services::layout::day_grid::{assign_lanes, event_left_and_width};
use crate::utils::date::{at_time_slot, end_of_day, start_of_day, ymd_key, CalendarDateTime};

/// True when `[start, end)` intersects `[range_start, range_end)`.
///
/// Instantaneous events count when they sit inside the range, including its first instant.
pub fn intersects_time_range(
    start: CalendarDateTime,
    end: CalendarDateTime,
    range_start: CalendarDateTime,
    range_end: CalendarDateTime,
) -> bool {
    if start == end {
        return range_start <= start && start < range_end;
    }
    start < range_end && end > range_start
}

/// True when the event's day-span `[start_of_day(start), start_of_day(end)]`
/// intersects `[range_start, range_end]` (both inclusive).
pub fn intersects_day_range(
    event: &CalendarEvent,
    range_start: CalendarDateTime,
    range_end: CalendarDateTime,
) -> bool {
    start_of_day(event.start) <= range_end && start_of_day(event.end) >= range_start
}

/// Events touching `[range_start, range_end]` by calendar day, in input order.
pub fn select_events(
    events: &[Arc<CalendarEvent>],
    range_start: CalendarDateTime,
    range_end: CalendarDateTime,
) -> Vec<EventUiModel> {
    events
        .iter()
        .filter(|event| intersects_day_range(event, range_start, range_end))
        .map(|event| EventUiModel::new(Arc::clone(event)))
        .collect()
}

/// Predicate for models whose day-span contains `grid_date`.
pub fn is_in_grid(grid_date: CalendarDateTime) -> impl Fn(&EventUiModel) -> bool {
    move |model: &EventUiModel| {
        start_of_day(model.starts()) <= grid_date && grid_date <= start_of_day(model.ends())
    }
}

/// Predicate for models whose time span intersects `[start, end)`.
pub fn is_between(
    start: CalendarDateTime,
    end: CalendarDateTime,
) -> impl Fn(&EventUiModel) -> bool {
    move |model: &EventUiModel| intersects_time_range(model.starts(), model.ends(), start, end)
}

/// Owned copies of the models that fall on `column_date`, ready for column-local layout.
pub fn column_events(models: &[EventUiModel], column_date: CalendarDateTime) -> Vec<EventUiModel> {
    let in_column = is_between(start_of_day(column_date), end_of_day(column_date));
    models.iter().filter(|model| in_column(*model)).cloned().collect()
}

/// Flatten per-day groups, keeping the first occurrence of every event id.
///
/// A multi-day event is listed under each day it touches; it must render once.
pub fn dedupe_by_id(models: impl IntoIterator<Item = EventUiModel>) -> Vec<EventUiModel> {
    let mut seen = HashSet::new();
    models
        .into_iter()
        .filter(|model| seen.insert(model.id()))
        .collect()
}

pub fn time_grid_models(per_day: Vec<Vec<EventUiModel>>) -> Vec<EventUiModel> {
    dedupe_by_id(per_day.into_iter().flatten())
}

/// Day-grid placement of a row of dates (a month week or the all-day panel).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayGridEvents {
    /// Every event in the row once, with `left`/`width` and a 0-based lane in `top`
    pub models: Vec<EventUiModel>,
    /// Events of each day of the row, keyed `YYYY-MM-DD`
    pub by_date: BTreeMap<String, Vec<EventUiModel>>,
}

/// Place the events of a month row and group them by day using the day index.
///
/// Weekend cells are half width when `options.narrow_weekend` is set.
pub fn rendered_day_grid_models(
    row: &[CalendarDateTime],
    calendar_data: &CalendarData,
    options: &MonthOptions,
) -> DayGridEvents {
    let (Some(first), Some(last)) = (row.first(), row.last()) else {
        return DayGridEvents::default();
    };

    let events = calendar_data.find_by_date_range(start_of_day(*first), end_of_day(*last));
    let mut models = place_in_row(events, row, options.narrow_weekend);
    assign_lanes(&mut models, row);

    let position_of: HashMap<EventId, usize> = models
        .iter()
        .enumerate()
        .map(|(index, model)| (model.id(), index))
        .collect();

    let by_date: BTreeMap<String, Vec<EventUiModel>> = row
        .iter()
        .map(|date| {
            let key = ymd_key(*date);
            let day_models: Vec<EventUiModel> = calendar_data
                .ids_of_day(&key)
                .iter()
                .filter_map(|id| position_of.get(id))
                .map(|index| models[*index].clone())
                .collect();
            (key, day_models)
        })
        .collect();

    DayGridEvents { models, by_date }
}

fn place_in_row(
    events: Vec<Arc<CalendarEvent>>,
    row: &[CalendarDateTime],
    narrow_weekend: bool,
) -> Vec<EventUiModel> {
    events
        .into_iter()
        .map(|event| {
            let mut model = EventUiModel::new(event);
            let span = event_left_and_width(model.starts(), model.ends(), row, narrow_weekend);
            model.left = span.left;
            model.width = span.width;
            model
        })
        .collect()
}

/// Events of a week view, split by panel.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventModelMap {
    pub milestone: Vec<EventUiModel>,
    pub task: Vec<EventUiModel>,
    pub allday: Vec<EventUiModel>,
    pub time: Vec<EventUiModel>,
}

/// Split the events between `range_start` and `range_end` into week-view panels.
///
/// Day-grid panels get `left`/`width` for `row` and a 1-based lane in `top`. Time events
/// are collected per day within `hour_start..hour_end` and flattened once per event;
/// their geometry is computed per column by the overlap resolver.
pub fn week_view_events(
    row: &[CalendarDateTime],
    calendar_data: &CalendarData,
    options: &WeekOptions,
    range_start: CalendarDateTime,
    range_end: CalendarDateTime,
) -> Result<EventModelMap> {
    options.validate()?;
    let hour_start = TimeSlot::new(options.hour_start, 0)?;
    let hour_end = TimeSlot::new(options.hour_end, 0)?;

    let events = calendar_data.find_by_date_range(range_start, range_end);
    let day_grid_panel = |category: EventCategory| {
        let panel_events: Vec<Arc<CalendarEvent>> = events
            .iter()
            .filter(|event| event.category == category)
            .cloned()
            .collect();
        let mut models = place_in_row(panel_events, row, options.narrow_weekend);
        assign_lanes(&mut models, row);
        for model in models.iter_mut() {
            model.top += 1.0;
        }
        models
    };

    let per_day: Vec<Vec<EventUiModel>> = row
        .iter()
        .map(|date| {
            let day_start = at_time_slot(*date, hour_start);
            let day_end = at_time_slot(*date, hour_end);
            events
                .iter()
                .filter(|event| !event.category.is_day_grid())
                .filter(|event| intersects_time_range(event.start, event.end, day_start, day_end))
                .map(|event| EventUiModel::new(Arc::clone(event)))
                .collect()
        })
        .collect();

    let map = EventModelMap {
        milestone: day_grid_panel(EventCategory::Milestone),
        task: day_grid_panel(EventCategory::Task),
        allday: day_grid_panel(EventCategory::Allday),
        time: time_grid_models(per_day),
    };

    log::debug!(
        "Week view events: {} milestone, {} task, {} allday, {} time",
        map.milestone.len(),
        map.task.len(),
        map.allday.len(),
        map.time.len()
    );
    Ok(map)
}
