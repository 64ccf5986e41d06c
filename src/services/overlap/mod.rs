//! Time-grid "render info": vertical placement of events inside a column and side-by-side
//! stacking of events whose times overlap.

mod duplicates;

pub use duplicates::{collapse_duplicates, DefaultDuplicatePolicy, DuplicateEventPolicy};
#[cfg(test)]
pub use duplicates::MockDuplicateEventPolicy;

use chrono::Duration;

use crate::models::event::EventId;
use crate::models::grid::TimeGridData;
use crate::models::ui::EventUiModel;
use crate::services::event::filter::{column_events, intersects_time_range};
use crate::services::layout::columns::TOTAL_WIDTH;
use crate::services::layout::rows::top_percent_by_time;
use crate::utils::date::CalendarDateTime;

static DEFAULT_POLICY: DefaultDuplicatePolicy = DefaultDuplicatePolicy;

/// Whether, and how, duplicate events are merged before layout.
#[derive(Clone, Copy, Default)]
pub enum CollapseDuplicates<'a> {
    #[default]
    Disabled,
    Enabled(&'a dyn DuplicateEventPolicy),
}

impl CollapseDuplicates<'static> {
    /// `true` enables collapsing with [`DefaultDuplicatePolicy`].
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            CollapseDuplicates::Enabled(&DEFAULT_POLICY)
        } else {
            CollapseDuplicates::Disabled
        }
    }
}

impl std::fmt::Debug for CollapseDuplicates<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollapseDuplicates::Disabled => f.write_str("Disabled"),
            CollapseDuplicates::Enabled(_) => f.write_str("Enabled"),
        }
    }
}

/// Instantaneous events still take up a minute when checking for collisions.
fn collision_end(model: &EventUiModel) -> CalendarDateTime {
    if model.ends() > model.starts() {
        model.ends()
    } else {
        model.starts() + Duration::minutes(1)
    }
}

/// Lay out the events of one column spanning `[column_start, column_end]`.
///
/// Events are clipped to the column and events entirely outside it are dropped. `top`
/// and `height` are percentages of the column; `left` and `width` split the column
/// between events that overlap in time, so two overlapping events never share a box.
pub fn layout_column_events(
    events: Vec<EventUiModel>,
    column_start: CalendarDateTime,
    column_end: CalendarDateTime,
    selected_duplicate_id: Option<EventId>,
    collapse: &CollapseDuplicates<'_>,
) -> Vec<EventUiModel> {
    if column_end <= column_start {
        return Vec::new();
    }

    let events = match collapse {
        CollapseDuplicates::Enabled(policy) => {
            collapse_duplicates(events, selected_duplicate_id, *policy)
        }
        CollapseDuplicates::Disabled => events,
    };

    let mut models: Vec<EventUiModel> = events
        .into_iter()
        .filter(|model| {
            intersects_time_range(model.starts(), model.ends(), column_start, column_end)
        })
        .map(|mut model| {
            let start = model.starts().max(column_start);
            let end = model.ends().min(column_end);
            model.top = top_percent_by_time(start, column_start, column_end);
            model.height = top_percent_by_time(end, column_start, column_end) - model.top;
            model
        })
        .collect();

    models.sort_by(|a, b| {
        a.starts()
            .cmp(&b.starts())
            .then_with(|| (b.ends() - b.starts()).cmp(&(a.ends() - a.starts())))
            .then_with(|| a.id().cmp(&b.id()))
    });

    let mut group_start = 0;
    let mut group_end: Option<CalendarDateTime> = None;
    for index in 0..models.len() {
        let starts_new_group = group_end.is_some_and(|end| models[index].starts() >= end);
        if starts_new_group {
            stack_group(&mut models[group_start..index]);
            group_start = index;
            group_end = None;
        }
        let end = collision_end(&models[index]);
        group_end = Some(group_end.map_or(end, |current| current.max(end)));
    }
    stack_group(&mut models[group_start..]);

    models
}

/// Greedy lane packing of one collision group: each event takes the first lane whose
/// last event has ended, and the group shares the column width evenly between lanes.
fn stack_group(group: &mut [EventUiModel]) {
    if group.is_empty() {
        return;
    }

    let mut lane_ends: Vec<CalendarDateTime> = Vec::new();
    let mut lanes = Vec::with_capacity(group.len());
    for model in group.iter() {
        let lane = match lane_ends.iter().position(|end| *end <= model.starts()) {
            Some(lane) => lane,
            None => {
                lane_ends.push(model.starts());
                lane_ends.len() - 1
            }
        };
        lane_ends[lane] = collision_end(model);
        lanes.push(lane);
    }

    let width = TOTAL_WIDTH / lane_ends.len() as f64;
    for (model, lane) in group.iter_mut().zip(lanes) {
        model.width = width;
        model.left = lane as f64 * width;
    }

    if lane_ends.len() > 1 {
        log::debug!(
            "Stacked {} overlapping events into {} lanes",
            group.len(),
            lane_ends.len()
        );
    }
}

/// Lay out every column of a time grid. Each column works on its own copies of the
/// models, so an event spanning several days gets independent geometry per column.
pub fn layout_time_grid(
    grid: &TimeGridData,
    models: &[EventUiModel],
    selected_duplicate_id: Option<EventId>,
    collapse: &CollapseDuplicates<'_>,
) -> Vec<Vec<EventUiModel>> {
    grid.columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let Some((start, end)) = grid.column_time_range(index) else {
                return Vec::new();
            };
            layout_column_events(
                column_events(models, column.date),
                start,
                end,
                selected_duplicate_id,
                collapse,
            )
        })
        .collect()
}
