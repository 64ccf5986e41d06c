//! Collapsing of logically identical events (the same meeting on several calendars).

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::models::event::{CalendarEvent, EventId};
use crate::models::ui::EventUiModel;

/// Decides which events are duplicates of each other and which one represents a group.
///
/// Both methods have defaults, so a policy only overrides the part it cares about.
#[cfg_attr(test, mockall::automock)]
pub trait DuplicateEventPolicy {
    /// Ids of the events in `events` that duplicate `target`, `target` included.
    ///
    /// The default groups events with the same title, start and end, ordered by
    /// calendar id.
    fn duplicates_of(&self, target: &CalendarEvent, events: &[Arc<CalendarEvent>]) -> Vec<EventId> {
        let mut duplicates: Vec<&Arc<CalendarEvent>> = events
            .iter()
            .filter(|event| {
                event.title == target.title
                    && event.start == target.start
                    && event.end == target.end
            })
            .collect();
        duplicates.sort_by(|a, b| a.calendar_id.cmp(&b.calendar_id).then(a.id.cmp(&b.id)));
        duplicates.into_iter().map(|event| event.id).collect()
    }

    /// The event shown when a group is collapsed. Defaults to the last one.
    fn main_event(&self, duplicates: &[Arc<CalendarEvent>]) -> Option<EventId> {
        duplicates.last().map(|event| event.id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDuplicatePolicy;

impl DuplicateEventPolicy for DefaultDuplicatePolicy {}

/// Replace each duplicate group in `models` by a single representative.
///
/// The model named by `selected` wins inside its group and is shown expanded. Otherwise
/// the policy's main event is shown, marked `collapsed` when it hides siblings. Groups
/// are restricted to `models`; a main event outside the group falls back to the last
/// member. Output keeps the order in which groups are first met.
pub fn collapse_duplicates(
    models: Vec<EventUiModel>,
    selected: Option<EventId>,
    policy: &dyn DuplicateEventPolicy,
) -> Vec<EventUiModel> {
    let events: Vec<Arc<CalendarEvent>> =
        models.iter().map(|model| Arc::clone(&model.event)).collect();
    let position_of: HashMap<EventId, usize> = models
        .iter()
        .enumerate()
        .map(|(index, model)| (model.id(), index))
        .collect();

    let mut grouped: HashSet<EventId> = HashSet::new();
    let mut collapsed_models = Vec::new();

    for model in &models {
        if grouped.contains(&model.id()) {
            continue;
        }

        let mut group: Vec<EventId> = policy
            .duplicates_of(&model.event, &events)
            .into_iter()
            .filter(|id| position_of.contains_key(id) && !grouped.contains(id))
            .collect();
        if !group.contains(&model.id()) {
            group.insert(0, model.id());
        }
        grouped.extend(group.iter().copied());

        let (representative, collapsed) = match selected.filter(|id| group.contains(id)) {
            Some(id) => (id, false),
            None => {
                let members: Vec<Arc<CalendarEvent>> = group
                    .iter()
                    .map(|id| Arc::clone(&events[position_of[id]]))
                    .collect();
                let main = policy
                    .main_event(&members)
                    .filter(|id| group.contains(id))
                    .unwrap_or_else(|| group[group.len() - 1]);
                (main, group.len() > 1)
            }
        };

        let mut shown = models[position_of[&representative]].clone();
        shown.collapsed = collapsed;
        shown.duplicate_ids = group.iter().copied().filter(|id| *id != representative).collect();
        collapsed_models.push(shown);
    }

    if collapsed_models.len() < models.len() {
        log::debug!(
            "Collapsed {} events into {} duplicate groups",
            models.len(),
            collapsed_models.len()
        );
    }
    collapsed_models
}
