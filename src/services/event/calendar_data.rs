use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::models::event::{CalendarEvent, EventId};
use crate::utils::date::{naive_ymd_key, start_of_day, CalendarDateTime};

/// Event table plus a precomputed day → event-id index.
///
/// The index lets a grid cell fetch its events by `YYYY-MM-DD` key instead of
/// re-scanning every event for every day.
#[derive(Debug, Clone, Default)]
pub struct CalendarData {
    events: Vec<Arc<CalendarEvent>>,
    positions: HashMap<EventId, usize>,
    ids_of_day: BTreeMap<String, Vec<EventId>>,
}

impl CalendarData {
    pub fn new(events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        let mut data = Self::default();
        for event in events {
            data.insert(event);
        }
        data
    }

    /// Add an event; an id that is already present is ignored.
    pub fn insert(&mut self, event: CalendarEvent) -> bool {
        if self.positions.contains_key(&event.id) {
            log::warn!("Ignoring duplicate event id {}", event.id);
            return false;
        }

        let last_day = event.end.date_naive();
        for day in event.start.date_naive().iter_days().take_while(|day| *day <= last_day) {
            self.ids_of_day
                .entry(naive_ymd_key(day))
                .or_default()
                .push(event.id);
        }

        self.positions.insert(event.id, self.events.len());
        self.events.push(Arc::new(event));
        true
    }

    pub fn events(&self) -> &[Arc<CalendarEvent>] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> Option<&Arc<CalendarEvent>> {
        self.positions.get(&id).map(|index| &self.events[*index])
    }

    /// Ids of the events touching the day with key `ymd`, in insertion order.
    pub fn ids_of_day(&self, ymd: &str) -> &[EventId] {
        self.ids_of_day.get(ymd).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.ids_of_day.keys().map(String::as_str)
    }

    /// Events whose day-span intersects `[start, end]`, earliest and longest first.
    pub fn find_by_date_range(
        &self,
        start: CalendarDateTime,
        end: CalendarDateTime,
    ) -> Vec<Arc<CalendarEvent>> {
        let mut found: Vec<Arc<CalendarEvent>> = self
            .events
            .iter()
            .filter(|event| start_of_day(event.start) <= end && start_of_day(event.end) >= start)
            .cloned()
            .collect();

        found.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| b.duration().cmp(&a.duration()))
                .then_with(|| a.id.cmp(&b.id))
        });
        found
    }
}
