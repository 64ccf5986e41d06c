// Event module
// Calendar event occurrence as seen by the grid: identity, calendar, time span and panel

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::utils::date::CalendarDateTime;

/// Stable identity of one event occurrence.
///
/// Grouping, indexing and de-duplication all key on this id, never on field equality:
/// two occurrences may carry identical titles and times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which panel of the week view an event renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Milestone,
    Task,
    Allday,
    #[default]
    Time,
}

impl EventCategory {
    pub fn is_day_grid(&self) -> bool {
        !matches!(self, EventCategory::Time)
    }
}

/// Calendar event occurrence
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EventId,
    pub calendar_id: String,
    pub title: String,
    pub start: CalendarDateTime,
    pub end: CalendarDateTime,
    pub category: EventCategory,
}

impl CalendarEvent {
    /// Create a new timed event with required fields
    ///
    /// # Arguments
    /// * `id` - Stable occurrence id
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time (not before `start`)
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::{CalendarEvent, EventId};
    /// use chrono::TimeZone;
    /// use chrono_tz::UTC;
    ///
    /// let start = UTC.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = CalendarEvent::new(EventId(1), "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration().num_minutes(), 60);
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: CalendarDateTime,
        end: CalendarDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id,
            calendar_id: String::new(),
            title: title.into(),
            start,
            end,
            category: EventCategory::Time,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // Milestones and tasks may be instantaneous
        if self.end < self.start {
            return Err("Event end time cannot be before start time".to_string());
        }

        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Half-open overlap; events that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &CalendarEvent) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Builder for creating events with optional fields
pub struct CalendarEventBuilder {
    id: Option<EventId>,
    calendar_id: Option<String>,
    title: Option<String>,
    start: Option<CalendarDateTime>,
    end: Option<CalendarDateTime>,
    category: EventCategory,
}

impl CalendarEventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            calendar_id: None,
            title: None,
            start: None,
            end: None,
            category: EventCategory::Time,
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = Some(EventId(id));
        self
    }

    pub fn calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: CalendarDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: CalendarDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    /// Shorthand for `category(EventCategory::Allday)`
    pub fn all_day(self) -> Self {
        self.category(EventCategory::Allday)
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = CalendarEvent {
            id,
            calendar_id: self.calendar_id.unwrap_or_default(),
            title,
            start,
            end,
            category: self.category,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for CalendarEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}
