// UI models module
// Per-render geometry attached to an event occurrence

use std::sync::Arc;

use serde::Serialize;

use crate::models::event::{CalendarEvent, EventId};
use crate::utils::date::CalendarDateTime;

/// An event occurrence plus the render attributes computed for one view.
///
/// The event itself is shared read-only; the geometry fields are owned by this model,
/// so each column clones its models before laying them out and never affects another
/// column's view of the same event.
///
/// In the time grid `top`/`height` are percentages of the column's time range. In day
/// grids `top` is the lane (row) the event occupies.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUiModel {
    pub event: Arc<CalendarEvent>,
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    /// Set on the representative of a duplicate group when its siblings are hidden
    pub collapsed: bool,
    /// Siblings hidden behind this model when duplicates are collapsed
    pub duplicate_ids: Vec<EventId>,
}

impl EventUiModel {
    pub fn new(event: Arc<CalendarEvent>) -> Self {
        Self {
            event,
            top: 0.0,
            left: 0.0,
            width: 0.0,
            height: 0.0,
            collapsed: false,
            duplicate_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> EventId {
        self.event.id
    }

    pub fn starts(&self) -> CalendarDateTime {
        self.event.start
    }

    pub fn ends(&self) -> CalendarDateTime {
        self.event.end
    }

    /// Bounding box as `(top, left, width, height)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.top, self.left, self.width, self.height)
    }
}

impl From<CalendarEvent> for EventUiModel {
    fn from(event: CalendarEvent) -> Self {
        Self::new(Arc::new(event))
    }
}
