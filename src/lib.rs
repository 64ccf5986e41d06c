// Calendar Grid Library
// Geometry for calendar time grids and month views, and pointer-to-cell lookup

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{GridError, Result};
pub use models::event::{CalendarEvent, EventCategory, EventId};
pub use models::grid::{GridColumn, GridPosition, GridRow, TimeGridData};
pub use models::settings::GridOptions;
pub use models::ui::EventUiModel;
pub use utils::date::CalendarDateTime;
