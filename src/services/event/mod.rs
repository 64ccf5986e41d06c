//! Event selection for grid views.
//! Range filtering, the per-day event index and week-view panel assignment.

mod calendar_data;
pub mod filter;

pub use calendar_data::CalendarData;
