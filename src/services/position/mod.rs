//! Pointer → grid cell lookup for selection and drag.
//!
//! A [`GridLayoutSnapshot`] captures everything the lookup depends on. Callers rebuild
//! it whenever the container is measured again or the column count changes; the lookup
//! itself keeps no state between calls.

use crate::models::grid::{ContainerRect, GridPosition, PointerPosition, TimeGridData};
use crate::services::layout::columns::{compute_width_table, left_offsets};
use crate::utils::date::{is_weekend, WEEK_DAYS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayoutSnapshot {
    pub rows_count: usize,
    pub columns_count: usize,
    pub container: Option<ContainerRect>,
    pub narrow_weekend: bool,
    pub start_day_of_week: u8,
}

impl GridLayoutSnapshot {
    pub fn new(rows_count: usize, columns_count: usize, container: Option<ContainerRect>) -> Self {
        Self {
            rows_count,
            columns_count,
            container,
            narrow_weekend: false,
            start_day_of_week: 0,
        }
    }

    pub fn with_narrow_weekend(mut self, narrow_weekend: bool) -> Self {
        self.narrow_weekend = narrow_weekend;
        self
    }

    pub fn with_start_day_of_week(mut self, start_day_of_week: u8) -> Self {
        self.start_day_of_week = start_day_of_week;
        self
    }

    /// Snapshot matching a time grid's rows and columns.
    pub fn for_time_grid(
        grid: &TimeGridData,
        container: Option<ContainerRect>,
        narrow_weekend: bool,
        start_day_of_week: u8,
    ) -> Self {
        Self::new(grid.rows.len(), grid.columns.len(), container)
            .with_narrow_weekend(narrow_weekend)
            .with_start_day_of_week(start_day_of_week)
    }

    pub fn find_position(&self, pointer: PointerPosition) -> Option<GridPosition> {
        find_position(self, pointer)
    }

    /// Pixel width of every column, in the same proportions as the forward layout.
    fn column_widths(&self, container_width: f64) -> Vec<f64> {
        let weekend_flags: Vec<bool> = (0..self.columns_count)
            .map(|index| {
                let weekday = (i64::from(self.start_day_of_week) + index as i64) % WEEK_DAYS;
                is_weekend(weekday as u8)
            })
            .collect();
        compute_width_table(&weekend_flags, self.narrow_weekend, container_width)
    }
}

/// Resolve the cell under `pointer`.
///
/// Returns `None` when the container has not been measured, the grid is empty, or the
/// pointer lies outside the container. A pointer exactly on a column boundary belongs to
/// the column that starts there.
pub fn find_position(
    snapshot: &GridLayoutSnapshot,
    pointer: PointerPosition,
) -> Option<GridPosition> {
    let container = snapshot.container.filter(ContainerRect::is_measured)?;
    if snapshot.rows_count == 0 || snapshot.columns_count == 0 {
        return None;
    }

    let x = pointer.client_x - container.left - container.client_left;
    let y = pointer.client_y - container.top - container.client_top;
    if x < 0.0 || y < 0.0 || x > container.width || y > container.height {
        return None;
    }

    let offsets = left_offsets(&snapshot.column_widths(container.width));
    let column_index = offsets.iter().rposition(|left| x >= *left)?;

    let row = (y / container.height * snapshot.rows_count as f64).floor() as usize;
    let row_index = row.min(snapshot.rows_count - 1);

    Some(GridPosition {
        row_index,
        column_index,
    })
}
