//! Grid geometry: columns, time rows, month matrices and day-grid placement.

pub mod columns;
pub mod day_grid;
pub mod month;
pub mod rows;
