// Grid geometry models
// Columns, rows and the time-grid description handed to the rendering layer

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::GridError;
use crate::utils::date::{at_time_slot, is_same_day, CalendarDateTime};

/// Wall-clock time of day at minute precision, rendered as zero-padded `HH:MM`.
///
/// `24:00` is allowed so the last row of a full-day grid can end at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    hour: u8,
    minute: u8,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Result<Self, GridError> {
        let valid = (hour < 24 && minute < 60) || (hour == 24 && minute == 0);
        if !valid {
            return Err(GridError::InvalidTimeSlot(format!("{hour:02}:{minute:02}")));
        }

        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn minutes_from_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::InvalidTimeSlot(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One date's vertical slice of the view. `width` and `left` are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridColumn {
    pub date: CalendarDateTime,
    pub width: f64,
    pub left: f64,
}

/// One 30-minute slice of the time grid. `top` and `height` are percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub top: f64,
    pub height: f64,
    pub start_time: TimeSlot,
    pub end_time: TimeSlot,
}

/// Logical grid cell resolved from a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridPosition {
    pub row_index: usize,
    pub column_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerPosition {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Measured bounds of the columns container, in client pixels.
///
/// `client_left`/`client_top` are the container's border widths.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub client_left: f64,
    pub client_top: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
            client_left: 0.0,
            client_top: 0.0,
        }
    }

    pub fn with_client_offset(mut self, client_left: f64, client_top: f64) -> Self {
        self.client_left = client_left;
        self.client_top = client_top;
        self
    }

    /// A container that has not been laid out yet reports a zero size.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Position of the "now" line inside the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowIndicator {
    pub column_index: usize,
    pub top: f64,
}

/// Complete geometry of one time-grid view instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeGridData {
    pub columns: Vec<GridColumn>,
    pub rows: Vec<GridRow>,
}

impl TimeGridData {
    /// Start and end instants displayed by column `index`.
    pub fn column_time_range(&self, index: usize) -> Option<(CalendarDateTime, CalendarDateTime)> {
        let column = self.columns.get(index)?;
        let first = self.rows.first()?;
        let last = self.rows.last()?;

        Some((
            at_time_slot(column.date, first.start_time),
            at_time_slot(column.date, last.end_time),
        ))
    }

    /// Instant at the top of the cell at `position`, used when a selection starts there.
    pub fn date_at(&self, position: GridPosition) -> Option<CalendarDateTime> {
        let column = self.columns.get(position.column_index)?;
        let row = self.rows.get(position.row_index)?;
        Some(at_time_slot(column.date, row.start_time))
    }

    /// Where the current-time line goes, if `now` falls inside the displayed range.
    pub fn now_indicator(&self, now: CalendarDateTime) -> Option<NowIndicator> {
        let column_index = self
            .columns
            .iter()
            .position(|column| is_same_day(column.date, now))?;
        let (start, end) = self.column_time_range(column_index)?;

        if now < start || now > end {
            return None;
        }

        Some(NowIndicator {
            column_index,
            top: crate::services::layout::rows::top_percent_by_time(now, start, end),
        })
    }
}
