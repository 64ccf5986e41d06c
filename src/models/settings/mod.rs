// Settings module
// Week and month view options, loadable from TOML

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

pub const DEFAULT_VISIBLE_WEEKS: i32 = 6;

/// Options for the week/day time grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekOptions {
    pub start_day_of_week: u8,
    pub narrow_weekend: bool,
    pub workweek: bool,
    pub hour_start: u32,
    pub hour_end: u32,
    pub collapse_duplicate_events: bool,
}

impl Default for WeekOptions {
    fn default() -> Self {
        Self {
            start_day_of_week: 0, // Sunday
            narrow_weekend: false,
            workweek: false,
            hour_start: 0,
            hour_end: 24,
            collapse_duplicate_events: false,
        }
    }
}

impl WeekOptions {
    pub fn validate(&self) -> Result<()> {
        validate_start_day_of_week(self.start_day_of_week)?;
        validate_hour_range(self.hour_start, self.hour_end)
    }
}

/// Options for the month matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthOptions {
    pub start_day_of_week: u8,
    pub narrow_weekend: bool,
    pub workweek: bool,
    /// Number of weeks to show starting from the target date; 0 shows the whole month
    pub visible_weeks_count: i32,
    pub is_always_6_weeks: bool,
}

impl Default for MonthOptions {
    fn default() -> Self {
        Self {
            start_day_of_week: 0,
            narrow_weekend: false,
            workweek: false,
            visible_weeks_count: 0,
            is_always_6_weeks: true,
        }
    }
}

impl MonthOptions {
    pub fn validate(&self) -> Result<()> {
        validate_start_day_of_week(self.start_day_of_week)?;
        if self.visible_weeks_count < 0 {
            return Err(GridError::InvalidVisibleWeeks(self.visible_weeks_count));
        }
        Ok(())
    }
}

/// All grid options, as found in a `[week]` / `[month]` TOML document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub week: WeekOptions,
    pub month: MonthOptions,
}

impl GridOptions {
    /// Parse and validate options from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: GridOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> AnyResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid options from {}", path.display()))?;
        let options = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid grid options in {}", path.display()))?;

        log::debug!("Loaded grid options from {}", path.display());
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        self.week.validate()?;
        self.month.validate()
    }
}

pub fn validate_hour_range(hour_start: u32, hour_end: u32) -> Result<()> {
    if hour_end <= hour_start || hour_end > 24 {
        log::warn!("Rejecting hour range {}..{}", hour_start, hour_end);
        return Err(GridError::InvalidHourRange {
            hour_start,
            hour_end,
        });
    }
    Ok(())
}

pub fn validate_start_day_of_week(day: u8) -> Result<()> {
    if day > 6 {
        return Err(GridError::InvalidStartDayOfWeek(day));
    }
    Ok(())
}
