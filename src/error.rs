// Error types for grid geometry
// Invalid input is rejected up front so no layout ever carries NaN or negative sizes

use thiserror::Error;

/// Errors raised while building grid geometry or loading grid options.
#[derive(Debug, Error)]
pub enum GridError {
    /// `hour_end` must be greater than `hour_start` and no later than 24.
    #[error(
        "invalid hour range: {hour_start}..{hour_end} (hour_end must be > hour_start and <= 24)"
    )]
    InvalidHourRange { hour_start: u32, hour_end: u32 },

    #[error("invalid visible weeks count: {0} (must be >= 0)")]
    InvalidVisibleWeeks(i32),

    #[error("invalid start day of week: {0} (expected 0-6, Sunday = 0)")]
    InvalidStartDayOfWeek(u8),

    #[error("invalid time slot '{0}' (expected zero-padded HH:MM)")]
    InvalidTimeSlot(String),

    #[error("failed to parse grid options: {0}")]
    Config(#[from] toml::de::Error),
}

impl GridError {
    /// True for the range errors a caller should have caught while validating options.
    pub fn is_invalid_range(&self) -> bool {
        matches!(
            self,
            GridError::InvalidHourRange { .. } | GridError::InvalidVisibleWeeks(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
