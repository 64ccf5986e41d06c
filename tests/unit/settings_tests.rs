// Grid option parsing and validation

use std::io::Write;

use calendar_grid::models::settings::{GridOptions, WeekOptions};
use calendar_grid::GridError;
use test_case::test_case;

#[test_case(0, 24 ; "full day")]
#[test_case(9, 18 ; "business hours")]
#[test_case(23, 24 ; "last hour")]
fn test_valid_hour_ranges(hour_start: u32, hour_end: u32) {
    let options = WeekOptions {
        hour_start,
        hour_end,
        ..WeekOptions::default()
    };
    assert!(options.validate().is_ok());
}

#[test_case("[week]\nhour_start = 12\nhour_end = 12\n" ; "empty hour range")]
#[test_case("[week]\nhour_end = 30\n" ; "hour end past midnight")]
#[test_case("[month]\nvisible_weeks_count = -1\n" ; "negative visible weeks")]
fn test_invalid_ranges_rejected(text: &str) {
    let err = GridOptions::from_toml_str(text).unwrap_err();
    assert!(err.is_invalid_range(), "unexpected error: {err}");
}

#[test]
fn test_start_day_of_week_out_of_range() {
    let err = GridOptions::from_toml_str("[month]\nstart_day_of_week = 7\n").unwrap_err();
    assert!(matches!(err, GridError::InvalidStartDayOfWeek(7)));
    assert!(!err.is_invalid_range());
}

#[test]
fn test_load_reports_file_and_cause() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[week]\nhour_start = 20\nhour_end = 8").unwrap();

    let err = GridOptions::load(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid grid options in"));
    assert!(err
        .chain()
        .any(|cause| cause.to_string().contains("invalid hour range")));
}

#[test]
fn test_options_round_trip_through_toml() {
    let options = GridOptions {
        week: WeekOptions {
            start_day_of_week: 1,
            narrow_weekend: true,
            hour_start: 7,
            hour_end: 21,
            collapse_duplicate_events: true,
            ..WeekOptions::default()
        },
        ..GridOptions::default()
    };

    let text = toml::to_string(&options).unwrap();
    assert_eq!(GridOptions::from_toml_str(&text).unwrap(), options);
}
