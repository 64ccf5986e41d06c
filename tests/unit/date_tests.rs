// Date math around week boundaries and DST transitions

use calendar_grid::models::grid::TimeSlot;
use calendar_grid::utils::date::{
    add_days, at_time_slot, date_difference, day_of_week, day_view_filter_range, end_of_day,
    get_week_start, start_of_day, start_of_day_after, week_dates, ymd_key,
};
use chrono::{Duration, Timelike};
use test_case::test_case;

use crate::fixtures::dates;

#[test_case(0, false, "2025-01-05", 7 ; "sunday start")]
#[test_case(1, false, "2025-01-06", 7 ; "monday start")]
#[test_case(3, false, "2025-01-01", 7 ; "wednesday start")]
#[test_case(0, true, "2025-01-06", 5 ; "sunday start workweek")]
#[test_case(1, true, "2025-01-06", 5 ; "monday start workweek")]
fn test_week_dates(start_day_of_week: u8, workweek: bool, first: &str, count: usize) {
    let week = week_dates(dates::jan_6_2025_at(15, 0), start_day_of_week, workweek);

    assert_eq!(week.len(), count);
    assert_eq!(ymd_key(week[0]), first);
    assert!(week.iter().all(|date| *date == start_of_day(*date)));
}

#[test]
fn test_week_dates_are_consecutive() {
    let week = dates::week_of_jan_5_2025();
    for pair in week.windows(2) {
        assert_eq!(date_difference(pair[1], pair[0]), 1);
    }
    assert_eq!(day_of_week(week[0]), 0);
    assert_eq!(day_of_week(week[6]), 6);
}

#[test]
fn test_day_boundaries_on_dst_start() {
    let noon = dates::dst_start_2025_new_york(12);
    let midnight = start_of_day(noon);

    assert_eq!(midnight.hour(), 0);
    // 23-hour day: 01:59 EST jumps to 03:00 EDT
    assert_eq!(add_days(midnight, 1) - midnight, Duration::hours(23));
    assert_eq!(end_of_day(noon) + Duration::milliseconds(1), add_days(midnight, 1));
}

#[test]
fn test_add_days_keeps_wall_clock_across_dst() {
    let before = add_days(dates::dst_start_2025_new_york(10), -1);
    let after = add_days(before, 1);

    assert_eq!(after.hour(), 10);
    assert_eq!(after - before, Duration::hours(23));
    assert_eq!(date_difference(after, before), 1);
}

#[test]
fn test_week_dates_after_missing_midnight() {
    let week = dates::week_of_missing_midnight();

    assert_eq!(ymd_key(week[0]), "2018-11-04");
    assert_eq!(week[0].hour(), 1);
    assert_eq!(week[1], dates::sao_paulo_nov_2018(5, 0, 0));
    assert!(week[1..].iter().all(|date| date.hour() == 0 && date.minute() == 0));
    assert!(week.iter().all(|date| *date == start_of_day(*date)));
    for pair in week.windows(2) {
        assert_eq!(date_difference(pair[1], pair[0]), 1);
    }
}

#[test_case(4, 1, "2018-11-05", 0 ; "from the short day")]
#[test_case(5, -1, "2018-11-04", 1 ; "back onto the short day")]
#[test_case(3, 2, "2018-11-05", 0 ; "across the short day")]
fn test_start_of_day_after_missing_midnight(day: u32, days: i64, key: &str, hour: u32) {
    let start = start_of_day_after(dates::sao_paulo_nov_2018(day, 12, 0), days);

    assert_eq!(ymd_key(start), key);
    assert_eq!(start.hour(), hour);
}

#[test]
fn test_week_start_on_missing_midnight() {
    let start = get_week_start(dates::sao_paulo_nov_2018(7, 9, 30), 1);

    assert_eq!(start, dates::sao_paulo_nov_2018(5, 0, 0));
}

#[test]
fn test_time_slot_in_dst_gap_moves_forward() {
    let slot = TimeSlot::new(2, 30).unwrap();
    let resolved = at_time_slot(dates::dst_start_2025_new_york(12), slot);

    assert_eq!((resolved.hour(), resolved.minute()), (3, 0));
}

#[test_case(true, "2025-01-06", "2025-01-06" ; "local zone")]
#[test_case(false, "2025-01-05", "2025-01-07" ; "other primary zone")]
fn test_day_view_filter_range(primary_is_local: bool, first: &str, last: &str) {
    let (start, end) = day_view_filter_range(dates::jan_6_2025_at(9, 0), primary_is_local);

    assert_eq!(ymd_key(start), first);
    assert_eq!(ymd_key(end), last);
    assert_eq!(start, start_of_day(start));
    assert_eq!(end, end_of_day(end));
}
