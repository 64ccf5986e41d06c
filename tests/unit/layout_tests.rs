// Column, row and month layout tests

use calendar_grid::models::settings::MonthOptions;
use calendar_grid::services::layout::columns::{compute_columns, compute_width_table, left_offsets};
use calendar_grid::services::layout::month::compute_month_matrix;
use calendar_grid::services::layout::rows::compute_time_rows;
use calendar_grid::utils::date::{date_difference, day_of_week, start_of_day, week_dates, ymd_key};
use test_case::test_case;

use crate::fixtures::dates;

const EPSILON: f64 = 1e-6;
const UNIT: f64 = 100.0 / 6.0;
const HALF: f64 = 100.0 / 12.0;

fn assert_widths(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < EPSILON, "column {index}: {a} != {e}");
    }
}

#[test_case(&[true, false, false, false, false, false, true], true,
            &[HALF, UNIT, UNIT, UNIT, UNIT, UNIT, HALF]
            ; "sunday first week narrowed")]
#[test_case(&[false, false, false, false, false, true, true], true,
            &[UNIT, UNIT, UNIT, UNIT, UNIT, HALF, HALF]
            ; "monday first week narrowed")]
#[test_case(&[false, false, false, false, true, true], true,
            &[20.0, 20.0, 20.0, 20.0, 10.0, 10.0]
            ; "six columns narrowed")]
#[test_case(&[false; 5], true, &[20.0; 5] ; "workweek never narrowed")]
#[test_case(&[true, true], true, &[50.0, 50.0] ; "all weekend never narrowed")]
#[test_case(&[true, false, false, false, false, false, true], false, &[100.0 / 7.0; 7]
            ; "narrowing off")]
fn test_width_table(weekend_flags: &[bool], narrow: bool, expected: &[f64]) {
    let widths = compute_width_table(weekend_flags, narrow, 100.0);
    assert_widths(&widths, expected);
    assert!((widths.iter().sum::<f64>() - 100.0).abs() < EPSILON);
}

#[test]
fn test_width_table_scales_to_pixels() {
    let widths = compute_width_table(&[true, false, false, false, false, false, true], true, 600.0);
    assert_widths(&widths, &[50.0, 100.0, 100.0, 100.0, 100.0, 100.0, 50.0]);
    assert_widths(&left_offsets(&widths), &[0.0, 50.0, 150.0, 250.0, 350.0, 450.0, 550.0]);
}

#[test]
fn test_compute_columns_week() {
    let columns = compute_columns(&dates::week_of_jan_5_2025(), true);

    assert_eq!(columns.len(), 7);
    assert_eq!(columns[0].left, 0.0);
    assert!((columns[0].width * 2.0 - columns[1].width).abs() < EPSILON);
    for pair in columns.windows(2) {
        assert!((pair[0].left + pair[0].width - pair[1].left).abs() < EPSILON);
    }
}

#[test]
fn test_compute_columns_empty() {
    assert!(compute_columns(&[], true).is_empty());
}

#[test]
fn test_compute_columns_workweek_ignores_narrowing() {
    let workweek = week_dates(dates::jan_6_2025_at(0, 0), 0, true);
    let columns = compute_columns(&workweek, true);
    assert!(columns.iter().all(|column| (column.width - 20.0).abs() < EPSILON));
}

#[test_case(9, 18, 18, "09:00", "18:00" ; "business hours")]
#[test_case(0, 24, 48, "00:00", "24:00" ; "full day")]
#[test_case(23, 24, 2, "23:00", "24:00" ; "last hour")]
#[test_case(6, 7, 2, "06:00", "07:00" ; "single hour")]
fn test_time_rows(hour_start: u32, hour_end: u32, count: usize, first: &str, last: &str) {
    super::init_logging();
    let rows = compute_time_rows(hour_start, hour_end).unwrap();

    assert_eq!(rows.len(), count);
    assert_eq!(rows[0].start_time.to_string(), first);
    assert_eq!(rows[count - 1].end_time.to_string(), last);
    assert!(rows
        .iter()
        .all(|row| (row.height - 100.0 / count as f64).abs() < EPSILON));
}

#[test_case(10, 10 ; "empty range")]
#[test_case(18, 9 ; "inverted range")]
#[test_case(0, 25 ; "past midnight")]
fn test_time_rows_rejected(hour_start: u32, hour_end: u32) {
    let err = compute_time_rows(hour_start, hour_end).unwrap_err();
    assert!(err.is_invalid_range());
}

#[test_case(2026, 2, true, 6 ; "february 2026 always six")]
#[test_case(2026, 2, false, 4 ; "february 2026 compact")]
#[test_case(2025, 1, false, 5 ; "january 2025 compact")]
#[test_case(2025, 3, false, 6 ; "march 2025 compact")]
#[test_case(2025, 2, false, 5 ; "february 2025 compact")]
fn test_month_row_count(year: i32, month: u32, is_always_6_weeks: bool, weeks: usize) {
    let options = MonthOptions {
        is_always_6_weeks,
        ..MonthOptions::default()
    };
    let matrix = compute_month_matrix(dates::utc(year, month, 15), &options).unwrap();

    assert_eq!(matrix.len(), weeks);
    assert!(matrix.iter().all(|week| week.len() == 7));
    assert_eq!(day_of_week(matrix[0][0]), 0);
}

#[test]
fn test_month_matrix_monday_start_on_the_first() {
    // September 1, 2025 is a Monday
    let options = MonthOptions {
        start_day_of_week: 1,
        is_always_6_weeks: false,
        ..MonthOptions::default()
    };
    let matrix = compute_month_matrix(dates::utc(2025, 9, 20), &options).unwrap();

    assert_eq!(ymd_key(matrix[0][0]), "2025-09-01");
    assert_eq!(matrix.len(), 5);
    assert_eq!(ymd_key(matrix[4][6]), "2025-10-05");
}

#[test]
fn test_month_matrix_workweek_rows() {
    let options = MonthOptions {
        workweek: true,
        visible_weeks_count: 3,
        ..MonthOptions::default()
    };
    let matrix = compute_month_matrix(dates::utc(2025, 1, 8), &options).unwrap();

    assert_eq!(matrix.len(), 3);
    assert!(matrix.iter().all(|week| week.len() == 5));
    assert_eq!(ymd_key(matrix[0][0]), "2025-01-06");
}

#[test]
fn test_month_matrix_entries_start_their_day_across_missing_midnight() {
    let matrix =
        compute_month_matrix(dates::sao_paulo_nov_2018(20, 15, 0), &MonthOptions::default())
            .unwrap();

    assert_eq!(ymd_key(matrix[0][0]), "2018-10-28");
    assert_eq!(matrix[1][0], start_of_day(dates::sao_paulo_nov_2018(4, 12, 0)));
    assert_eq!(matrix[1][1], dates::sao_paulo_nov_2018(5, 0, 0));
    for week in &matrix {
        assert!(week.iter().all(|date| *date == start_of_day(*date)));
        for pair in week.windows(2) {
            assert_eq!(date_difference(pair[1], pair[0]), 1);
        }
    }
}
