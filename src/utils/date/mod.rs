// Date utility functions
// Day/month boundaries and week enumeration in the instant's own timezone

use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
};
use chrono_tz::Tz;

use crate::models::grid::TimeSlot;

/// Timezone-aware calendar instant used throughout the grid.
pub type CalendarDateTime = DateTime<Tz>;

pub const WEEK_DAYS: i64 = 7;
pub const SUNDAY: u8 = 0;
pub const SATURDAY: u8 = 6;

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) take the earlier instant; times that do not
/// exist (DST spring-forward) move forward to the first valid wall-clock minute.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> CalendarDateTime {
    let mut candidate = naive;
    // Gaps are at most a few hours in every zone the tz database knows about
    for _ in 0..(4 * 60) {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt,
            LocalResult::Ambiguous(earliest, _) => return earliest,
            LocalResult::None => candidate += Duration::minutes(1),
        }
    }
    tz.from_utc_datetime(&naive)
}

pub fn is_same_day(date1: CalendarDateTime, date2: CalendarDateTime) -> bool {
    date1.date_naive() == date2.date_naive()
}

pub fn start_of_day(date: CalendarDateTime) -> CalendarDateTime {
    localize(&date.timezone(), date.date_naive().and_time(NaiveTime::MIN))
}

/// Last millisecond of the day, so `start_of_day(d) <= x <= end_of_day(d)` covers it.
pub fn end_of_day(date: CalendarDateTime) -> CalendarDateTime {
    start_of_day_after(date, 1) - Duration::milliseconds(1)
}

/// Start of the calendar day `days` after the day of `date`.
///
/// Steps on calendar dates rather than wall-clock times, so a day whose midnight does
/// not exist (and so starts at 01:00) never shifts the days that follow it.
pub fn start_of_day_after(date: CalendarDateTime, days: i64) -> CalendarDateTime {
    let day = date.date_naive() + Duration::days(days);
    localize(&date.timezone(), day.and_time(NaiveTime::MIN))
}

/// Add whole calendar days, keeping the wall-clock time of day.
pub fn add_days(date: CalendarDateTime, days: i64) -> CalendarDateTime {
    localize(&date.timezone(), date.naive_local() + Duration::days(days))
}

pub fn start_of_month(date: CalendarDateTime) -> CalendarDateTime {
    let first = date.date_naive() - Duration::days(i64::from(date.day0()));
    localize(&date.timezone(), first.and_time(NaiveTime::MIN))
}

pub fn end_of_month(date: CalendarDateTime) -> CalendarDateTime {
    let first = start_of_month(date);
    let last = start_of_day_after(first, i64::from(days_in_month(date.year(), date.month())) - 1);
    end_of_day(last)
}

/// Number of days in `month` of `year`; 0 for a month chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(0, |last| last.day())
}

/// Day of week with Sunday = 0.
pub fn day_of_week(date: CalendarDateTime) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub fn is_weekend(day: u8) -> bool {
    day == SUNDAY || day == SATURDAY
}

pub fn is_weekend_date(date: CalendarDateTime) -> bool {
    is_weekend(day_of_week(date))
}

/// Whole calendar days from `date2` to `date1` (positive when `date1` is later).
///
/// Counted on local calendar dates, so a 23- or 25-hour DST day is still one day.
pub fn date_difference(date1: CalendarDateTime, date2: CalendarDateTime) -> i64 {
    (date1.date_naive() - date2.date_naive()).num_days()
}

/// `YYYY-MM-DD` key used to index events by day.
pub fn ymd_key(date: CalendarDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn naive_ymd_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The instant at `slot` on the calendar day of `date`. `24:00` is the next midnight.
pub fn at_time_slot(date: CalendarDateTime, slot: TimeSlot) -> CalendarDateTime {
    let midnight = date.date_naive().and_time(NaiveTime::MIN);
    localize(
        &date.timezone(),
        midnight + Duration::minutes(i64::from(slot.minutes_from_midnight())),
    )
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `start_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: CalendarDateTime, start_day_of_week: u8) -> CalendarDateTime {
    let day = i64::from(day_of_week(date));
    let offset = (day - i64::from(start_day_of_week) + WEEK_DAYS) % WEEK_DAYS;
    start_of_day_after(date, -offset)
}

/// Dates of the week that contains `render_date`, starting on `start_day_of_week`.
/// Weekend days are skipped when `workweek` is set.
pub fn week_dates(
    render_date: CalendarDateTime,
    start_day_of_week: u8,
    workweek: bool,
) -> Vec<CalendarDateTime> {
    let first = get_week_start(render_date, start_day_of_week);

    (0..WEEK_DAYS)
        .map(|offset| start_of_day_after(first, offset))
        .filter(|date| !(workweek && is_weekend_date(*date)))
        .collect()
}

/// Event filter range for a single-day view.
///
/// When the primary timezone is not the viewer's local zone the range is widened
/// by one day on each side, since zone offsets can move events across midnight.
pub fn day_view_filter_range(
    date: CalendarDateTime,
    primary_is_local: bool,
) -> (CalendarDateTime, CalendarDateTime) {
    if primary_is_local {
        (start_of_day(date), end_of_day(date))
    } else {
        (start_of_day_after(date, -1), end_of_day(start_of_day_after(date, 1)))
    }
}
