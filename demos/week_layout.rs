// Lays out a sample week and prints the geometry a renderer would receive
// Usage: cargo run --example week_layout [options.toml]

use anyhow::{Context, Result};
use calendar_grid::models::grid::{ContainerRect, PointerPosition};
use calendar_grid::services::event::filter::week_view_events;
use calendar_grid::services::event::CalendarData;
use calendar_grid::services::overlap::{layout_time_grid, CollapseDuplicates};
use calendar_grid::services::position::GridLayoutSnapshot;
use calendar_grid::utils::date::{end_of_day, start_of_day, week_dates};
use calendar_grid::{CalendarDateTime, CalendarEvent, GridOptions, TimeGridData};
use chrono::{Duration, TimeZone};
use chrono_tz::Europe::London;

const DEFAULT_OPTIONS: &str = r#"
[week]
start_day_of_week = 1
hour_start = 8
hour_end = 20
narrow_weekend = true
collapse_duplicate_events = true
"#;

fn main() -> Result<()> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => GridOptions::load(path)?,
        None => GridOptions::from_toml_str(DEFAULT_OPTIONS)?,
    };

    let monday = London
        .with_ymd_and_hms(2025, 3, 24, 0, 0, 0)
        .single()
        .context("Demo week start is not a valid London time")?;
    let at = |day: i64, hour: u32| monday + Duration::days(day) + Duration::hours(i64::from(hour));
    let event = |id: u64, calendar: &str, title: &str, start: CalendarDateTime, hours: i64| {
        CalendarEvent::builder()
            .id(id)
            .calendar_id(calendar)
            .title(title)
            .start(start)
            .end(start + Duration::hours(hours))
            .build()
            .map_err(anyhow::Error::msg)
    };

    let data = CalendarData::new([
        event(1, "work", "Planning", at(0, 9), 2)?,
        event(2, "team", "Planning", at(0, 9), 2)?,
        event(3, "work", "1:1", at(0, 10), 1)?,
        event(4, "work", "Release", at(2, 18), 16)?,
        event(5, "home", "Gym", at(4, 7), 2)?,
    ]);

    let week = week_dates(monday, options.week.start_day_of_week, options.week.workweek);
    let grid = TimeGridData::from_week_options(&week, &options.week)?;
    let map = week_view_events(
        &week,
        &data,
        &options.week,
        start_of_day(week[0]),
        end_of_day(week[week.len() - 1]),
    )?;
    let collapse = CollapseDuplicates::from_flag(options.week.collapse_duplicate_events);
    let columns = layout_time_grid(&grid, &map.time, None, &collapse);

    println!("=== Grid ===");
    println!("{}", serde_json::to_string_pretty(&grid.columns)?);
    println!("\n=== Events per column ===");
    for (column, models) in grid.columns.iter().zip(&columns) {
        println!("{}", column.date.format("%a %d %b"));
        for model in models {
            println!(
                "  {:<10} top {:>6.2}%  height {:>6.2}%  left {:>6.2}%  width {:>6.2}%{}",
                model.event.title,
                model.top,
                model.height,
                model.left,
                model.width,
                if model.collapsed { "  (collapsed)" } else { "" }
            );
        }
    }

    let snapshot = GridLayoutSnapshot::for_time_grid(
        &grid,
        Some(ContainerRect::new(60.0, 120.0, 1200.0, 960.0)),
        options.week.narrow_weekend,
        options.week.start_day_of_week,
    );
    let pointer = PointerPosition::new(420.0, 300.0);
    println!("\n=== Pointer ({}, {}) ===", pointer.client_x, pointer.client_y);
    match snapshot.find_position(pointer).and_then(|position| grid.date_at(position)) {
        Some(date) => println!("  {}", date.format("%a %d %b %H:%M")),
        None => println!("  outside the grid"),
    }

    Ok(())
}
