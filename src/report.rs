//! Console rendering for statistics reports and raw-data pages.

use std::fmt::Display;
use std::io::{self, Write};
use std::time::Duration;

use prettytable::{format, Cell, Row, Table};

use crate::ingestion::csv::{
    BIRTH_YEAR, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, TRIP_DURATION, USER_TYPE,
};
use crate::stats::{ColumnStat, DurationStats, StationStats, TimeStats, UserStats};
use crate::types::{Columns, TripRecord};

/// Shown in place of a statistic that is undefined on an empty selection.
pub const NO_DATA: &str = "no data";

pub fn separator(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(40))
}

fn section_header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n=== {title} ===\n")
}

fn section_footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "Calculation took {:.3} seconds.", elapsed.as_secs_f64())?;
    separator(out)
}

fn or_no_data<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

pub fn render_time_stats(out: &mut impl Write, stats: &TimeStats) -> io::Result<()> {
    section_header(out, "Most Frequent Times of Travel")?;
    writeln!(out, "Most common month: {}", or_no_data(stats.month_name()))?;
    writeln!(out, "Most common day: {}", or_no_data(stats.day_name()))?;
    writeln!(out, "Most common start hour: {}", or_no_data(stats.most_common_hour))?;
    section_footer(out, stats.elapsed)
}

pub fn render_station_stats(out: &mut impl Write, stats: &StationStats) -> io::Result<()> {
    section_header(out, "Popular Stations and Trip")?;
    writeln!(
        out,
        "Most common start station: {}",
        or_no_data(stats.most_common_start.as_deref())
    )?;
    writeln!(
        out,
        "Most common end station: {}",
        or_no_data(stats.most_common_end.as_deref())
    )?;
    writeln!(out, "Most common trip: {}", or_no_data(stats.trip_label()))?;
    section_footer(out, stats.elapsed)
}

pub fn render_duration_stats(out: &mut impl Write, stats: &DurationStats) -> io::Result<()> {
    section_header(out, "Trip Duration")?;
    match stats.total_seconds {
        Some(total) => writeln!(out, "Total travel time: {total} seconds")?,
        None => writeln!(out, "Total travel time: {NO_DATA}")?,
    }
    match stats.mean_seconds {
        Some(mean) => writeln!(out, "Mean travel time: {mean:.2} seconds")?,
        None => writeln!(out, "Mean travel time: {NO_DATA}")?,
    }
    section_footer(out, stats.elapsed)
}

pub fn render_user_stats(out: &mut impl Write, stats: &UserStats) -> io::Result<()> {
    section_header(out, "User Statistics")?;

    writeln!(out, "User Type Counts:")?;
    render_counts(out, USER_TYPE, &stats.user_types)?;

    match &stats.genders {
        ColumnStat::Recorded(counts) => {
            writeln!(out, "\nGender Counts:")?;
            render_counts(out, GENDER, counts)?;
        }
        ColumnStat::NotRecorded => writeln!(out, "\nGender data not available for this city.")?,
    }

    match &stats.birth_years {
        ColumnStat::Recorded(Some(years)) => {
            writeln!(out, "\nEarliest birth year: {}", years.earliest)?;
            writeln!(out, "Most recent birth year: {}", years.most_recent)?;
            writeln!(out, "Most common birth year: {}", years.most_common)?;
        }
        ColumnStat::Recorded(None) => writeln!(out, "\nBirth year: {NO_DATA}")?,
        ColumnStat::NotRecorded => writeln!(out, "\nBirth year data not available for this city.")?,
    }

    section_footer(out, stats.elapsed)
}

fn render_counts(out: &mut impl Write, label: &str, counts: &[(String, usize)]) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "{NO_DATA}");
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(vec![Cell::new(label), Cell::new("Count")]));
    for (value, count) in counts {
        table.add_row(Row::new(vec![
            Cell::new(value),
            Cell::new(&count.to_string()).style_spec("r"),
        ]));
    }
    table.print(out)?;
    Ok(())
}

/// Print a window of raw trips. Optional columns appear only when the dataset has them.
pub fn render_page(out: &mut impl Write, columns: Columns, rows: &[TripRecord]) -> io::Result<()> {
    let mut titles = vec!["", START_TIME];
    if columns.end_time {
        titles.push(END_TIME);
    }
    titles.extend([TRIP_DURATION, START_STATION, END_STATION, USER_TYPE]);
    if columns.gender {
        titles.push(GENDER);
    }
    if columns.birth_year {
        titles.push(BIRTH_YEAR);
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(Row::new(titles.into_iter().map(Cell::new).collect()));

    for trip in rows {
        let mut cells = vec![
            Cell::new(&trip.source_row.to_string()),
            Cell::new(&trip.start_time().to_string()),
        ];
        if columns.end_time {
            cells.push(Cell::new(&optional(trip.end_time)));
        }
        cells.push(Cell::new(&seconds(trip.trip_duration_ms)).style_spec("r"));
        cells.push(Cell::new(&trip.start_station));
        cells.push(Cell::new(&trip.end_station));
        cells.push(Cell::new(&optional(trip.user_type.as_deref())));
        if columns.gender {
            cells.push(Cell::new(&optional(trip.gender.as_deref())));
        }
        if columns.birth_year {
            cells.push(Cell::new(&optional(trip.birth_year)));
        }
        table.add_row(Row::new(cells));
    }

    table.print(out)?;
    Ok(())
}

/// Whole seconds print without a fraction; anything else keeps the millisecond part.
fn seconds(ms: u64) -> String {
    if ms % 1000 == 0 {
        (ms / 1000).to_string()
    } else {
        format!("{:.3}", ms as f64 / 1000.0)
    }
}

fn optional<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
