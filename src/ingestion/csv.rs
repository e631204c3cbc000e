//! CSV ingestion of trip files.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{LoadError, LoadResult};
use crate::types::{Columns, Dataset, TripRecord};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every trip file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// One CSV row as text, keyed by header name. Optional columns default to `None` when the file
/// has no such header; empty cells also come through as `None`.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Ingest a trip CSV file into an in-memory [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain [`REQUIRED_COLUMNS`] (order can differ, extra columns are ignored).
/// - `End Time`, `Gender` and `Birth Year` are optional; their presence is recorded in
///   [`Dataset::columns`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> LoadResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Ingest trips from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<Dataset> {
    let headers = rdr.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h.trim() == name);

    for column in REQUIRED_COLUMNS {
        if !has(column) {
            return Err(LoadError::SchemaMismatch {
                message: format!(
                    "missing required column '{column}'. headers={:?}",
                    headers.iter().collect::<Vec<_>>()
                ),
            });
        }
    }

    let columns = Columns {
        end_time: has(END_TIME),
        gender: has(GENDER),
        birth_year: has(BIRTH_YEAR),
    };

    let mut records = Vec::new();
    for (row_idx0, result) in rdr.deserialize::<RawTrip>().enumerate() {
        // 1-based for users, +1 again because the header is row 1.
        let user_row = row_idx0 + 2;
        let raw = result?;
        records.push(to_record(row_idx0, user_row, raw)?);
    }

    Ok(Dataset::new(columns, records))
}

fn to_record(source_row: usize, user_row: usize, raw: RawTrip) -> LoadResult<TripRecord> {
    let start_time = parse_timestamp(user_row, START_TIME, &raw.start_time)?;
    let duration_ms = parse_duration_ms(user_row, &raw.trip_duration)?;

    let mut record = TripRecord::new(
        source_row,
        start_time,
        raw.start_station.trim(),
        raw.end_station.trim(),
        0,
    )
    .with_duration_ms(duration_ms);

    // End time is only displayed; an unreadable value leaves the cell empty.
    if let Some(end) = non_empty(raw.end_time.as_deref()) {
        match parse_timestamp(user_row, END_TIME, end) {
            Ok(end_time) => record = record.with_end_time(end_time),
            Err(err) => tracing::debug!(%err, "ignoring end time"),
        }
    }
    if let Some(user_type) = non_empty(raw.user_type.as_deref()) {
        record = record.with_user_type(user_type);
    }
    if let Some(gender) = non_empty(raw.gender.as_deref()) {
        record = record.with_gender(gender);
    }
    if let Some(year) = non_empty(raw.birth_year.as_deref()) {
        record = record.with_birth_year(parse_birth_year(user_row, year)?);
    }

    Ok(record)
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_error(row: usize, column: &str, raw: &str, message: impl Into<String>) -> LoadError {
    LoadError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.into(),
    }
}

fn parse_timestamp(row: usize, column: &str, raw: &str) -> LoadResult<NaiveDateTime> {
    let trimmed = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            parse_error(row, column, raw, "expected timestamp like 2017-01-01 09:07:57")
        })
}

/// Durations may be written as `776` or `776.4`; kept to the millisecond.
fn parse_duration_ms(row: usize, raw: &str) -> LoadResult<u64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| parse_error(row, TRIP_DURATION, raw, e.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        let message = "expected a non-negative number of seconds";
        return Err(parse_error(row, TRIP_DURATION, raw, message));
    }
    Ok((value * 1000.0).round() as u64)
}

/// Birth years are integers, though some exports write them as `1989.0`.
fn parse_birth_year(row: usize, raw: &str) -> LoadResult<i32> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 && v.abs() <= f64::from(i32::MAX) => {
            Ok(v as i32)
        }
        Ok(_) => Err(parse_error(row, BIRTH_YEAR, raw, "expected a whole year")),
        Err(e) => Err(parse_error(row, BIRTH_YEAR, raw, e.to_string())),
    }
}
