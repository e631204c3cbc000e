//! Core data model: trip records and the in-memory dataset they live in.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One bike-share trip.
///
/// Calendar fields (month, weekday, hour) are derived from the start timestamp when the record is
/// built and cannot drift from it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRecord {
    /// 0-based data row in the source file (header excluded).
    pub source_row: usize,
    start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub start_station: String,
    pub end_station: String,
    /// Trip length in milliseconds; files may record fractional seconds.
    pub trip_duration_ms: u64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    month: u32,
    weekday: Weekday,
    hour: u32,
}

impl TripRecord {
    /// Create a record with the always-present fields; optional fields start empty.
    pub fn new(
        source_row: usize,
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        trip_duration_secs: u64,
    ) -> Self {
        Self {
            source_row,
            start_time,
            end_time: None,
            start_station: start_station.into(),
            end_station: end_station.into(),
            trip_duration_ms: trip_duration_secs.saturating_mul(1000),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_duration_ms(mut self, trip_duration_ms: u64) -> Self {
        self.trip_duration_ms = trip_duration_ms;
        self
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_user_type(mut self, user_type: impl Into<String>) -> Self {
        self.user_type = Some(user_type.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = Some(birth_year);
        self
    }

    /// Trip length rounded to the nearest whole second.
    pub fn trip_duration_secs(&self) -> u64 {
        self.trip_duration_ms.saturating_add(500) / 1000
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Month number of the start timestamp (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Hour of the start timestamp (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }
}

/// Which optional columns the source file carried.
///
/// Decided once at load time; statistics consult this instead of probing individual records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub end_time: bool,
    pub gender: bool,
    pub birth_year: bool,
}

/// In-memory trip dataset for one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Optional-column presence, shared by every filtered view of this dataset.
    pub columns: Columns,
    /// Records in source order.
    pub records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(columns: Columns, records: Vec<TripRecord>) -> Self {
        Self { columns, records }
    }

    /// Number of records in the dataset.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a new dataset containing only records that match `predicate`.
    ///
    /// The returned dataset keeps the original column set and relative order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self {
            columns: self.columns,
            records,
        }
    }

    /// Records in `[start, start + len)`, clamped to the dataset bounds.
    pub fn window(&self, start: usize, len: usize) -> &[TripRecord] {
        let start = start.min(self.records.len());
        let end = start.saturating_add(len).min(self.records.len());
        &self.records[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 15, 0)
            .unwrap()
    }

    #[test]
    fn derived_fields_follow_start_time() {
        // 2017-06-23 was a Friday.
        let rec = TripRecord::new(0, ts(2017, 6, 23, 15), "A", "B", 321);
        assert_eq!(rec.month(), 6);
        assert_eq!(rec.weekday(), Weekday::Fri);
        assert_eq!(rec.hour(), 15);
        assert_eq!(rec.trip_duration_ms, 321_000);
    }

    #[test]
    fn fractional_durations_round_to_nearest_second() {
        let rec = TripRecord::new(0, ts(2017, 6, 21, 8), "A", "B", 0).with_duration_ms(489_066);
        assert_eq!(rec.trip_duration_secs(), 489);
        let rec = rec.with_duration_ms(402_549);
        assert_eq!(rec.trip_duration_secs(), 403);
    }

    #[test]
    fn filter_rows_keeps_columns_and_order() {
        let columns = Columns {
            end_time: true,
            gender: true,
            birth_year: false,
        };
        let ds = Dataset::new(
            columns,
            vec![
                TripRecord::new(0, ts(2017, 1, 2, 8), "A", "B", 10),
                TripRecord::new(1, ts(2017, 2, 2, 9), "B", "C", 20),
                TripRecord::new(2, ts(2017, 1, 3, 10), "C", "A", 30),
            ],
        );

        let out = ds.filter_rows(|r| r.month() == 1);
        assert_eq!(out.columns, columns);
        assert_eq!(
            out.records.iter().map(|r| r.source_row).collect::<Vec<_>>(),
            vec![0, 2]
        );
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }

    #[test]
    fn window_clamps_to_bounds() {
        let records = (0..7)
            .map(|i| TripRecord::new(i, ts(2017, 3, 1, 12), "A", "B", 60))
            .collect();
        let ds = Dataset::new(Columns::default(), records);
        assert_eq!(ds.window(0, 5).len(), 5);
        assert_eq!(ds.window(5, 5).len(), 2);
        assert!(ds.window(10, 5).is_empty());
    }
}
