//! Total and mean trip duration.

use std::time::Duration;

use crate::processing::{mean, sum};
use crate::types::Dataset;

use super::timed;

/// Trip duration aggregates, in seconds.
///
/// Both are computed from millisecond durations, so fractional seconds in the source file are
/// not lost before averaging. The total is rounded to the nearest second.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_seconds: Option<u64>,
    pub mean_seconds: Option<f64>,
    pub elapsed: Duration,
}

pub fn duration_stats(dataset: &Dataset) -> DurationStats {
    let trips = &dataset.records;
    let ((total, avg), elapsed) = timed("duration", trips.len(), || {
        (
            sum(trips.iter().map(|t| t.trip_duration_ms)),
            mean(trips.iter().map(|t| t.trip_duration_ms)),
        )
    });

    DurationStats {
        total_seconds: total.map(|ms| ms.saturating_add(500) / 1000),
        mean_seconds: avg.map(|ms| ms / 1000.0),
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Columns, TripRecord};
    use chrono::NaiveDate;

    fn dataset(durations: &[u64]) -> Dataset {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let records = durations
            .iter()
            .enumerate()
            .map(|(i, d)| TripRecord::new(i, start, "A", "B", *d))
            .collect();
        Dataset::new(Columns::default(), records)
    }

    #[test]
    fn sum_and_mean_of_three_trips() {
        let stats = duration_stats(&dataset(&[100, 200, 300]));
        assert_eq!(stats.total_seconds, Some(600));
        assert_eq!(stats.mean_seconds, Some(200.0));
    }

    #[test]
    fn fractional_seconds_survive_into_the_mean() {
        let start = NaiveDate::from_ymd_opt(2017, 6, 21)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let records = [489_066, 402_549, 637_251]
            .into_iter()
            .enumerate()
            .map(|(i, ms)| TripRecord::new(i, start, "A", "B", 0).with_duration_ms(ms))
            .collect();
        let stats = duration_stats(&Dataset::new(Columns::default(), records));
        assert_eq!(stats.total_seconds, Some(1529));
        let mean = stats.mean_seconds.unwrap();
        assert!((mean - 509.622).abs() < 1e-9, "mean was {mean}");
        assert_eq!(format!("{mean:.2}"), "509.62");
    }

    #[test]
    fn empty_dataset_reports_no_total() {
        let stats = duration_stats(&dataset(&[]));
        assert_eq!(stats.total_seconds, None);
        assert_eq!(stats.mean_seconds, None);
    }
}
