//! Most common month, weekday and start hour.

use std::time::Duration;

use chrono::Weekday;

use crate::config::{month_name, weekday_name};
use crate::processing::mode;
use crate::types::Dataset;

use super::timed;

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    /// Month number (1-12).
    pub most_common_month: Option<u32>,
    pub most_common_day: Option<Weekday>,
    /// Hour of day (0-23).
    pub most_common_hour: Option<u32>,
    pub elapsed: Duration,
}

impl TimeStats {
    pub fn month_name(&self) -> Option<&'static str> {
        self.most_common_month.and_then(month_name)
    }

    pub fn day_name(&self) -> Option<&'static str> {
        self.most_common_day.map(weekday_name)
    }
}

pub fn time_stats(dataset: &Dataset) -> TimeStats {
    let trips = &dataset.records;
    let ((month, day, hour), elapsed) = timed("time", trips.len(), || {
        (
            mode(trips.iter().map(|t| t.month())),
            mode(trips.iter().map(|t| t.weekday())),
            mode(trips.iter().map(|t| t.hour())),
        )
    });

    TimeStats {
        most_common_month: month,
        most_common_day: day,
        most_common_hour: hour,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Columns, TripRecord};
    use chrono::NaiveDate;

    fn trip(m: u32, d: u32, h: u32) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, m, d)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap();
        TripRecord::new(0, start, "A", "B", 60)
    }

    #[test]
    fn reports_modes_of_derived_fields() {
        let ds = Dataset::new(
            Columns::default(),
            vec![
                trip(6, 23, 17), // Friday
                trip(6, 24, 17), // Saturday
                trip(5, 26, 8),  // Friday
            ],
        );
        let stats = time_stats(&ds);
        assert_eq!(stats.most_common_month, Some(6));
        assert_eq!(stats.month_name(), Some("June"));
        assert_eq!(stats.most_common_day, Some(Weekday::Fri));
        assert_eq!(stats.day_name(), Some("Friday"));
        assert_eq!(stats.most_common_hour, Some(17));
    }

    #[test]
    fn empty_dataset_has_no_modes() {
        let stats = time_stats(&Dataset::new(Columns::default(), Vec::new()));
        assert_eq!(stats.most_common_month, None);
        assert_eq!(stats.month_name(), None);
        assert_eq!(stats.most_common_day, None);
        assert_eq!(stats.most_common_hour, None);
    }
}
