//! Most popular start station, end station and trip.

use std::time::Duration;

use crate::processing::mode;
use crate::types::Dataset;

use super::timed;

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// Ordered (start, end) pair; A→B and B→A are different trips.
    pub most_common_trip: Option<(String, String)>,
    pub elapsed: Duration,
}

impl StationStats {
    /// The most common trip rendered as "A to B".
    pub fn trip_label(&self) -> Option<String> {
        self.most_common_trip
            .as_ref()
            .map(|(from, to)| format!("{from} to {to}"))
    }
}

pub fn station_stats(dataset: &Dataset) -> StationStats {
    let trips = &dataset.records;
    let ((start, end, pair), elapsed) = timed("station", trips.len(), || {
        (
            mode(trips.iter().map(|t| t.start_station.as_str())),
            mode(trips.iter().map(|t| t.end_station.as_str())),
            mode(
                trips
                    .iter()
                    .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
            ),
        )
    });

    StationStats {
        most_common_start: start.map(str::to_owned),
        most_common_end: end.map(str::to_owned),
        most_common_trip: pair.map(|(from, to)| (from.to_owned(), to.to_owned())),
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Columns, TripRecord};
    use chrono::NaiveDate;

    fn trip(from: &str, to: &str) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, 4, 3)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        TripRecord::new(0, start, from, to, 60)
    }

    #[test]
    fn trip_direction_matters() {
        let ds = Dataset::new(
            Columns::default(),
            vec![
                trip("A", "B"),
                trip("B", "A"),
                trip("C", "A"),
                trip("C", "A"),
            ],
        );
        let stats = station_stats(&ds);
        assert_eq!(stats.most_common_start.as_deref(), Some("C"));
        assert_eq!(stats.most_common_end.as_deref(), Some("A"));
        assert_eq!(stats.trip_label().as_deref(), Some("C to A"));
    }

    #[test]
    fn station_ties_go_to_first_seen() {
        let ds = Dataset::new(
            Columns::default(),
            vec![
                trip("Clark St", "X"),
                trip("Canal St", "Y"),
                trip("Canal St", "X"),
                trip("Clark St", "Y"),
            ],
        );
        for _ in 0..10 {
            let stats = station_stats(&ds);
            assert_eq!(stats.most_common_start.as_deref(), Some("Clark St"));
            assert_eq!(stats.most_common_end.as_deref(), Some("X"));
            assert_eq!(stats.trip_label().as_deref(), Some("Clark St to X"));
        }
    }

    #[test]
    fn empty_dataset_has_no_stations() {
        let stats = station_stats(&Dataset::new(Columns::default(), Vec::new()));
        assert_eq!(stats.most_common_start, None);
        assert_eq!(stats.most_common_end, None);
        assert_eq!(stats.trip_label(), None);
    }
}
