//! User type, gender and birth year breakdowns.

use std::time::Duration;

use crate::processing::{max, min, mode, value_counts};
use crate::types::Dataset;

use super::timed;

/// A statistic over an optional column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnStat<T> {
    /// The city's file has no such column.
    NotRecorded,
    Recorded(T),
}

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Count per user type, most frequent first. Empty when no trip has a user type.
    pub user_types: Vec<(String, usize)>,
    /// Count per gender, most frequent first.
    pub genders: ColumnStat<Vec<(String, usize)>>,
    /// `Recorded(None)` when the column exists but no trip carries a birth year.
    pub birth_years: ColumnStat<Option<BirthYearStats>>,
    pub elapsed: Duration,
}

pub fn user_stats(dataset: &Dataset) -> UserStats {
    let trips = &dataset.records;
    let columns = dataset.columns;

    let ((user_types, genders, birth_years), elapsed) = timed("user", trips.len(), || {
        let user_types = owned(value_counts(
            trips.iter().filter_map(|t| t.user_type.as_deref()),
        ));

        let genders = if columns.gender {
            ColumnStat::Recorded(owned(value_counts(
                trips.iter().filter_map(|t| t.gender.as_deref()),
            )))
        } else {
            ColumnStat::NotRecorded
        };

        let birth_years = if columns.birth_year {
            ColumnStat::Recorded(birth_year_stats(trips.iter().filter_map(|t| t.birth_year)))
        } else {
            ColumnStat::NotRecorded
        };

        (user_types, genders, birth_years)
    });

    UserStats {
        user_types,
        genders,
        birth_years,
        elapsed,
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, n)| (value.to_owned(), n))
        .collect()
}

fn birth_year_stats<I>(years: I) -> Option<BirthYearStats>
where
    I: Iterator<Item = i32> + Clone,
{
    Some(BirthYearStats {
        earliest: min(years.clone())?,
        most_recent: max(years.clone())?,
        most_common: mode(years)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Columns, TripRecord};
    use chrono::NaiveDate;

    fn trip(user_type: &str) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, 2, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        TripRecord::new(0, start, "A", "B", 60).with_user_type(user_type)
    }

    fn full_columns() -> Columns {
        Columns {
            end_time: true,
            gender: true,
            birth_year: true,
        }
    }

    #[test]
    fn user_types_count_descending_with_first_seen_ties() {
        let ds = Dataset::new(
            Columns::default(),
            vec![
                trip("Customer"),
                trip("Subscriber"),
                trip("Subscriber"),
                trip("Dependent"),
                trip("Customer"),
            ],
        );
        let stats = user_stats(&ds);
        assert_eq!(
            stats.user_types,
            vec![
                ("Customer".to_string(), 2),
                ("Subscriber".to_string(), 2),
                ("Dependent".to_string(), 1),
            ]
        );
    }

    #[test]
    fn missing_demographic_columns_are_not_recorded() {
        let ds = Dataset::new(Columns::default(), vec![trip("Subscriber")]);
        let stats = user_stats(&ds);
        assert_eq!(stats.genders, ColumnStat::NotRecorded);
        assert_eq!(stats.birth_years, ColumnStat::NotRecorded);
    }

    #[test]
    fn demographics_skip_blank_cells() {
        let ds = Dataset::new(
            full_columns(),
            vec![
                trip("Subscriber").with_gender("Male").with_birth_year(1985),
                trip("Subscriber").with_gender("Female").with_birth_year(1992),
                trip("Customer"),
                trip("Subscriber").with_gender("Male").with_birth_year(1992),
                trip("Subscriber").with_birth_year(1961),
            ],
        );
        let stats = user_stats(&ds);
        assert_eq!(
            stats.genders,
            ColumnStat::Recorded(vec![("Male".to_string(), 2), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            ColumnStat::Recorded(Some(BirthYearStats {
                earliest: 1961,
                most_recent: 1992,
                most_common: 1992,
            }))
        );
    }

    #[test]
    fn empty_dataset_with_columns_reports_no_data() {
        let stats = user_stats(&Dataset::new(full_columns(), Vec::new()));
        assert!(stats.user_types.is_empty());
        assert_eq!(stats.genders, ColumnStat::Recorded(Vec::new()));
        assert_eq!(stats.birth_years, ColumnStat::Recorded(None));
    }
}
