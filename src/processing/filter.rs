//! Narrowing a [`crate::types::Dataset`] to the chosen month and weekday.

use crate::config::{DayFilter, FilterCriteria};
use crate::types::Dataset;

/// Returns a new [`Dataset`] holding only the trips that match `criteria`.
///
/// Month and weekday restrictions combine with AND; `All` leaves that dimension unrestricted.
/// The city in `criteria` is not consulted here: the dataset already belongs to one city.
/// The input is left untouched and relative order is preserved. An empty result is valid.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    let month = criteria.month.month_number();
    let day = match criteria.day {
        DayFilter::All => None,
        DayFilter::Only(day) => Some(day),
    };

    if month.is_none() && day.is_none() {
        return dataset.clone();
    }

    let out = dataset.filter_rows(|trip| {
        month.is_none_or(|m| trip.month() == m) && day.is_none_or(|d| trip.weekday() == d)
    });
    tracing::debug!(
        kept = out.row_count(),
        total = dataset.row_count(),
        ?criteria,
        "filtered trips"
    );
    out
}
