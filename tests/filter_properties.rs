//! Property-based tests for the filter stage.

use bikeshare_explorer::config::{weekday_name, City, FilterCriteria, FILTER_MONTHS, WEEKDAYS};
use bikeshare_explorer::processing::filter;
use bikeshare_explorer::types::{Columns, Dataset, TripRecord};
use chrono::{DateTime, Month, Weekday};
use proptest::prelude::*;

prop_compose! {
    fn arb_trip()(
        // 2017-01-01 to 2018-01-01
        secs in 1_483_228_800i64..1_514_764_800i64,
        start in prop::sample::select(vec!["A", "B", "C"]),
        end in prop::sample::select(vec!["A", "B", "C"]),
        duration in 0u64..10_000,
    ) -> TripRecord {
        let at = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        TripRecord::new(0, at, start, end, duration)
    }
}

prop_compose! {
    fn arb_dataset()(trips in prop::collection::vec(arb_trip(), 0..200)) -> Dataset {
        let records = trips
            .into_iter()
            .enumerate()
            .map(|(i, mut t)| {
                t.source_row = i;
                t
            })
            .collect();
        Dataset::new(Columns::default(), records)
    }
}

fn arb_month() -> impl Strategy<Value = Month> {
    prop::sample::select(FILTER_MONTHS.to_vec())
}

fn arb_weekday() -> impl Strategy<Value = Weekday> {
    prop::sample::select(WEEKDAYS.to_vec())
}

fn rows(ds: &Dataset) -> Vec<usize> {
    ds.records.iter().map(|r| r.source_row).collect()
}

proptest! {
    #[test]
    fn all_all_is_identity(ds in arb_dataset()) {
        prop_assert_eq!(filter(&ds, &FilterCriteria::all(City::Chicago)), ds);
    }

    #[test]
    fn month_filter_is_sound_and_complete(ds in arb_dataset(), month in arb_month()) {
        let out = filter(&ds, &FilterCriteria::all(City::Chicago).with_month(month));
        let wanted = month.number_from_month();

        prop_assert!(out.records.iter().all(|r| r.month() == wanted));
        let expected = ds.records.iter().filter(|r| r.month() == wanted).count();
        prop_assert_eq!(out.row_count(), expected);
    }

    #[test]
    fn weekday_filter_matches_names(ds in arb_dataset(), day in arb_weekday()) {
        let out = filter(&ds, &FilterCriteria::all(City::Washington).with_day(day));
        let name = weekday_name(day).to_uppercase();

        prop_assert!(out
            .records
            .iter()
            .all(|r| weekday_name(r.weekday()).eq_ignore_ascii_case(&name)));
        let expected = ds.records.iter().filter(|r| r.weekday() == day).count();
        prop_assert_eq!(out.row_count(), expected);
    }

    #[test]
    fn month_and_weekday_commute(ds in arb_dataset(), month in arb_month(), day in arb_weekday()) {
        let by_month = FilterCriteria::all(City::NewYorkCity).with_month(month);
        let by_day = FilterCriteria::all(City::NewYorkCity).with_day(day);

        let month_then_day = filter(&filter(&ds, &by_month), &by_day);
        let day_then_month = filter(&filter(&ds, &by_day), &by_month);
        let both = filter(&ds, &by_month.with_day(day));

        prop_assert_eq!(rows(&month_then_day), rows(&day_then_month));
        prop_assert_eq!(rows(&month_then_day), rows(&both));
    }

    #[test]
    fn filtering_preserves_relative_order(ds in arb_dataset(), day in arb_weekday()) {
        let out = filter(&ds, &FilterCriteria::all(City::Chicago).with_day(day));
        let kept = rows(&out);
        prop_assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }
}
