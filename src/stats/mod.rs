//! Statistics engine.
//!
//! Four independent, read-only passes over a (possibly empty) filtered [`Dataset`]. Every
//! statistic that has no defined value on empty input is an `Option`, so "no data" is reported
//! explicitly rather than as a zero. Each report carries the wall-clock time it took to compute.
//!
//! "Most common" values use [`crate::processing::mode`]: the highest count wins and ties go to
//! the value seen first in dataset order.

mod duration;
mod station;
mod time;
mod user;

use std::time::{Duration, Instant};

pub use duration::{duration_stats, DurationStats};
pub use station::{station_stats, StationStats};
pub use time::{time_stats, TimeStats};
pub use user::{user_stats, BirthYearStats, ColumnStat, UserStats};

use crate::types::Dataset;

/// All four reports for one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub time: TimeStats,
    pub station: StationStats,
    pub duration: DurationStats,
    pub user: UserStats,
}

/// Run every statistic over `dataset`.
pub fn summarize(dataset: &Dataset) -> Summary {
    Summary {
        time: time_stats(dataset),
        station: station_stats(dataset),
        duration: duration_stats(dataset),
        user: user_stats(dataset),
    }
}

fn timed<T>(name: &'static str, rows: usize, f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let out = f();
    let elapsed = started.elapsed();
    tracing::debug!(stat = name, rows, ?elapsed, "computed statistic");
    (out, elapsed)
}
