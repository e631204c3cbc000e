//! `bikeshare-explorer` loads bike-share trip logs for Chicago, New York City and Washington,
//! narrows them to a month and/or weekday, and reports descriptive statistics.
//!
//! The pipeline is load → filter → summarize:
//!
//! - [`ingestion`]: read a city's CSV file into an in-memory [`types::Dataset`], deriving month,
//!   weekday and hour from each trip's start time
//! - [`processing`]: [`processing::filter()`] plus the reductions the statistics build on
//! - [`stats`]: travel-time, station, duration and rider reports
//! - [`paginator`]: fixed-size paging over the raw trips
//! - [`session`]: the interactive prompt loop tying it all together
//!
//! ## Example
//!
//! ```no_run
//! use bikeshare_explorer::config::{City, ExplorerConfig, FilterCriteria};
//! use bikeshare_explorer::ingestion::CsvTripSource;
//! use bikeshare_explorer::session::load_filtered;
//! use bikeshare_explorer::stats::duration_stats;
//! use chrono::{Month, Weekday};
//!
//! # fn main() -> Result<(), bikeshare_explorer::ExploreError> {
//! let source = CsvTripSource::new(ExplorerConfig::default().with_data_dir("data"));
//! let criteria = FilterCriteria::all(City::Chicago)
//!     .with_month(Month::March)
//!     .with_day(Weekday::Fri);
//!
//! let trips = load_filtered(&source, &criteria)?;
//! let durations = duration_stats(&trips);
//! println!("rows={} total={:?}", trips.row_count(), durations.total_seconds);
//! # Ok(())
//! # }
//! ```
//!
//! ### "Most common" ties
//!
//! Every mode in the crate picks the highest count and, among equal counts, the value that
//! appears first in dataset order. Results are therefore stable for a given input.

pub mod config;
pub mod error;
pub mod ingestion;
pub mod paginator;
pub mod processing;
pub mod prompt;
pub mod report;
pub mod session;
pub mod stats;
pub mod types;

pub use error::{ExploreError, LoadError, LoadResult};
