//! In-memory transformations over a loaded [`crate::types::Dataset`].
//!
//! - [`filter()`]: narrow trips to a month and/or weekday
//! - [`reduce`]: mode, value counts, min, max, sum and mean with explicit "no data" results
//!
//! ## Example: filter → reduce
//!
//! ```rust
//! use bikeshare_explorer::config::{City, FilterCriteria};
//! use bikeshare_explorer::processing::{filter, mode};
//! use bikeshare_explorer::types::{Columns, Dataset, TripRecord};
//! use chrono::{Month, NaiveDate};
//!
//! let at = |d| NaiveDate::from_ymd_opt(2017, 1, d).unwrap().and_hms_opt(8, 0, 0).unwrap();
//! let ds = Dataset::new(
//!     Columns::default(),
//!     vec![
//!         TripRecord::new(0, at(2), "Canal St", "Clark St", 300),
//!         TripRecord::new(1, at(3), "Lake Shore", "Clark St", 420),
//!     ],
//! );
//!
//! let january = filter(&ds, &FilterCriteria::all(City::Chicago).with_month(Month::January));
//! let end = mode(january.records.iter().map(|t| t.end_station.as_str()));
//! assert_eq!(end, Some("Clark St"));
//! ```

pub mod filter;
pub mod reduce;

pub use filter::filter;
pub use reduce::{max, mean, min, mode, sum, value_counts};
