//! Dataset loading.
//!
//! Most callers go through a [`TripSource`]; [`CsvTripSource`] reads the city files from disk.
//! The CSV parser itself lives in [`csv`] and can be used directly on any reader.

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{CsvTripSource, TripSource};
pub use observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver};
