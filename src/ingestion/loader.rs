//! City-level loading entrypoint.
//!
//! [`TripSource`] is the seam between the session loop and wherever trips come from. The
//! production implementation, [`CsvTripSource`], resolves a [`City`] to its file under the
//! configured data directory, ingests it, and reports the outcome to an optional
//! [`LoadObserver`].

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{City, ExplorerConfig};
use crate::error::LoadResult;
use crate::types::Dataset;

use super::csv::ingest_csv_from_path;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Anything that can produce the full trip dataset for a city.
pub trait TripSource {
    /// Load every trip for `city`, with derived calendar fields populated.
    fn load(&self, city: City) -> LoadResult<Dataset>;
}

/// Loads `<data_dir>/<city file>.csv`.
#[derive(Clone)]
pub struct CsvTripSource {
    config: ExplorerConfig,
    observer: Option<Arc<dyn LoadObserver>>,
    alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for CsvTripSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvTripSource")
            .field("data_dir", &self.config.data_dir)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl CsvTripSource {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }

    /// Attach an observer for load outcomes.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Severity at which failures are also reported through `on_alert`.
    pub fn with_alert_threshold(mut self, severity: LoadSeverity) -> Self {
        self.alert_at_or_above = severity;
        self
    }
}

impl TripSource for CsvTripSource {
    fn load(&self, city: City) -> LoadResult<Dataset> {
        let ctx = LoadContext {
            city,
            path: self.config.city_path(city),
        };

        let started = Instant::now();
        let result = ingest_csv_from_path(&ctx.path);
        tracing::debug!(%city, elapsed = ?started.elapsed(), ok = result.is_ok(), "read trip file");

        if let Some(obs) = self.observer.as_ref() {
            match &result {
                Ok(ds) => obs.on_success(&ctx, LoadStats { rows: ds.row_count() }),
                Err(e) => {
                    let sev = LoadSeverity::for_error(e);
                    obs.on_failure(&ctx, sev, e);
                    if sev >= self.alert_at_or_above {
                        obs.on_alert(&ctx, sev, e);
                    }
                }
            }
        }

        result
    }
}
