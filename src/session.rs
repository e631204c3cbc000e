//! The interactive query loop: choose filters, load, report, browse, repeat.

use std::io::{BufRead, Write};

use crate::config::{City, DayFilter, ExplorerConfig, FilterCriteria, MonthFilter};
use crate::error::ExploreError;
use crate::ingestion::TripSource;
use crate::paginator::{PageAction, PageOutcome, Paginator};
use crate::processing::filter;
use crate::prompt::{Console, DEFAULT_EMPTY_MESSAGE};
use crate::report;
use crate::stats;
use crate::types::Dataset;

const CITY_PROMPT: &str = "Enter city (Chicago, New York City, Washington): ";
const MONTH_PROMPT: &str = "Enter month (all, January, February, ..., June): ";
const DAY_PROMPT: &str = "Enter day of week (all, Monday, Tuesday, ..., Sunday): ";
const RAW_EMPTY_MESSAGE: &str = "Please enter 'next', 'prev', or 'no'.";
const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no: ";

/// Load `criteria.city` from `source` and narrow it to the chosen month and weekday.
pub fn load_filtered<S>(source: &S, criteria: &FilterCriteria) -> Result<Dataset, ExploreError>
where
    S: TripSource + ?Sized,
{
    let dataset = source
        .load(criteria.city)
        .map_err(|source| ExploreError::DataUnavailable {
            city: criteria.city,
            source,
        })?;
    Ok(filter(&dataset, criteria))
}

/// One interactive session over a console.
pub struct Session<'a, S: ?Sized, R, W> {
    source: &'a S,
    config: &'a ExplorerConfig,
    console: Console<R, W>,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    pub fn new(source: &'a S, config: &'a ExplorerConfig, console: Console<R, W>) -> Self {
        Self {
            source,
            config,
            console,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run queries until the user declines to restart.
    ///
    /// Data-loading failures are reported and lead back to filter selection. Only console
    /// failures end the session with an error.
    pub fn run(&mut self) -> Result<(), ExploreError> {
        writeln!(self.console.output(), "Hello! Let's explore some US bikeshare data!")?;
        loop {
            let criteria = self.choose_filters()?;

            let dataset = match load_filtered(self.source, &criteria) {
                Ok(dataset) => dataset,
                Err(ExploreError::DataUnavailable { city, source }) => {
                    tracing::warn!(%city, error = %source, "returning to filter selection");
                    let out = self.console.output();
                    if source.is_not_found() {
                        writeln!(out, "Error: Data file for {city} not found.")?;
                    } else {
                        writeln!(out, "Error loading data for {city}: {source}")?;
                    }
                    continue;
                }
                Err(err) => return Err(err),
            };
            tracing::info!(?criteria, rows = dataset.row_count(), "running query");

            self.show_statistics(&dataset)?;
            self.browse_raw_data(&dataset)?;

            let again = self.console.choose(
                RESTART_PROMPT,
                &["yes", "no"],
                DEFAULT_EMPTY_MESSAGE,
                |key| Some(key == "yes"),
            )?;
            if !again {
                return Ok(());
            }
        }
    }

    /// Ask for city, month and weekday.
    pub fn choose_filters(&mut self) -> Result<FilterCriteria, ExploreError> {
        let city = self.console.choose(
            CITY_PROMPT,
            &City::keys(),
            DEFAULT_EMPTY_MESSAGE,
            City::from_key,
        )?;
        let month = self.console.choose(
            MONTH_PROMPT,
            &MonthFilter::keys(),
            DEFAULT_EMPTY_MESSAGE,
            MonthFilter::from_key,
        )?;
        let day = self.console.choose(
            DAY_PROMPT,
            &DayFilter::keys(),
            DEFAULT_EMPTY_MESSAGE,
            DayFilter::from_key,
        )?;
        report::separator(self.console.output())?;

        Ok(FilterCriteria { city, month, day })
    }

    pub fn show_statistics(&mut self, dataset: &Dataset) -> Result<(), ExploreError> {
        let out = self.console.output();
        report::render_time_stats(out, &stats::time_stats(dataset))?;
        report::render_station_stats(out, &stats::station_stats(dataset))?;
        report::render_duration_stats(out, &stats::duration_stats(dataset))?;
        report::render_user_stats(out, &stats::user_stats(dataset))?;
        Ok(())
    }

    /// Page through `dataset` until the user exits.
    pub fn browse_raw_data(&mut self, dataset: &Dataset) -> Result<(), ExploreError> {
        let mut pager = Paginator::new(dataset, self.config.page_size);
        if !pager.begin() {
            writeln!(self.console.output(), "No data available to display.")?;
            return Ok(());
        }

        let size = self.config.page_size;
        let prompt = format!(
            "\nShow raw data? Enter 'next' (next {size} rows), \
             'prev' (previous {size} rows), or 'no' (exit): "
        );
        loop {
            let action = self.console.choose(
                &prompt,
                &PageAction::KEYS,
                RAW_EMPTY_MESSAGE,
                PageAction::from_key,
            )?;

            match pager.apply(action) {
                PageOutcome::Page { rows, .. } => {
                    report::render_page(self.console.output(), dataset.columns, rows)?;
                }
                PageOutcome::NoMoreData => {
                    writeln!(self.console.output(), "No more data to display.")?;
                }
                PageOutcome::Finished => return Ok(()),
            }
        }
    }
}
