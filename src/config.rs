//! Static lookup tables and runtime configuration.
//!
//! The city, month and weekday tables are immutable and shared by value; nothing in the crate
//! keeps mutable global state. Components that need a table receive it through these types.

use std::fmt;
use std::path::PathBuf;

use chrono::{Month, Weekday};

/// Environment variable that overrides the directory holding the city CSV files.
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Number of raw rows shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Keyword meaning "do not filter on this field".
pub const ALL: &str = "all";

/// Months selectable as a filter, in calendar order.
pub const FILTER_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// Weekdays selectable as a filter, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// English weekday name ("Monday", ...).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// English month name for a 1-based month number, if it is a real month.
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name())
}

/// Cities with a trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// Every city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Normalized (lowercase) name accepted at the prompt.
    pub fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// File holding this city's trips, relative to [`ExplorerConfig::data_dir`].
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Look up a city by its normalized prompt key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Prompt keys for every city.
    pub fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.key()).collect()
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        })
    }
}

/// Month part of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepted prompt keys: `all` followed by the filterable month names.
    pub fn keys() -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(FILTER_MONTHS.iter().map(|m| m.name().to_lowercase()))
            .collect()
    }

    /// Parse a normalized prompt key. Months outside [`FILTER_MONTHS`] are rejected.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == ALL {
            return Some(Self::All);
        }
        FILTER_MONTHS
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(key))
            .map(Self::Only)
    }

    /// Month number the filter keeps: the 1-based position of the month in [`FILTER_MONTHS`].
    pub fn month_number(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Only(month) => FILTER_MONTHS
                .iter()
                .position(|m| *m == month)
                .map(|idx| idx as u32 + 1),
        }
    }
}

/// Weekday part of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Accepted prompt keys: `all` followed by the weekday names.
    pub fn keys() -> Vec<String> {
        std::iter::once(ALL.to_string())
            .chain(WEEKDAYS.iter().map(|d| weekday_name(*d).to_lowercase()))
            .collect()
    }

    /// Parse a normalized prompt key.
    pub fn from_key(key: &str) -> Option<Self> {
        if key == ALL {
            return Some(Self::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(key))
            .map(Self::Only)
    }
}

/// The (city, month, weekday) triple chosen by the user.
///
/// `city` is always concrete; month and weekday may independently be "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterCriteria {
    /// Criteria that keep every trip of `city`.
    pub fn all(city: City) -> Self {
        Self {
            city,
            month: MonthFilter::All,
            day: DayFilter::All,
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = MonthFilter::Only(month);
        self
    }

    pub fn with_day(mut self, day: Weekday) -> Self {
        self.day = DayFilter::Only(day);
        self
    }
}

/// Runtime configuration for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerConfig {
    /// Directory containing `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    pub data_dir: PathBuf,
    /// Rows per raw-data page.
    pub page_size: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ExplorerConfig {
    /// Defaults, with the data directory taken from `BIKESHARE_DATA_DIR` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Full path of a city's trip file.
    pub fn city_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_keys_round_trip_through_lookup() {
        for city in City::ALL {
            assert_eq!(City::from_key(city.key()), Some(city));
        }
        assert_eq!(City::from_key("boston"), None);
        assert_eq!(City::NewYorkCity.file_name(), "new_york_city.csv");
    }

    #[test]
    fn month_filter_accepts_only_first_half_of_year() {
        assert_eq!(MonthFilter::from_key("all"), Some(MonthFilter::All));
        assert_eq!(
            MonthFilter::from_key("march"),
            Some(MonthFilter::Only(Month::March))
        );
        assert_eq!(MonthFilter::from_key("july"), None);
        assert_eq!(MonthFilter::keys().len(), 7);
        assert_eq!(MonthFilter::keys()[1], "january");
    }

    #[test]
    fn month_number_is_one_based_index() {
        assert_eq!(MonthFilter::Only(Month::January).month_number(), Some(1));
        assert_eq!(MonthFilter::Only(Month::June).month_number(), Some(6));
        assert_eq!(MonthFilter::All.month_number(), None);
    }

    #[test]
    fn day_filter_parses_weekday_names() {
        assert_eq!(DayFilter::from_key("sunday"), Some(DayFilter::Only(Weekday::Sun)));
        assert_eq!(DayFilter::from_key("sun"), None);
        assert_eq!(DayFilter::keys()[1], "monday");
    }

    #[test]
    fn month_names_cover_full_year() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn city_path_joins_data_dir() {
        let config = ExplorerConfig::default().with_data_dir("/data");
        assert_eq!(
            config.city_path(City::Washington),
            PathBuf::from("/data/washington.csv")
        );
        assert_eq!(config.page_size, 5);
    }
}
