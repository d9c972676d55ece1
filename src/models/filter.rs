use super::city::City;
use crate::utils::date::{month_name, weekday_name};
use chrono::{Month, Weekday};
use std::fmt;

/// Months covered by the data files.
pub const MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Parse already-normalized input: "all" or "january".."june".
    pub fn from_input(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(MonthFilter::All);
        }
        MONTHS
            .into_iter()
            .find(|m| month_name(*m).eq_ignore_ascii_case(s))
            .map(MonthFilter::Only)
    }

    pub fn matches(&self, month: Month) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all months"),
            MonthFilter::Only(m) => f.write_str(month_name(*m)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Parse already-normalized input: "all" or "monday".."sunday".
    pub fn from_input(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(s))
            .map(DayFilter::Only)
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == weekday,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all days"),
            DayFilter::Only(d) => f.write_str(weekday_name(*d)),
        }
    }
}

/// City, month and day chosen for one session iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// Selection with no time filter for the given city.
    pub fn whole_city(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.city, self.month, self.day)
    }
}
