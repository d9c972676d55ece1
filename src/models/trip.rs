use super::city::City;
use super::filter::{DayFilter, MonthFilter};
use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub row_id: Option<String>,          // ⇔ unnamed leading index column
    pub start_time: NaiveDateTime,       // ⇔ "Start Time"
    pub end_time: Option<NaiveDateTime>, // ⇔ "End Time"
    pub duration_secs: f64,              // ⇔ "Trip Duration"
    pub start_station: String,           // ⇔ "Start Station"
    pub end_station: String,             // ⇔ "End Station"
    pub user_type: Option<String>,       // ⇔ "User Type"
    pub gender: Option<String>,          // ⇔ "Gender" (chicago, new york city)
    pub birth_year: Option<f64>,         // ⇔ "Birth Year" (chicago, new york city)

    // derived from start_time
    pub month: Month,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TripRecord {
    /// Build a record and derive month / weekday / hour from `start_time`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        row_id: Option<String>,
        start_time: NaiveDateTime,
        end_time: Option<NaiveDateTime>,
        duration_secs: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        // month() is always 1..=12
        let month = Month::try_from(start_time.month() as u8).unwrap_or(Month::January);

        Self {
            row_id,
            start_time,
            end_time,
            duration_secs,
            start_station,
            end_station,
            user_type,
            gender,
            birth_year: birth_year.filter(|y| y.is_finite()),
            month,
            weekday: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    /// Directional trip key: "A - B" differs from "B - A".
    pub fn trip_key(&self) -> String {
        format!("{} - {}", self.start_station, self.end_station)
    }

    /// Birth year as a whole year, if present.
    pub fn birth_year_rounded(&self) -> Option<i32> {
        self.birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32)
    }
}

/// Ordered trips of one city, as materialized for one session iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, trips: Vec<TripRecord>) -> Self {
        Self { city, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.trips.iter()
    }

    /// Order-preserving subset matching both filters.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> TripTable {
        let trips = self
            .trips
            .iter()
            .filter(|t| month.matches(t.month) && day.matches(t.weekday))
            .cloned()
            .collect();

        TripTable::new(self.city, trips)
    }
}
