//! CSV loading for trip files.
//!
//! Each city file is read through serde by header name; timestamps are parsed
//! and the month / weekday / hour fields derived before filters are applied.

use crate::config::CityCatalog;
use crate::errors::{AppError, AppResult};
use crate::models::{City, FilterSelection, TripRecord, TripTable};
use crate::utils::date::parse_timestamp;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

/// Columns every city file must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// One CSV row as written in the source files.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "", default)]
    row_id: Option<String>,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Cell contents read as "no value", on top of blank cells (the usual
/// dataframe NA markers).
pub const MISSING_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl RawTrip {
    fn into_record(self, path: &Path, line: u64) -> AppResult<TripRecord> {
        let start_time = parse_timestamp(&self.start_time).ok_or_else(|| {
            AppError::data_source(
                path,
                format!("line {line}: invalid Start Time '{}'", self.start_time),
            )
        })?;

        let end_time = match self.end_time.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_timestamp(raw).ok_or_else(|| {
                AppError::data_source(path, format!("line {line}: invalid End Time '{raw}'"))
            })?),
        };

        if !self.trip_duration.is_finite() || self.trip_duration < 0.0 {
            return Err(AppError::data_source(
                path,
                format!("line {line}: invalid Trip Duration {}", self.trip_duration),
            ));
        }

        let birth_year = match present(self.birth_year) {
            None => None,
            Some(raw) => {
                let year = raw.parse::<f64>().map_err(|_| {
                    AppError::data_source(path, format!("line {line}: invalid Birth Year '{raw}'"))
                })?;
                year.is_finite().then_some(year)
            }
        };

        Ok(TripRecord::new(
            self.row_id.filter(|s| !s.is_empty()),
            start_time,
            end_time,
            self.trip_duration,
            self.start_station,
            self.end_station,
            present(self.user_type),
            present(self.gender),
            birth_year,
        ))
    }
}

/// Keep a cell only if it holds a real value.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| {
        let s = s.trim();
        !s.is_empty() && !MISSING_TOKENS.contains(&s)
    })
}

/// Reads city files through an explicit catalog.
#[derive(Debug, Clone)]
pub struct DataLoader {
    catalog: CityCatalog,
}

impl DataLoader {
    pub fn new(catalog: CityCatalog) -> Self {
        Self { catalog }
    }

    /// Load the selected city and keep the rows matching month and day.
    pub fn load_data(&self, selection: &FilterSelection) -> AppResult<TripTable> {
        let all = self.load_city(selection.city)?;
        let filtered = all.filter(selection.month, selection.day);

        info!(
            "{}: kept {} of {} trips ({})",
            selection.city,
            filtered.len(),
            all.len(),
            selection
        );
        Ok(filtered)
    }

    /// Load every row of a city file, in file order.
    pub fn load_city(&self, city: City) -> AppResult<TripTable> {
        let path = self.catalog.path_for(city);
        debug!("reading {}", path.display());

        let trips = read_trips(path)?;
        Ok(TripTable::new(city, trips))
    }
}

/// Parse a trip CSV file.
pub fn read_trips(path: &Path) -> AppResult<Vec<TripRecord>> {
    let file = File::open(path).map_err(|e| AppError::data_source(path, e.to_string()))?;

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|e| AppError::data_source(path, e.to_string()))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(AppError::data_source(
            path,
            format!("missing column '{missing}'"),
        ));
    }

    let mut trips = Vec::new();
    for result in rdr.deserialize::<RawTrip>() {
        let raw = result.map_err(|e| AppError::data_source(path, e.to_string()))?;
        // header is line 1
        let line = trips.len() as u64 + 2;
        trips.push(raw.into_record(path, line)?);
    }

    debug!("{} trips read from {}", trips.len(), path.display());
    Ok(trips)
}
