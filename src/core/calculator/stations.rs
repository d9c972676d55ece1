use super::counting::mode;
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: String,
    pub most_common_end: String,
    /// "Start - End", direction matters.
    pub most_common_trip: String,
}

pub fn compute(table: &TripTable) -> Option<StationStats> {
    Some(StationStats {
        most_common_start: mode(table.iter().map(|t| t.start_station.as_str()))?.to_string(),
        most_common_end: mode(table.iter().map(|t| t.end_station.as_str()))?.to_string(),
        most_common_trip: mode(table.iter().map(|t| t.trip_key()))?,
    })
}
