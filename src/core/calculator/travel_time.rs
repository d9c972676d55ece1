use super::counting::mode;
use crate::models::TripTable;
use chrono::{Month, Weekday};

#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimeStats {
    pub most_common_month: Month,
    pub most_common_weekday: Weekday,
    pub most_common_hour: u32,
}

/// Most frequent month, weekday and start hour. `None` on an empty table.
pub fn compute(table: &TripTable) -> Option<TravelTimeStats> {
    Some(TravelTimeStats {
        most_common_month: mode(table.iter().map(|t| t.month))?,
        most_common_weekday: mode(table.iter().map(|t| t.weekday))?,
        most_common_hour: mode(table.iter().map(|t| t.hour))?,
    })
}
