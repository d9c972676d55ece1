use crate::models::TripTable;
use crate::utils::round2;

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_secs: f64,
    /// sum / 3600, two decimals
    pub total_hours: f64,
    pub mean_secs: f64,
    /// mean / 60, two decimals
    pub mean_minutes: f64,
}

/// Total and mean trip duration. `None` for zero rows, so no NaN escapes.
pub fn compute(table: &TripTable) -> Option<DurationStats> {
    if table.is_empty() {
        return None;
    }

    let total_secs: f64 = table.iter().map(|t| t.duration_secs).sum();
    let mean_secs = total_secs / table.len() as f64;

    Some(DurationStats {
        trip_count: table.len(),
        total_secs,
        total_hours: round2(total_secs / 3600.0),
        mean_secs,
        mean_minutes: round2(mean_secs / 60.0),
    })
}
