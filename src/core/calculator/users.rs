use super::counting::{ValueCount, mode, value_counts};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub user_types: Vec<ValueCount<String>>,
    /// Rows with a blank "User Type"; not part of `user_types`.
    pub missing_user_types: usize,
    pub genders: Vec<ValueCount<String>>,
    pub missing_genders: usize,
    /// Earliest birth year (min).
    pub oldest_birth_year: Option<i32>,
    /// Latest birth year (max).
    pub youngest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

/// Demographics over present values only. `None` on an empty table; each
/// birth-year figure is `None` when every birth year is missing.
pub fn compute(table: &TripTable) -> Option<UserStats> {
    if table.is_empty() {
        return None;
    }

    let user_types = value_counts(table.iter().filter_map(|t| t.user_type.clone()));
    let missing_user_types = table.iter().filter(|t| t.user_type.is_none()).count();

    let genders = value_counts(table.iter().filter_map(|t| t.gender.clone()));
    let missing_genders = table.iter().filter(|t| t.gender.is_none()).count();

    let years: Vec<i32> = table.iter().filter_map(|t| t.birth_year_rounded()).collect();

    Some(UserStats {
        user_types,
        missing_user_types,
        genders,
        missing_genders,
        oldest_birth_year: years.iter().copied().min(),
        youngest_birth_year: years.iter().copied().max(),
        most_common_birth_year: mode(years.iter().copied()),
    })
}
