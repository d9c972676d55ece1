pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::{DayFilter, FilterSelection, MonthFilter};
pub use trip::{TripRecord, TripTable};
