pub mod counting;
pub mod duration;
pub mod stations;
pub mod travel_time;
pub mod users;
