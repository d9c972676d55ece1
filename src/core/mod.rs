pub mod calculator;
pub mod session;

pub use session::{Session, SessionState};
