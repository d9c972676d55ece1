pub mod input;
pub mod messages;
pub mod prompt;
pub mod report;
pub mod viewer;

pub use prompt::Console;
