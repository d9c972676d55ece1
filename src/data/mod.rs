pub mod loader;

pub use loader::{DataLoader, read_trips};
