pub mod chapter;
pub mod config;
pub mod content;
pub mod error;
pub mod io;
pub mod numeral;
pub mod paths;
pub mod stats;
pub mod store;
pub mod tracker;
pub mod types;

pub use error::{Result, TrackerError};
