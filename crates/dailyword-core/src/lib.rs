//! Core contracts shared by the daily word crates.
//!
//! This crate defines the selected record, the date-derived seed, and the
//! dataset column contract used by the selector and the publisher.

pub mod columns;
pub mod error;
pub mod record;
pub mod seed;

pub use columns::RequiredColumns;
pub use error::{Error, Result};
pub use record::WordRecord;
pub use seed::DailySeed;
