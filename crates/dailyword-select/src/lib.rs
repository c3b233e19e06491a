//! Deterministic daily selection from a CSV word list.
//!
//! The dataset is filtered to complete rows and one row is drawn with a
//! generator seeded from the calendar date, so a given day always yields the
//! same word for an unchanged file.

pub mod dataset;
pub mod draw;
pub mod errors;
pub mod selector;

pub use dataset::{Dataset, load_dataset, read_dataset};
pub use draw::draw;
pub use errors::SelectError;
pub use selector::{select_daily, try_select_daily};
