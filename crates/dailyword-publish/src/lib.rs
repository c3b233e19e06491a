//! Rendering and publishing of the daily word block.
//!
//! The marked-region patch ([`patch_file`]) is the supported way to publish;
//! whole-document regeneration ([`write_full`]) is kept for repositories that
//! still let the tool own the entire README.

pub mod atomic;
pub mod document;
pub mod errors;
pub mod region;
pub mod render;
pub mod template;

pub use atomic::write_bytes_atomic;
pub use document::{patch_file, write_full};
pub use errors::PublishError;
pub use region::{Markers, patch_region};
pub use render::{localized_weekday, render};
pub use template::render_document;
