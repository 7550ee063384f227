//! Scripture section extraction module
//!
//! This module turns per-book element files into classified passages and
//! reads and writes the combined sections file.

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod io;
pub(crate) mod loader;
pub mod models;
pub mod query;

// Re-export the public API
pub use catalog::{area_of, classify, testament_of};
pub use error::SectionsError;
pub use extractor::{extract_passages, PassageExtractor};
pub use io::{load_passages, resolve_data_path, write_passages, SECTIONS_FILE};
pub use loader::build_sections;
pub use models::*;
pub use query::*;
