//! bibirble: scripture sections builder
//!
//! This library turns a directory of per-book scripture element files into a
//! single sorted list of classified passages, and provides the lookups the
//! guessing game runs on that list.

pub mod config;
pub mod reveal;
pub mod scripture;

// Re-export commonly used types
pub use config::Settings;
pub use reveal::reveal_text;
pub use scripture::{build_sections, Passage, PassageExtractor, SectionsError, Testament};
