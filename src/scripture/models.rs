//! Core data structures for scripture sections
//!
//! This module defines the input element shape read from per-book files and
//! the passage records written to the sections file.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::catalog::testament_of;

/// Element tag that marks body text; every other tag is ignored.
pub const PARAGRAPH_TEXT: &str = "paragraph text";

/// One entry of a per-book JSON array.
///
/// Only `type` is required on every element. The numeric fields and `value`
/// are checked when the element is paragraph text, so headings and other
/// markers may leave them out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: String,
    pub chapter_number: Option<i64>,
    pub verse_number: Option<i64>,
    pub section_number: Option<i64>,
    pub value: Option<String>,
}

impl Element {
    pub fn is_paragraph_text(&self) -> bool {
        self.kind == PARAGRAPH_TEXT
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Testament {
    #[serde(rename = "Old Testament")]
    Old,
    #[serde(rename = "New Testament")]
    New,
}

impl Testament {
    pub fn label(&self) -> &'static str {
        match self {
            Testament::Old => "Old Testament",
            Testament::New => "New Testament",
        }
    }
}

impl fmt::Display for Testament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Testament and thematic area of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    pub testament: Testament,
    pub area: &'static str,
}

/// One accepted passage, as stored in `bible_sections.json`.
///
/// Field order is the key order of the written file. Missing keys fall back
/// to defaults when a sections file is read back; a missing testament is
/// derived from the book name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "StoredPassage")]
pub struct Passage {
    pub testament: Testament,
    pub area: String,
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    pub text: String,
}

/// Passage record as read from disk, before the testament is settled
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredPassage {
    testament: Option<Testament>,
    area: String,
    book: String,
    chapter: i64,
    verse: i64,
    text: String,
}

impl From<StoredPassage> for Passage {
    fn from(stored: StoredPassage) -> Self {
        Passage {
            testament: stored
                .testament
                .unwrap_or_else(|| testament_of(&stored.book)),
            area: stored.area,
            book: stored.book,
            chapter: stored.chapter,
            verse: stored.verse,
            text: stored.text,
        }
    }
}

impl Passage {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
