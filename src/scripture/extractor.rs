//! Passage extraction for a single book
//!
//! Paragraph-text elements are accumulated into passages. A section number
//! of 1 starts a group; any other section number continues it. After every
//! paragraph element the accumulated text is checked, and a passage is
//! emitted as soon as it is long enough and the triggering element is not a
//! sentinel row.

use super::catalog::classify;
use super::error::{Result, SectionsError};
use super::models::{BookInfo, Element, Passage};

/// Minimum whitespace-separated words in an emitted passage
pub const MIN_WORDS: usize = 7;

/// Chapter and verse values at or above this mark sentinel rows
pub const SENTINEL_NUMBER: i64 = 99;

/// Section number that opens (or restarts) a group
const SECTION_START: i64 = 1;

/// Per-book accumulation state
#[derive(Debug, Default)]
struct SectionAccumulator {
    open_sections: Vec<i64>,
    text: String,
}

impl SectionAccumulator {
    fn push(&mut self, section_number: i64, value: &str) {
        if section_number == SECTION_START {
            if self.open_sections.is_empty() {
                self.open_sections.push(SECTION_START);
                self.text = value.to_string();
            } else {
                // A restart while a group is open drops the group unflushed.
                self.reset();
            }
        } else {
            self.open_sections.push(section_number);
            self.text.push(' ');
            self.text.push_str(value);
        }
    }

    fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    fn is_ready(&self, chapter: i64, verse: i64) -> bool {
        !self.open_sections.is_empty()
            && self.word_count() >= MIN_WORDS
            && (chapter < SENTINEL_NUMBER || verse < SENTINEL_NUMBER)
    }

    fn take_text(&mut self) -> String {
        let text = self.text.trim().to_string();
        self.reset();
        text
    }

    fn reset(&mut self) {
        self.open_sections.clear();
        self.text.clear();
    }
}

/// Lazily yields the passages of one book.
///
/// Items are `Result`s: a paragraph element with a missing field or a book
/// that is not in the catalog ends the sequence with an error.
pub struct PassageExtractor<'a, I> {
    book: &'a str,
    info: Option<BookInfo>,
    elements: I,
    index: usize,
    state: SectionAccumulator,
    failed: bool,
}

impl<'a, I> PassageExtractor<'a, I>
where
    I: Iterator<Item = &'a Element>,
{
    pub fn new(book: &'a str, elements: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            book,
            info: None,
            elements: elements.into_iter(),
            index: 0,
            state: SectionAccumulator::default(),
            failed: false,
        }
    }

    fn book_info(&mut self) -> Result<BookInfo> {
        match self.info {
            Some(info) => Ok(info),
            None => {
                let info = classify(self.book)?;
                self.info = Some(info);
                Ok(info)
            }
        }
    }

    fn missing(&self, index: usize, field: &'static str) -> SectionsError {
        SectionsError::MissingField {
            book: self.book.to_string(),
            index,
            field,
        }
    }

    /// Feed one paragraph element; returns a passage when it completes one.
    fn step(&mut self, index: usize, element: &Element) -> Result<Option<Passage>> {
        let chapter = element
            .chapter_number
            .ok_or_else(|| self.missing(index, "chapterNumber"))?;
        let verse = element
            .verse_number
            .ok_or_else(|| self.missing(index, "verseNumber"))?;
        let info = self.book_info()?;
        let section_number = element
            .section_number
            .ok_or_else(|| self.missing(index, "sectionNumber"))?;
        let value = element
            .value
            .as_deref()
            .ok_or_else(|| self.missing(index, "value"))?;

        self.state.push(section_number, value);

        if !self.state.is_ready(chapter, verse) {
            return Ok(None);
        }

        Ok(Some(Passage {
            testament: info.testament,
            area: info.area.to_string(),
            book: self.book.to_string(),
            chapter,
            verse,
            text: self.state.take_text(),
        }))
    }
}

impl<'a, I> Iterator for PassageExtractor<'a, I>
where
    I: Iterator<Item = &'a Element>,
{
    type Item = Result<Passage>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let element = self.elements.next()?;
            let index = self.index;
            self.index += 1;

            if !element.is_paragraph_text() {
                continue;
            }

            match self.step(index, element) {
                Ok(Some(passage)) => return Some(Ok(passage)),
                Ok(None) => continue,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Extract every passage of a book, stopping at the first structural error
pub fn extract_passages(book: &str, elements: &[Element]) -> Result<Vec<Passage>> {
    PassageExtractor::new(book, elements).collect()
}
