//! Sections build orchestration
//!
//! This module contains `build_sections()`, which drives the whole batch:
//! discover book files, extract each book's passages, then sort the
//! combined list.

use std::path::Path;

use super::error::Result;
use super::extractor::extract_passages;
use super::io::{discover_books, read_book};
use super::models::Passage;
use super::query::sort_passages;

/// Build the sorted passage list for every book file in `input_dir`.
///
/// Books are processed one at a time and each gets a fresh extractor, so no
/// accumulated text crosses a book boundary. The first error aborts the
/// build before anything is written.
pub fn build_sections(input_dir: &Path, exclude: Option<&Path>) -> Result<Vec<Passage>> {
    let books = discover_books(input_dir, exclude)?;
    tracing::info!(
        dir = %input_dir.display(),
        books = books.len(),
        "building sections"
    );

    let mut passages = Vec::new();
    for book_file in &books {
        let elements = read_book(&book_file.path)?;
        let extracted = extract_passages(&book_file.book, &elements)?;
        tracing::debug!(
            book = %book_file.book,
            elements = elements.len(),
            passages = extracted.len(),
            "extracted book"
        );
        passages.extend(extracted);
    }

    sort_passages(&mut passages);
    Ok(passages)
}
