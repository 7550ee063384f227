//! File I/O for book files and the sections file
//!
//! This module handles book discovery, reading element arrays, and writing
//! or reading `bible_sections.json`.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Result, SectionsError};
use super::models::{Element, Passage};

/// File name of the generated sections file
pub const SECTIONS_FILE: &str = "bible_sections.json";

/// Directories searched for the sections file, relative to the working directory
const DATA_DIRS: [&str; 7] = [
    ".",
    "Release",
    "Debug",
    "build",
    "build/Release",
    "build/Debug",
    "..",
];

/// A book file found in the input directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    pub book: String,
    pub path: PathBuf,
}

/// List the `*.json` files directly inside `dir`, ordered by file name.
///
/// `exclude` is skipped when present, so a sections file written into the
/// input directory is not read back as a book.
pub fn discover_books(dir: &Path, exclude: Option<&Path>) -> Result<Vec<BookFile>> {
    let excluded = exclude.and_then(|path| fs::canonicalize(path).ok());
    let entries = fs::read_dir(dir).map_err(|e| SectionsError::io(dir, e))?;

    let mut books = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| SectionsError::io(dir, e))?.path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if excluded.is_some() && fs::canonicalize(&path).ok() == excluded {
            tracing::warn!(path = %path.display(), "skipping output file found in input directory");
            continue;
        }

        let Some(book) = path.file_stem().and_then(|stem| stem.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
            continue;
        };
        books.push(BookFile {
            book: book.to_string(),
            path: path.clone(),
        });
    }

    books.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(books)
}

/// Read one book's element array
pub fn read_book(path: &Path) -> Result<Vec<Element>> {
    let content = fs::read_to_string(path).map_err(|e| SectionsError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| SectionsError::json(path, e))
}

/// Render passages as a JSON array indented by four spaces
pub fn passages_to_json(passages: &[Passage]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    passages
        .serialize(&mut serializer)
        .map_err(|e| SectionsError::json(SECTIONS_FILE, e))?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Serialize the full list first, then write it in one go
pub fn write_passages(path: &Path, passages: &[Passage]) -> Result<()> {
    let json = passages_to_json(passages)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SectionsError::io(parent, e))?;
    }
    fs::write(path, json).map_err(|e| SectionsError::io(path, e))
}

/// Read a sections file back
pub fn load_passages(path: &Path) -> Result<Vec<Passage>> {
    let content = fs::read_to_string(path).map_err(|e| SectionsError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| SectionsError::json(path, e))
}

/// Candidate locations for the sections file, most specific first
pub fn data_path_candidates(preferred: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = preferred.into_iter().map(Path::to_path_buf).collect();
    candidates.extend(DATA_DIRS.iter().map(|dir| Path::new(dir).join(SECTIONS_FILE)));
    candidates.extend(
        DATA_DIRS[1..6]
            .iter()
            .map(|dir| Path::new("..").join(dir).join(SECTIONS_FILE)),
    );
    candidates
}

/// First existing sections file among the candidates
pub fn resolve_data_path(preferred: Option<&Path>) -> Result<PathBuf> {
    data_path_candidates(preferred)
        .into_iter()
        .find(|candidate| candidate.is_file())
        .ok_or(SectionsError::DataNotFound)
}
