//! Ordering and lookup over passage lists

use std::collections::HashSet;

use super::models::Passage;

/// Stable sort by book name, then chapter, then verse.
///
/// Book names compare as plain strings, so "1chronicles" sorts before
/// "2kings" and both before "acts".
pub fn sort_passages(passages: &mut [Passage]) {
    passages.sort_by(|a, b| {
        a.book
            .cmp(&b.book)
            .then(a.chapter.cmp(&b.chapter))
            .then(a.verse.cmp(&b.verse))
    });
}

/// Whether every adjacent pair is in `sort_passages` order
pub fn is_sorted_by_position(passages: &[Passage]) -> bool {
    passages.windows(2).all(|pair| {
        let (a, b) = (&pair[0], &pair[1]);
        (&a.book, a.chapter, a.verse) <= (&b.book, b.chapter, b.verse)
    })
}

/// Distinct books in order of first appearance
pub fn list_books(passages: &[Passage]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut books = Vec::new();
    for passage in passages {
        if seen.insert(passage.book.as_str()) {
            books.push(passage.book.clone());
        }
    }
    books
}

/// Passage at the given coordinates; book names match case-insensitively.
pub fn find_passage<'a>(
    passages: &'a [Passage],
    book: &str,
    chapter: i64,
    verse: i64,
) -> Option<&'a Passage> {
    let book = book.trim().to_lowercase();
    passages
        .iter()
        .find(|p| p.book == book && p.chapter == chapter && p.verse == verse)
}
