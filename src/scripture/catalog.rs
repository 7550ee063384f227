//! Book classification tables
//!
//! Every book belongs to one testament and one thematic area. The tables are
//! fixed; they are folded into a single lookup map the first time a book is
//! classified.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::{Result, SectionsError};
use super::models::{BookInfo, Testament};

/// The 39 Old Testament books, in canonical order
pub static OLD_TESTAMENT_BOOKS: [&str; 39] = [
    "genesis",
    "exodus",
    "leviticus",
    "numbers",
    "deuteronomy",
    "joshua",
    "judges",
    "ruth",
    "1samuel",
    "2samuel",
    "1kings",
    "2kings",
    "1chronicles",
    "2chronicles",
    "ezra",
    "nehemiah",
    "esther",
    "job",
    "psalms",
    "proverbs",
    "ecclesiastes",
    "songofsolomon",
    "isaiah",
    "jeremiah",
    "lamentations",
    "ezekiel",
    "daniel",
    "hosea",
    "joel",
    "amos",
    "obadiah",
    "jonah",
    "micah",
    "nahum",
    "habakkuk",
    "zephaniah",
    "haggai",
    "zechariah",
    "malachi",
];

/// Thematic areas in lookup order. A book listed twice keeps its first area.
pub static AREA_TABLE: [(&str, &[&str]); 12] = [
    (
        "Torah",
        &["genesis", "exodus", "leviticus", "numbers", "deuteronomy"],
    ),
    (
        "Historical",
        &[
            "joshua",
            "judges",
            "1samuel",
            "2samuel",
            "1kings",
            "2kings",
            "1chronicles",
            "2chronicles",
        ],
    ),
    (
        "Poems",
        &[
            "psalms",
            "proverbs",
            "ecclesiastes",
            "songofsolomon",
            "lamentations",
        ],
    ),
    ("Small stories", &["job", "esther", "jonah", "ruth", "ezra"]),
    (
        "Prophets Major",
        &["isaiah", "jeremiah", "ezekiel", "daniel"],
    ),
    (
        "Prophets Minor",
        &[
            "hosea",
            "joel",
            "amos",
            "obadiah",
            "micah",
            "nahum",
            "habakkuk",
            "zephaniah",
            "haggai",
            "zechariah",
            "malachi",
            "nehemiah",
        ],
    ),
    ("Gospel", &["matthew", "mark", "luke", "john"]),
    ("Acts from Hebrews", &["acts", "hebrews"]),
    (
        "Pauls letters",
        &[
            "romans",
            "1corinthians",
            "2corinthians",
            "galatians",
            "ephesians",
            "philippians",
            "colossians",
            "1thessalonians",
            "2thessalonians",
            "1timothy",
            "2timothy",
            "titus",
            "philemon",
        ],
    ),
    ("Peter letters", &["1peter", "2peter"]),
    ("James and Jude", &["james", "jude"]),
    (
        "John Letters and Visions",
        &["1john", "2john", "3john", "revelation"],
    ),
];

static CATALOG: Lazy<HashMap<&'static str, BookInfo>> = Lazy::new(|| {
    let mut catalog = HashMap::new();
    for &(area, books) in AREA_TABLE.iter() {
        for &book in books {
            catalog.entry(book).or_insert_with(|| BookInfo {
                testament: testament_of(book),
                area,
            });
        }
    }
    catalog
});

/// Testament of a book; anything outside the Old Testament list is New.
pub fn testament_of(book: &str) -> Testament {
    if OLD_TESTAMENT_BOOKS.contains(&book) {
        Testament::Old
    } else {
        Testament::New
    }
}

/// Exact-name lookup used when building sections
pub fn classify(book: &str) -> Result<BookInfo> {
    CATALOG
        .get(book)
        .copied()
        .ok_or_else(|| SectionsError::UnknownBook(book.to_string()))
}

/// Case-insensitive lookup for user-supplied names
pub fn area_of(book: &str) -> Option<BookInfo> {
    CATALOG.get(book.trim().to_lowercase().as_str()).copied()
}
