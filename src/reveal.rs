//! Progressive word reveal for the guessing game
//!
//! A passage is cut into roughly seven chunks of consecutive words. The
//! first chunk is always shown; each stage uncovers one more chunk and every
//! hidden word is rendered as `...`.

/// Placeholder for a hidden word
pub const HIDDEN_WORD: &str = "...";

/// Number of chunks a passage is cut into, before rounding
const TARGET_CHUNKS: usize = 7;

/// Words per chunk for a passage of `word_count` words
pub fn chunk_size(word_count: usize) -> usize {
    (word_count / TARGET_CHUNKS).max(1)
}

/// Number of chunks a passage of `word_count` words is split into
pub fn chunk_count(word_count: usize) -> usize {
    word_count.div_ceil(chunk_size(word_count))
}

/// Render `text` with only the first `stage + 1` chunks visible.
///
/// `None` returns the stored text unchanged. A masked rendering re-joins
/// words with single spaces.
pub fn reveal_text(text: &str, stage: Option<usize>) -> String {
    let Some(stage) = stage else {
        return text.to_string();
    };
    let words: Vec<&str> = text.split_whitespace().collect();

    let visible_words = chunk_size(words.len()).saturating_mul(stage.saturating_add(1));
    words
        .iter()
        .enumerate()
        .map(|(index, word)| if index < visible_words { *word } else { HIDDEN_WORD })
        .collect::<Vec<_>>()
        .join(" ")
}
