//! Metric calculators: word count, reading time, keyword density.
//!
//! Pure functions over block arrays and plain text. Word totals use one
//! definition of countable text (textual blocks plus FAQ question/answer
//! pairs) for both word count and reading time.

use crate::content::ContentBlock;

/// Average adult reading speed used for the default reading time.
pub const WORDS_PER_MINUTE: usize = 200;

/// Total whitespace-separated words across all countable text.
pub fn word_count(blocks: &[ContentBlock]) -> usize {
    blocks
        .iter()
        .flat_map(ContentBlock::countable_text)
        .map(|text| text.split_whitespace().count())
        .sum()
}

/// Estimated reading time in minutes at [`WORDS_PER_MINUTE`]. Never below 1.
pub fn reading_time(blocks: &[ContentBlock]) -> usize {
    reading_time_at(blocks, WORDS_PER_MINUTE)
}

/// Reading time at a caller-provided speed. Never below 1, even for empty
/// content or a zero speed.
pub fn reading_time_at(blocks: &[ContentBlock], words_per_minute: usize) -> usize {
    let wpm = words_per_minute.max(1);
    word_count(blocks).div_ceil(wpm).max(1)
}

/// Percentage of `text`'s word windows that match `keyword` exactly.
///
/// Both sides are lower-cased and tokenized on whitespace; a sliding window
/// the length of the keyword phrase is compared against the text. Returns
/// `100 * matches / total_words`. Total for all inputs: empty text or an
/// empty keyword yields `0.0`.
pub fn keyword_density(text: &str, keyword: &str) -> f64 {
    let text_lower = text.to_lowercase();
    let keyword_lower = keyword.to_lowercase();
    let words: Vec<&str> = text_lower.split_whitespace().collect();
    let phrase: Vec<&str> = keyword_lower.split_whitespace().collect();

    if words.is_empty() || phrase.is_empty() || phrase.len() > words.len() {
        return 0.0;
    }

    let matches = words
        .windows(phrase.len())
        .filter(|window| *window == phrase.as_slice())
        .count();

    100.0 * matches as f64 / words.len() as f64
}
