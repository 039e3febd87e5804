//! Excerpt generation.

use crate::content::{ContentBlock, plain_text};

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_CHARS: usize = 160;

/// Truncate the post's plain text to `max_chars` characters, appending
/// `...` when truncated.
///
/// The cut is character-based, not word-aware: mid-word cuts are possible.
/// Text that already fits is returned verbatim. The result is never longer
/// than `max_chars + 3` characters.
pub fn excerpt(blocks: &[ContentBlock], max_chars: usize) -> String {
    let text = plain_text(blocks);
    if text.chars().count() <= max_chars {
        return text;
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(content: &str) -> ContentBlock {
        ContentBlock::Text {
            content: content.to_string(),
            order: 0,
        }
    }

    #[test]
    fn test_short_text_verbatim() {
        let blocks = vec![text("A short opener.")];
        assert_eq!(excerpt(&blocks, 160), "A short opener.");
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let blocks = vec![text(&"abcde ".repeat(40))];
        let result = excerpt(&blocks, 20);
        assert!(result.ends_with("..."));
        assert!(result.chars().count() <= 23);
        // Trailing whitespace at the cut point is trimmed before the ellipsis.
        assert!(!result.contains(" ..."));
    }

    #[test]
    fn test_length_bound_holds() {
        let blocks = vec![text(&"word ".repeat(100))];
        for max in [1, 10, 160, 400] {
            let result = excerpt(&blocks, max);
            assert!(
                result.chars().count() <= max + 3,
                "excerpt over bound for max {max}"
            );
        }
    }

    #[test]
    fn test_exact_fit_not_truncated() {
        let blocks = vec![text("exactly-twenty-chars")];
        assert_eq!(excerpt(&blocks, 20), "exactly-twenty-chars");
    }

    #[test]
    fn test_mid_word_cut() {
        let blocks = vec![text("supercalifragilistic content")];
        assert_eq!(excerpt(&blocks, 9), "supercali...");
    }

    #[test]
    fn test_multibyte_safe() {
        let blocks = vec![text("héllo wörld with accénts and more tail text")];
        let result = excerpt(&blocks, 12);
        assert!(result.starts_with("héllo wörld"));
        assert!(result.ends_with("..."));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(excerpt(&[], 160), "");
    }
}
