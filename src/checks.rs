//! Independent SEO rule checks.
//!
//! Each check is a pure function of its inputs yielding a 0-10 sub-score, a
//! pass flag and a human-readable message. Checks have no ordering
//! dependency; [`crate::score::SeoReport`] runs them in declaration order.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::content::{ContentBlock, headings};
use crate::metrics::keyword_density;
use crate::post::BlogPost;

/// Outcome of a single rule check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoCheck {
    pub name: &'static str,
    pub passed: bool,
    pub message: String,
    pub score: u8,
}

impl SeoCheck {
    fn new(name: &'static str, passed: bool, score: u8, message: impl Into<String>) -> Self {
        Self {
            name,
            passed,
            message: message.into(),
            score,
        }
    }
}

/// Meta title presence, length window (30-60 chars) and keyword inclusion.
pub fn check_meta_title(post: &BlogPost) -> SeoCheck {
    const NAME: &str = "meta-title";
    let title = post.seo.meta_title.trim();
    let length = title.chars().count();

    if title.is_empty() {
        return SeoCheck::new(NAME, false, 0, "Meta title is missing");
    }
    if length < 30 {
        return SeoCheck::new(NAME, false, 3, "Meta title is too short (under 30 characters)");
    }
    if length > 60 {
        return SeoCheck::new(NAME, false, 5, "Meta title is too long (over 60 characters)");
    }
    let keyword = post.seo.focus_keyword.trim();
    if !keyword.is_empty() && !contains_ignore_case(title, keyword) {
        return SeoCheck::new(NAME, false, 7, "Meta title does not contain the focus keyword");
    }
    SeoCheck::new(NAME, true, 10, "Meta title looks good")
}

/// Meta description presence, length window (120-160 chars) and keyword
/// inclusion.
pub fn check_meta_description(post: &BlogPost) -> SeoCheck {
    const NAME: &str = "meta-description";
    let description = post.seo.meta_description.trim();
    let length = description.chars().count();

    if description.is_empty() {
        return SeoCheck::new(NAME, false, 0, "Meta description is missing");
    }
    if length < 120 {
        return SeoCheck::new(
            NAME,
            false,
            3,
            "Meta description is too short (under 120 characters)",
        );
    }
    if length > 160 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            "Meta description is too long (over 160 characters)",
        );
    }
    let keyword = post.seo.focus_keyword.trim();
    if !keyword.is_empty() && !contains_ignore_case(description, keyword) {
        return SeoCheck::new(
            NAME,
            false,
            7,
            "Meta description does not contain the focus keyword",
        );
    }
    SeoCheck::new(NAME, true, 10, "Meta description looks good")
}

/// Focus keyword density within the 0.5%-2.5% window.
pub fn check_keyword_density(post: &BlogPost, text: &str) -> SeoCheck {
    const NAME: &str = "keyword-density";
    let keyword = post.seo.focus_keyword.trim();

    if keyword.is_empty() {
        return SeoCheck::new(NAME, false, 0, "No focus keyword is set");
    }
    let density = keyword_density(text, keyword);
    if density == 0.0 {
        return SeoCheck::new(NAME, false, 0, "Focus keyword does not appear in the content");
    }
    if density < 0.5 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("Keyword density is low ({density:.2}%, aim for 0.5-2.5%)"),
        );
    }
    if density > 2.5 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("Keyword density is high ({density:.2}%, aim for 0.5-2.5%)"),
        );
    }
    SeoCheck::new(NAME, true, 10, format!("Keyword density is good ({density:.2}%)"))
}

/// Average sentence length, sentences split on `.`, `!`, `?` runs.
pub fn check_readability(text: &str) -> SeoCheck {
    const NAME: &str = "readability";
    const MAX_AVG_WORDS: f64 = 25.0;

    let mut sentences = 0usize;
    let mut words = 0usize;
    for fragment in text.split(['.', '!', '?']) {
        let count = fragment.split_whitespace().count();
        if count > 0 {
            sentences += 1;
            words += count;
        }
    }

    if sentences == 0 {
        return SeoCheck::new(NAME, false, 0, "Content has no readable sentences");
    }
    let average = words as f64 / sentences as f64;
    if average > MAX_AVG_WORDS {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("Sentences average {average:.0} words, aim for 25 or fewer"),
        );
    }
    SeoCheck::new(NAME, true, 10, "Sentence length is readable")
}

/// Every image-bearing block must carry alt text. Vacuously satisfied when
/// the content has no images.
pub fn check_image_alt(blocks: &[ContentBlock]) -> SeoCheck {
    const NAME: &str = "image-alt";
    let images: Vec<&ContentBlock> = blocks.iter().filter(|b| b.has_image()).collect();

    if images.is_empty() {
        return SeoCheck::new(NAME, true, 10, "No images to check");
    }
    let missing = images.iter().filter(|b| b.image_alt().is_none()).count();
    if missing > 0 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("{missing} of {} images are missing alt text", images.len()),
        );
    }
    SeoCheck::new(NAME, true, 10, "All images have alt text")
}

/// Count of internal links (`href="/..."`) detected in the plain text.
pub fn check_internal_links(text: &str) -> SeoCheck {
    const NAME: &str = "internal-links";
    static INTERNAL_HREF: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"href=["']/[^"']*["']"#).unwrap());

    let count = INTERNAL_HREF.find_iter(text).count();
    match count {
        0 => SeoCheck::new(NAME, false, 5, "No internal links found"),
        1 => SeoCheck::new(NAME, false, 7, "Only one internal link, add at least one more"),
        _ => SeoCheck::new(NAME, true, 10, format!("{count} internal links found")),
    }
}

/// Heading presence and a single-H1 structure.
pub fn check_heading_structure(blocks: &[ContentBlock]) -> SeoCheck {
    const NAME: &str = "heading-structure";
    let extracted = headings(blocks);

    if extracted.is_empty() {
        return SeoCheck::new(NAME, false, 0, "Content has no headings");
    }
    let h1_count = extracted.iter().filter(|h| h.level == 1).count();
    if h1_count > 1 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("Content has {h1_count} H1 headings, use exactly one"),
        );
    }
    SeoCheck::new(NAME, true, 10, "Heading structure looks good")
}

/// Word count ladder: 300 minimum, 600 acceptable, 1000 comprehensive.
pub fn check_word_count(words: usize) -> SeoCheck {
    const NAME: &str = "word-count";
    if words < 300 {
        return SeoCheck::new(
            NAME,
            false,
            0,
            format!("Content is too short ({words} words, aim for at least 300)"),
        );
    }
    if words < 600 {
        return SeoCheck::new(
            NAME,
            false,
            5,
            format!("Content is thin ({words} words, aim for at least 600)"),
        );
    }
    if words >= 1000 {
        return SeoCheck::new(NAME, true, 10, format!("Content is comprehensive ({words} words)"));
    }
    // Acceptable length: advisory message, but not a failing suggestion.
    SeoCheck::new(NAME, true, 8, format!("Content length is good ({words} words)"))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
