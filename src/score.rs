//! Score aggregation.
//!
//! Two distinct metrics live here and must not be conflated:
//!
//! - [`SeoReport`]: the checklist scale. Sum of the eight rule checks,
//!   `max_score = 10 x checks`, with failing messages collected as
//!   suggestions.
//! - [`overall_score`]: an independently-weighted 0-100 rollup.
//!
//! Both are derived on demand from the post's current content; neither is
//! ever persisted or trusted from storage.

use serde::Serialize;

use crate::checks::{
    SeoCheck, check_heading_structure, check_image_alt, check_internal_links,
    check_keyword_density, check_meta_description, check_meta_title, check_readability,
    check_word_count,
};
use crate::content::{headings, plain_text};
use crate::metrics::{keyword_density, word_count};
use crate::post::BlogPost;

/// Checklist result: per-check outcomes plus the aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct SeoReport {
    pub score: u32,
    pub max_score: u32,
    pub checks: Vec<SeoCheck>,
    /// Messages of failing checks, in check-declaration order.
    pub suggestions: Vec<String>,
}

impl SeoReport {
    /// Run all rule checks against a post.
    pub fn analyze(post: &BlogPost) -> Self {
        let text = plain_text(&post.content);
        let words = word_count(&post.content);

        let checks = vec![
            check_meta_title(post),
            check_meta_description(post),
            check_keyword_density(post, &text),
            check_readability(&text),
            check_image_alt(&post.content),
            check_internal_links(&text),
            check_heading_structure(&post.content),
            check_word_count(words),
        ];

        let score = checks.iter().map(|check| u32::from(check.score)).sum();
        let max_score = checks.len() as u32 * 10;
        let suggestions = checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.message.clone())
            .collect();

        Self {
            score,
            max_score,
            checks,
            suggestions,
        }
    }
}

/// Independently-weighted 0-100 score.
///
/// Weights: meta title 15, meta description 15, focus keyword 20, content
/// length 15, readability 10, heading structure 10, image alt coverage 5,
/// internal links 10. This is a different metric from [`SeoReport`] and is
/// intentionally not a rescaling of it.
pub fn overall_score(post: &BlogPost) -> u32 {
    let text = plain_text(&post.content);
    let words = word_count(&post.content);
    let mut score = 0u32;

    // Meta title (15)
    let title = post.seo.meta_title.trim();
    if !title.is_empty() {
        let length = title.chars().count();
        score += if (30..=60).contains(&length) { 15 } else { 8 };
    }

    // Meta description (15)
    let description = post.seo.meta_description.trim();
    if !description.is_empty() {
        let length = description.chars().count();
        score += if (120..=160).contains(&length) { 15 } else { 8 };
    }

    // Focus keyword (20)
    let keyword = post.seo.focus_keyword.trim();
    if !keyword.is_empty() {
        let density = keyword_density(&text, keyword);
        score += if (0.5..=2.5).contains(&density) {
            20
        } else if density > 0.0 {
            10
        } else {
            4
        };
    }

    // Content length (15)
    score += match words {
        1000.. => 15,
        600..1000 => 12,
        300..600 => 8,
        _ => 0,
    };

    // Readability (10)
    let mut sentences = 0usize;
    let mut sentence_words = 0usize;
    for fragment in text.split(['.', '!', '?']) {
        let count = fragment.split_whitespace().count();
        if count > 0 {
            sentences += 1;
            sentence_words += count;
        }
    }
    if sentences > 0 {
        let average = sentence_words as f64 / sentences as f64;
        score += if average <= 25.0 { 10 } else { 5 };
    }

    // Heading structure (10)
    let extracted = headings(&post.content);
    if !extracted.is_empty() {
        let h1_count = extracted.iter().filter(|h| h.level == 1).count();
        score += if h1_count <= 1 { 10 } else { 5 };
    }

    // Image alt coverage (5)
    let images: Vec<_> = post.content.iter().filter(|b| b.has_image()).collect();
    if images.iter().all(|b| b.image_alt().is_some()) {
        score += 5;
    } else {
        score += 2;
    }

    // Internal links (10)
    let links = check_internal_links(&text);
    score += match links.score {
        10 => 10,
        7 => 7,
        _ => 3,
    };

    score.min(100)
}
