//! Plain-text and heading extraction from block arrays.
//!
//! Pure functions, no side effects. No HTML stripping is performed here:
//! callers must pre-sanitize if blocks may contain markup.

use serde::Serialize;

use super::ContentBlock;

/// Level assigned to headings that carry no explicit level.
const DEFAULT_HEADING_LEVEL: u8 = 2;

/// A heading extracted from content, in document order.
///
/// `id` is positional (`heading-<index>` over the extracted sequence), not
/// content-stable: reordering blocks changes heading ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading {
    pub id: String,
    pub level: u8,
    pub text: String,
}

/// Concatenate the text payload of all textual blocks, joined by single
/// spaces. Image and separator blocks contribute nothing.
pub fn plain_text(blocks: &[ContentBlock]) -> String {
    let parts: Vec<&str> = blocks.iter().filter_map(ContentBlock::text_content).collect();
    parts.join(" ")
}

/// Extract `heading` and `subheading` blocks, preserving original order.
pub fn headings(blocks: &[ContentBlock]) -> Vec<Heading> {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Heading {
                content,
                heading_level,
                ..
            } => Some((content, heading_level.unwrap_or(DEFAULT_HEADING_LEVEL))),
            ContentBlock::Subheading { content, .. } => Some((content, DEFAULT_HEADING_LEVEL)),
            _ => None,
        })
        .enumerate()
        .map(|(index, (text, level))| Heading {
            id: format!("heading-{index}"),
            level,
            text: text.clone(),
        })
        .collect()
}
