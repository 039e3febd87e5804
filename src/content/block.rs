//! Content block sum type.
//!
//! One unit of structured blog content, discriminated by the `type` field
//! of its JSON representation. Fields are camelCase on the wire so block
//! arrays round-trip the way a document store holds them.

use serde::{Deserialize, Serialize};

/// A single unit of structured blog content.
///
/// `order` is the insertion index assigned by the editor; it is significant
/// and preserved verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ContentBlock {
    /// Paragraph text.
    Text {
        #[serde(default)]
        content: String,
        #[serde(default)]
        order: u32,
    },
    /// Standalone image; `content` holds the image URL.
    Image {
        #[serde(default)]
        content: String,
        /// Optional secondary image URL.
        #[serde(default)]
        image_content: Option<String>,
        #[serde(default)]
        image_alt: Option<String>,
        #[serde(default)]
        order: u32,
    },
    /// Text column with an image beside it.
    TextImage {
        #[serde(default)]
        content: String,
        #[serde(default)]
        image_content: Option<String>,
        #[serde(default)]
        image_alt: Option<String>,
        #[serde(default)]
        order: u32,
    },
    /// Image column with text beside it.
    ImageText {
        #[serde(default)]
        content: String,
        #[serde(default)]
        image_content: Option<String>,
        #[serde(default)]
        image_alt: Option<String>,
        #[serde(default)]
        order: u32,
    },
    /// Section heading; `heading_level` is 1-6, defaulting to 2.
    Heading {
        #[serde(default)]
        content: String,
        #[serde(default)]
        heading_level: Option<u8>,
        #[serde(default)]
        order: u32,
    },
    /// Secondary heading with no explicit level.
    Subheading {
        #[serde(default)]
        content: String,
        #[serde(default)]
        order: u32,
    },
    /// Horizontal rule.
    Separator {
        #[serde(default)]
        order: u32,
    },
    /// Block quote.
    Quote {
        #[serde(default)]
        content: String,
        #[serde(default)]
        order: u32,
    },
    /// FAQ entry (question + answer pair).
    FaqQuestion {
        #[serde(default)]
        question: String,
        #[serde(default)]
        answer: String,
        #[serde(default)]
        order: u32,
    },
}

impl ContentBlock {
    /// Insertion index of this block.
    pub const fn order(&self) -> u32 {
        match self {
            Self::Text { order, .. }
            | Self::Image { order, .. }
            | Self::TextImage { order, .. }
            | Self::ImageText { order, .. }
            | Self::Heading { order, .. }
            | Self::Subheading { order, .. }
            | Self::Separator { order }
            | Self::Quote { order, .. }
            | Self::FaqQuestion { order, .. } => *order,
        }
    }

    /// Readable text payload, for block kinds that carry one.
    ///
    /// Image-bearing kinds return `None` even though `TextImage`/`ImageText`
    /// hold text: only `text`, `heading`, `subheading` and `quote` blocks
    /// contribute to extracted plain text.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. }
            | Self::Heading { content, .. }
            | Self::Subheading { content, .. }
            | Self::Quote { content, .. } => Some(content),
            Self::Image { .. }
            | Self::TextImage { .. }
            | Self::ImageText { .. }
            | Self::Separator { .. }
            | Self::FaqQuestion { .. } => None,
        }
    }

    /// Text that counts toward word totals: plain text plus FAQ
    /// question/answer pairs.
    pub fn countable_text(&self) -> impl Iterator<Item = &str> {
        let (first, second) = match self {
            Self::FaqQuestion {
                question, answer, ..
            } => (Some(question.as_str()), Some(answer.as_str())),
            _ => (self.text_content(), None),
        };
        [first, second].into_iter().flatten()
    }

    /// Whether this block displays an image.
    pub fn has_image(&self) -> bool {
        match self {
            Self::Image { .. } => true,
            Self::TextImage { image_content, .. } | Self::ImageText { image_content, .. } => {
                image_content.is_some()
            }
            _ => false,
        }
    }

    /// Alt text of the block's image, if any is set and non-empty.
    pub fn image_alt(&self) -> Option<&str> {
        match self {
            Self::Image { image_alt, .. }
            | Self::TextImage { image_alt, .. }
            | Self::ImageText { image_alt, .. } => {
                image_alt.as_deref().filter(|alt| !alt.trim().is_empty())
            }
            _ => None,
        }
    }
}
