//! Blog post aggregate.
//!
//! The document shape the engine is handed by the surrounding CMS. Fields
//! are camelCase on the wire and lenient on input: anything missing
//! defaults to empty so malformed-but-type-valid documents never fail to
//! load.

use serde::{Deserialize, Serialize};

use crate::content::ContentBlock;

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

/// Search-engine metadata attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoMeta {
    pub meta_title: String,
    pub meta_description: String,
    /// The single phrase the author targets for ranking.
    pub focus_keyword: String,
    pub keywords: Vec<String>,
}

/// A blog post document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub content: Vec<ContentBlock>,
    pub author: String,
    pub tags: Vec<String>,
    pub category: String,
    /// Optional series this post belongs to.
    pub series: Option<String>,
    pub status: PostStatus,
    /// URL-safe identifier derived from the title; unique across all posts.
    pub slug: String,
    pub seo: SeoMeta,
    pub featured_image: Option<String>,
    /// Cached reading time in minutes. Informational only: the engine
    /// recomputes metrics from `content` and never trusts stored values.
    pub read_time: Option<u32>,
    pub word_count: Option<u32>,
    /// ISO 8601 timestamps (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`).
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_draft() {
        let post = BlogPost::default();
        assert_eq!(post.status, PostStatus::Draft);
        assert!(!post.is_published());
    }

    #[test]
    fn test_deserialize_minimal() {
        let post: BlogPost = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(post.title, "Hello");
        assert!(post.content.is_empty());
        assert!(post.seo.focus_keyword.is_empty());
        assert!(post.featured_image.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "title": "Post",
            "status": "published",
            "seo": {"metaTitle": "Post | Site", "focusKeyword": "rust seo"},
            "featuredImage": "/img/hero.png",
            "createdAt": "2025-03-01",
            "updatedAt": "2025-03-05T10:00:00Z"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert!(post.is_published());
        assert_eq!(post.seo.meta_title, "Post | Site");
        assert_eq!(post.seo.focus_keyword, "rust seo");
        assert_eq!(post.featured_image.as_deref(), Some("/img/hero.png"));
        assert_eq!(post.updated_at.as_deref(), Some("2025-03-05T10:00:00Z"));
    }

    #[test]
    fn test_content_blocks_nested() {
        let json = r#"{
            "title": "Post",
            "content": [
                {"type": "heading", "content": "Intro", "headingLevel": 1, "order": 0},
                {"type": "text", "content": "Body text", "order": 1}
            ]
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.content.len(), 2);
        assert_eq!(post.content[1].text_content(), Some("Body text"));
    }
}
