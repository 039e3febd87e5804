//! Structured data (schema.org) for page heads.
//!
//! Pure data: builds the `BlogPosting` JSON-LD object a renderer embeds in
//! a `<script type="application/ld+json">` tag. No HTML generation here.

use serde_json::{Map, Value, json};

use crate::post::BlogPost;
use crate::utils::date::DateTimeUtc;

/// Build a schema.org `BlogPosting` object for a post.
///
/// Empty or unset fields are omitted rather than serialized as empty
/// strings. Timestamps are normalized to RFC 3339 when they parse;
/// unparseable ones are dropped.
pub fn blog_schema(post: &BlogPost, base_url: &str) -> Value {
    let base_url = base_url.trim_end_matches('/');
    let url = format!("{}/blog/{}", base_url, post.slug);

    let mut schema = Map::new();
    schema.insert("@context".to_string(), json!("https://schema.org"));
    schema.insert("@type".to_string(), json!("BlogPosting"));

    let headline = non_empty(&post.seo.meta_title).unwrap_or(&post.title);
    if !headline.is_empty() {
        schema.insert("headline".to_string(), json!(headline));
    }

    let description = non_empty(&post.seo.meta_description).or(non_empty(&post.description));
    if let Some(description) = description {
        schema.insert("description".to_string(), json!(description));
    }

    if let Some(image) = post.featured_image.as_deref() {
        let absolute = if image.starts_with('/') {
            format!("{base_url}{image}")
        } else {
            image.to_string()
        };
        schema.insert("image".to_string(), json!(absolute));
    }

    if let Some(author) = non_empty(&post.author) {
        schema.insert(
            "author".to_string(),
            json!({"@type": "Person", "name": author}),
        );
    }

    let keywords = if post.seo.keywords.is_empty() {
        &post.tags
    } else {
        &post.seo.keywords
    };
    if !keywords.is_empty() {
        schema.insert("keywords".to_string(), json!(keywords.join(", ")));
    }

    if let Some(published) = parse_rfc3339(post.created_at.as_deref()) {
        schema.insert("datePublished".to_string(), json!(published));
    }
    if let Some(modified) = parse_rfc3339(post.updated_at.as_deref()) {
        schema.insert("dateModified".to_string(), json!(modified));
    }

    schema.insert(
        "mainEntityOfPage".to_string(),
        json!({"@type": "WebPage", "@id": url}),
    );
    schema.insert("url".to_string(), json!(url));

    Value::Object(schema)
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_rfc3339(s: Option<&str>) -> Option<String> {
    s.and_then(DateTimeUtc::parse).map(DateTimeUtc::to_rfc3339)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::{PostStatus, SeoMeta};

    fn post() -> BlogPost {
        BlogPost {
            title: "Plain title".to_string(),
            description: "Plain description".to_string(),
            author: "Jordan Reyes".to_string(),
            slug: "plain-title".to_string(),
            tags: vec!["rust".to_string(), "seo".to_string()],
            status: PostStatus::Published,
            created_at: Some("2025-01-02".to_string()),
            updated_at: Some("2025-01-03T10:00:00Z".to_string()),
            ..BlogPost::default()
        }
    }

    #[test]
    fn test_schema_basics() {
        let schema = blog_schema(&post(), "https://example.com");
        assert_eq!(schema["@type"], "BlogPosting");
        assert_eq!(schema["headline"], "Plain title");
        assert_eq!(schema["description"], "Plain description");
        assert_eq!(schema["author"]["name"], "Jordan Reyes");
        assert_eq!(schema["url"], "https://example.com/blog/plain-title");
        assert_eq!(
            schema["mainEntityOfPage"]["@id"],
            "https://example.com/blog/plain-title"
        );
    }

    #[test]
    fn test_schema_prefers_seo_meta() {
        let mut post = post();
        post.seo = SeoMeta {
            meta_title: "Meta title wins".to_string(),
            meta_description: "Meta description wins".to_string(),
            ..SeoMeta::default()
        };
        let schema = blog_schema(&post, "https://example.com");
        assert_eq!(schema["headline"], "Meta title wins");
        assert_eq!(schema["description"], "Meta description wins");
    }

    #[test]
    fn test_schema_dates_normalized() {
        let schema = blog_schema(&post(), "https://example.com");
        assert_eq!(schema["datePublished"], "2025-01-02T00:00:00Z");
        assert_eq!(schema["dateModified"], "2025-01-03T10:00:00Z");
    }

    #[test]
    fn test_schema_omits_missing_fields() {
        let minimal = BlogPost {
            slug: "minimal".to_string(),
            ..BlogPost::default()
        };
        let schema = blog_schema(&minimal, "https://example.com");
        let object = schema.as_object().unwrap();
        assert!(!object.contains_key("headline"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("author"));
        assert!(!object.contains_key("image"));
        assert!(!object.contains_key("keywords"));
        assert!(!object.contains_key("datePublished"));
    }

    #[test]
    fn test_schema_image_made_absolute() {
        let mut post = post();
        post.featured_image = Some("/img/hero.png".to_string());
        let schema = blog_schema(&post, "https://example.com/");
        assert_eq!(schema["image"], "https://example.com/img/hero.png");
    }

    #[test]
    fn test_schema_keywords_prefer_seo_list() {
        let mut post = post();
        post.seo.keywords = vec!["content".to_string(), "quality".to_string()];
        let schema = blog_schema(&post, "https://example.com");
        assert_eq!(schema["keywords"], "content, quality");

        post.seo.keywords.clear();
        let schema = blog_schema(&post, "https://example.com");
        assert_eq!(schema["keywords"], "rust, seo");
    }
}
