//! Sitemap generation.
//!
//! Renders a sitemap.xml document listing published posts for search
//! engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:image="http://www.google.com/schemas/sitemap-image/1.1">
//!   <url>
//!     <loc>https://example.com/blog/hello</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.8</priority>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use crate::post::BlogPost;
use crate::utils::date::DateTimeUtc;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// URL construction and entry defaults for a sitemap.
#[derive(Debug, Clone)]
pub struct SitemapOptions<'a> {
    /// Absolute site origin, e.g. `https://example.com`.
    pub base_url: &'a str,
    /// Path prefix under which posts are served.
    pub blog_path: &'a str,
    pub changefreq: &'a str,
    pub priority: f32,
}

impl Default for SitemapOptions<'_> {
    fn default() -> Self {
        Self {
            base_url: "",
            blog_path: "/blog",
            changefreq: "monthly",
            priority: 0.8,
        }
    }
}

/// Render a sitemap for the published posts in `posts`.
pub fn sitemap(posts: &[BlogPost], options: &SitemapOptions) -> String {
    Sitemap::build(posts, options).into_xml(options)
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
    image: Option<String>,
}

impl Sitemap {
    fn build(posts: &[BlogPost], options: &SitemapOptions) -> Self {
        let base_url = options.base_url.trim_end_matches('/');
        let blog_path = options.blog_path.trim_end_matches('/');

        let urls: Vec<UrlEntry> = posts
            .iter()
            .filter(|post| post.is_published())
            .map(|post| UrlEntry {
                loc: format!("{}{}/{}", base_url, blog_path, post.slug),
                lastmod: post
                    .updated_at
                    .as_deref()
                    .and_then(DateTimeUtc::parse)
                    .map(DateTimeUtc::to_date_string),
                image: post
                    .featured_image
                    .as_deref()
                    .map(|src| absolute_url(base_url, src)),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self, options: &SitemapOptions) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\" xmlns:image=\"");
        xml.push_str(IMAGE_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("    <changefreq>");
            xml.push_str(&escape_xml(options.changefreq));
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&format!("{:.1}", options.priority));
            xml.push_str("</priority>\n");
            if let Some(image) = entry.image {
                xml.push_str("    <image:image>\n      <image:loc>");
                xml.push_str(&escape_xml(&image));
                xml.push_str("</image:loc>\n    </image:image>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Resolve a possibly site-relative URL against the base.
fn absolute_url(base_url: &str, url: &str) -> String {
    if url.starts_with('/') {
        format!("{base_url}{url}")
    } else {
        url.to_string()
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostStatus;

    fn published(slug: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            status: PostStatus::Published,
            ..BlogPost::default()
        }
    }

    fn options() -> SitemapOptions<'static> {
        SitemapOptions {
            base_url: "https://example.com",
            ..SitemapOptions::default()
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = sitemap(&[], &options());

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(SITEMAP_NS));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_published_only() {
        let draft = BlogPost {
            slug: "draft-post".to_string(),
            ..BlogPost::default()
        };
        let posts = vec![published("first"), draft, published("second")];
        let xml = sitemap(&posts, &options());

        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains("<loc>https://example.com/blog/first</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/second</loc>"));
        assert!(!xml.contains("draft-post"));
    }

    #[test]
    fn test_sitemap_lastmod_date_part() {
        let post = BlogPost {
            updated_at: Some("2025-02-10T08:30:00Z".to_string()),
            ..published("dated")
        };
        let xml = sitemap(&[post], &options());
        assert!(xml.contains("<lastmod>2025-02-10</lastmod>"));
    }

    #[test]
    fn test_sitemap_invalid_lastmod_omitted() {
        let post = BlogPost {
            updated_at: Some("whenever".to_string()),
            ..published("undated")
        };
        let xml = sitemap(&[post], &options());
        assert!(!xml.contains("<lastmod>"));
    }

    #[test]
    fn test_sitemap_changefreq_and_priority() {
        let xml = sitemap(&[published("p")], &options());
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
    }

    #[test]
    fn test_sitemap_featured_image() {
        let post = BlogPost {
            featured_image: Some("/img/hero.png".to_string()),
            ..published("with-image")
        };
        let xml = sitemap(&[post], &options());
        assert!(xml.contains("<image:image>"));
        assert!(xml.contains("<image:loc>https://example.com/img/hero.png</image:loc>"));
    }

    #[test]
    fn test_sitemap_absolute_image_untouched() {
        let post = BlogPost {
            featured_image: Some("https://cdn.example.com/hero.png".to_string()),
            ..published("cdn-image")
        };
        let xml = sitemap(&[post], &options());
        assert!(xml.contains("<image:loc>https://cdn.example.com/hero.png</image:loc>"));
    }

    #[test]
    fn test_sitemap_no_image_no_block() {
        let xml = sitemap(&[published("plain")], &options());
        assert!(!xml.contains("<image:image>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let post = published("a&b");
        let xml = sitemap(&[post], &options());
        assert!(xml.contains("<loc>https://example.com/blog/a&amp;b</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = sitemap(&[published("p")], &options());
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().unwrap().trim(), "</urlset>");
    }

    #[test]
    fn test_trailing_slash_base_url() {
        let opts = SitemapOptions {
            base_url: "https://example.com/",
            ..SitemapOptions::default()
        };
        let xml = sitemap(&[published("p")], &opts);
        assert!(xml.contains("<loc>https://example.com/blog/p</loc>"));
    }
}
