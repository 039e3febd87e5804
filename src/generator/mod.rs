//! Derived artifacts generated from post content.
//!
//! Excerpts, tables of contents, related-post rankings, sitemaps, and
//! structured data. All pure: input in, artifact out.

mod excerpt;
mod related;
mod schema;
mod sitemap;
mod toc;

pub use excerpt::{DEFAULT_EXCERPT_CHARS, excerpt};
pub use related::{DEFAULT_RELATED_LIMIT, related_posts};
pub use schema::blog_schema;
pub use sitemap::{SitemapOptions, sitemap};
pub use toc::{TocEntry, table_of_contents};
