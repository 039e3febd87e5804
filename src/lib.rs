//! Content quality and SEO scoring engine for structured blog content.
//!
//! Blog posts arrive as an array of typed content blocks plus metadata;
//! everything here is a pure function over that in-memory document:
//!
//! - [`metrics`]: word count, reading time, keyword density
//! - [`checks`] / [`score`]: independent rule checks and their two
//!   aggregate scores (checklist and 0-100 overall)
//! - [`generator`]: excerpts, tables of contents, related-post ranking,
//!   sitemaps, schema.org structured data
//! - [`slug`]: URL slug derivation and uniqueness
//! - [`catalog`]: filter/sort/paginate over post collections
//!
//! The engine performs no I/O; the [`cli`] module wraps it for running
//! against post documents stored as JSON files.

pub mod catalog;
pub mod checks;
pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod logger;
pub mod metrics;
pub mod post;
pub mod score;
pub mod slug;
pub mod utils;
