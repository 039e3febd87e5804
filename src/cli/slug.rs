//! `slug` command: derive a URL slug from a title.

use anyhow::Result;
use rustc_hash::FxHashSet;
use std::path::Path;

use crate::cli::common::load_posts;
use crate::slug::{slugify, unique_slug};

pub fn run(title: &str, dir: Option<&Path>) -> Result<()> {
    let slug = match dir {
        Some(dir) => {
            let taken: FxHashSet<String> = load_posts(dir)?
                .into_iter()
                .map(|post| post.slug)
                .filter(|slug| !slug.is_empty())
                .collect();
            unique_slug(title, &taken)
        }
        None => slugify(title),
    };
    println!("{slug}");
    Ok(())
}
