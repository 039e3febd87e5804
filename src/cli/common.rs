//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::{debug, log, post::BlogPost};

/// Load one post document from a JSON file.
pub fn load_post(path: &Path) -> Result<BlogPost> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read post file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse post JSON in {}", path.display()))
}

/// Load every `*.json` post in a directory, sorted by file name.
///
/// Unparseable files are skipped with a warning rather than aborting the
/// whole run.
pub fn load_posts(dir: &Path) -> Result<Vec<BlogPost>> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read posts directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    for path in paths {
        match load_post(&path) {
            Ok(post) => posts.push(post),
            Err(err) => log!("warning"; "skipping {}: {err:#}", path.display()),
        }
    }
    debug!("posts"; "loaded {} posts from {}", posts.len(), dir.display());
    Ok(posts)
}
