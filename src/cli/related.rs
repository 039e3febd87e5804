//! `related` command: rank related posts.

use anyhow::Result;
use std::path::Path;

use crate::cli::common::{load_post, load_posts};
use crate::config::EngineConfig;
use crate::generator::related_posts;
use crate::log;

pub fn run(file: &Path, dir: &Path, limit: Option<usize>, config: &EngineConfig) -> Result<()> {
    let post = load_post(file)?;
    let candidates = load_posts(dir)?;
    let limit = limit.unwrap_or(config.analysis.related_limit);

    let related = related_posts(&post, &candidates, limit);
    if related.is_empty() {
        log!("related"; "no related posts found");
        return Ok(());
    }

    for (rank, candidate) in related.iter().enumerate() {
        println!("{}. {} ({})", rank + 1, candidate.title, candidate.slug);
    }
    Ok(())
}
