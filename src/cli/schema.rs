//! `schema` command: JSON-LD for a post.

use anyhow::{Result, bail};
use std::path::Path;

use crate::cli::common::load_post;
use crate::config::EngineConfig;
use crate::generator::blog_schema;

pub fn run(file: &Path, base_url: Option<&str>, config: &EngineConfig) -> Result<()> {
    let post = load_post(file)?;

    let base_url = base_url.unwrap_or(&config.site.base_url);
    if base_url.is_empty() {
        bail!("no site URL: set site.base_url in seolint.toml or pass --base-url");
    }

    let schema = blog_schema(&post, base_url);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
