//! `sitemap` command: sitemap.xml from a directory of posts.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::cli::common::load_posts;
use crate::config::EngineConfig;
use crate::generator::{SitemapOptions, sitemap};
use crate::log;

pub fn run(
    dir: &Path,
    base_url: Option<&str>,
    output: Option<&Path>,
    to_stdout: bool,
    config: &EngineConfig,
) -> Result<()> {
    let posts = load_posts(dir)?;

    let base_url = base_url.unwrap_or(&config.site.base_url);
    if base_url.is_empty() {
        bail!("no site URL: set site.base_url in seolint.toml or pass --base-url");
    }

    let options = SitemapOptions {
        base_url,
        blog_path: &config.site.blog_path,
        changefreq: &config.sitemap.changefreq,
        priority: config.sitemap.priority,
    };
    let xml = sitemap(&posts, &options);
    let published = posts.iter().filter(|post| post.is_published()).count();

    if to_stdout {
        print!("{xml}");
        return Ok(());
    }

    let path = output.unwrap_or(&config.sitemap.path);
    fs::write(path, &xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
    log!("sitemap"; "{published} urls -> {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_command_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("post.json"),
            r#"{"title": "Hello", "slug": "hello", "status": "published"}"#,
        )
        .unwrap();
        let output = dir.path().join("sitemap.xml");

        let config = EngineConfig::default();
        run(
            dir.path(),
            Some("https://example.com"),
            Some(output.as_path()),
            false,
            &config,
        )
        .unwrap();

        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<loc>https://example.com/blog/hello</loc>"));
    }

    #[test]
    fn test_sitemap_command_requires_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::default();
        let err = run(dir.path(), None, None, true, &config).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }
}
