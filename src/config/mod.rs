//! Engine configuration management for `seolint.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                            |
//! |--------------|----------------------------------------------------|
//! | `[site]`     | Site origin and blog path prefix                   |
//! | `[analysis]` | Reading speed, excerpt length, related-post limit  |
//! | `[sitemap]`  | Output path, changefreq, priority                  |
//!
//! Every field has a default; a missing config file means defaults. A
//! config file passed explicitly on the command line must exist. Unknown
//! keys are warned about and ignored.

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::generator::SitemapOptions;
use crate::log;

/// Config file searched for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "seolint.toml";

/// Accepted sitemap `changefreq` values.
const CHANGEFREQ_VALUES: [&str; 7] = [
    "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
];

/// Root configuration structure representing seolint.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Absolute path the config was loaded from (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub site: SiteSection,
    pub analysis: AnalysisSection,
    pub sitemap: SitemapSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute site origin, e.g. `https://example.com`.
    pub base_url: String,
    /// Path prefix under which posts are served.
    pub blog_path: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            blog_path: "/blog".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSection {
    pub words_per_minute: usize,
    pub excerpt_length: usize,
    pub related_limit: usize,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            words_per_minute: crate::metrics::WORDS_PER_MINUTE,
            excerpt_length: crate::generator::DEFAULT_EXCERPT_CHARS,
            related_limit: crate::generator::DEFAULT_RELATED_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapSection {
    pub path: PathBuf,
    pub changefreq: String,
    pub priority: f32,
}

impl Default for SitemapSection {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            changefreq: "monthly".to_string(),
            priority: 0.8,
        }
    }
}

impl EngineConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist; with no explicit path, a missing
    /// `seolint.toml` in the working directory falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let mut config = Self::from_path(&path)?;
        config.config_path = Some(path);
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a specific config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate field values after parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.site.base_url.is_empty()
            && !self.site.base_url.starts_with("http://")
            && !self.site.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "site.base_url must start with http:// or https://, got `{}`",
                self.site.base_url
            )));
        }
        if self.analysis.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "analysis.words_per_minute must be at least 1".to_string(),
            ));
        }
        if self.analysis.excerpt_length == 0 {
            return Err(ConfigError::Validation(
                "analysis.excerpt_length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.sitemap.priority) {
            return Err(ConfigError::Validation(format!(
                "sitemap.priority must be within 0.0-1.0, got {}",
                self.sitemap.priority
            )));
        }
        if !CHANGEFREQ_VALUES.contains(&self.sitemap.changefreq.as_str()) {
            return Err(ConfigError::Validation(format!(
                "sitemap.changefreq must be one of {CHANGEFREQ_VALUES:?}, got `{}`",
                self.sitemap.changefreq
            )));
        }
        Ok(())
    }

    /// Sitemap options borrowed from this config.
    pub fn sitemap_options(&self) -> SitemapOptions<'_> {
        SitemapOptions {
            base_url: &self.site.base_url,
            blog_path: &self.site.blog_path,
            changefreq: &self.sitemap.changefreq,
            priority: self.sitemap.priority,
        }
    }
}
