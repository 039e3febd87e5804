//! seolint - content quality and SEO scoring for structured blog content.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use seolint::cli::{self, Cli, Commands};
use seolint::config::EngineConfig;
use seolint::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = EngineConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Analyze { file, json } => cli::analyze::run(file, *json, &config),
        Commands::Sitemap {
            dir,
            base_url,
            output,
            stdout,
        } => cli::sitemap::run(dir, base_url.as_deref(), output.as_deref(), *stdout, &config),
        Commands::Schema { file, base_url } => cli::schema::run(file, base_url.as_deref(), &config),
        Commands::Related { file, dir, limit } => cli::related::run(file, dir, *limit, &config),
        Commands::Slug { title, dir } => cli::slug::run(title, dir.as_deref()),
    }
}
