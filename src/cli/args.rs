//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// seolint content quality CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seolint.toml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyze a post and print its quality report
    #[command(visible_alias = "a")]
    Analyze {
        /// Post JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Emit the report as JSON instead of a terminal report
        #[arg(short, long)]
        json: bool,
    },

    /// Generate sitemap.xml from a directory of post JSON files
    #[command(visible_alias = "s")]
    Sitemap {
        /// Directory containing post JSON files
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        /// Override site.base_url from config
        #[arg(short, long, value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,

        /// Write to this path instead of the configured one
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Emit schema.org BlogPosting JSON-LD for a post
    Schema {
        /// Post JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Override site.base_url from config
        #[arg(short, long, value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,
    },

    /// Rank related posts for a post against a directory
    #[command(visible_alias = "r")]
    Related {
        /// Post JSON file
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Directory containing candidate post JSON files
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        /// Maximum related posts to return
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Derive a URL slug from a title
    Slug {
        /// Post title
        title: String,

        /// Ensure uniqueness against slugs of posts in this directory
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}
