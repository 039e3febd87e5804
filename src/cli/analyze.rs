//! `analyze` command: quality report for one post.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

use crate::cli::common::load_post;
use crate::config::EngineConfig;
use crate::generator::excerpt;
use crate::log;
use crate::metrics::{reading_time_at, word_count};
use crate::post::BlogPost;
use crate::score::{SeoReport, overall_score};

pub fn run(file: &Path, json_output: bool, config: &EngineConfig) -> Result<()> {
    let post = load_post(file)?;
    let report = SeoReport::analyze(&post);
    let overall = overall_score(&post);
    let words = word_count(&post.content);
    let minutes = reading_time_at(&post.content, config.analysis.words_per_minute);
    let preview = excerpt(&post.content, config.analysis.excerpt_length);

    if json_output {
        let payload = json!({
            "title": post.title,
            "slug": post.slug,
            "wordCount": words,
            "readTime": minutes,
            "excerpt": preview,
            "overallScore": overall,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_report(&post, &report, overall, words, minutes, &preview);
    Ok(())
}

fn print_report(
    post: &BlogPost,
    report: &SeoReport,
    overall: u32,
    words: usize,
    minutes: usize,
    preview: &str,
) {
    let title = if post.title.is_empty() {
        "(untitled post)"
    } else {
        &post.title
    };
    log!("analyze"; "{title}");
    println!();

    for check in &report.checks {
        let mark = if check.passed {
            format!("{}", "✓".green())
        } else {
            format!("{}", "✗".red())
        };
        println!(
            "  {mark} {:<18} {:>2}/10  {}",
            check.name,
            check.score,
            check.message.dimmed()
        );
    }

    println!();
    println!(
        "  checklist {} / {}   overall {} / 100",
        report.score.bold(),
        report.max_score,
        overall.bold()
    );
    println!("  {words} words, {minutes} min read");
    if !preview.is_empty() {
        println!("  {}", preview.dimmed());
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("  {}", "suggestions:".yellow());
        for suggestion in &report.suggestions {
            println!("  - {suggestion}");
        }
    }
}
