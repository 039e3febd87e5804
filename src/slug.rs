//! URL slug generation.
//!
//! Slugs are ASCII: Unicode titles are transliterated before cleaning.
//! Output always matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is empty.

use deunicode::deunicode;
use rustc_hash::FxHashSet;

/// Derive a URL-safe slug from a title.
///
/// Lower-cases, strips everything except alphanumerics, whitespace,
/// underscores and hyphens, then collapses separator runs into single
/// hyphens with no leading or trailing hyphen.
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut separator_pending = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if separator_pending && !slug.is_empty() {
                slug.push('-');
            }
            separator_pending = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            separator_pending = true;
        }
        // Remaining punctuation is stripped without acting as a separator.
    }
    slug
}

/// Derive a slug unique against `taken`, suffixing `-1`, `-2`, ... on
/// collision.
pub fn unique_slug(title: &str, taken: &FxHashSet<String>) -> String {
    let base = slugify(title);
    if !taken.contains(&base) {
        return base;
    }
    let mut n = 1usize;
    loop {
        let candidate = format!("{base}-{n}");
        if !taken.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
