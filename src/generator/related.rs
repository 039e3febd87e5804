//! Related-post ranking.

use rustc_hash::FxHashSet;

use crate::post::BlogPost;

/// Default number of related posts returned.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Relevance of `candidate` to `current`: +3 same category, +2 per shared
/// tag, +5 same series.
fn relevance(current: &BlogPost, candidate: &BlogPost) -> u32 {
    let mut score = 0u32;

    if !current.category.is_empty() && candidate.category == current.category {
        score += 3;
    }

    let tags: FxHashSet<&str> = current.tags.iter().map(String::as_str).collect();
    let shared = candidate
        .tags
        .iter()
        .filter(|tag| tags.contains(tag.as_str()))
        .count();
    score += 2 * shared as u32;

    if let (Some(a), Some(b)) = (&current.series, &candidate.series) {
        if a == b {
            score += 5;
        }
    }

    score
}

/// Rank `all` against `current` and return up to `limit` related posts.
///
/// The current post (matched by slug) and unpublished posts are excluded;
/// only candidates with a positive relevance survive. Ordering is by
/// relevance descending, ties keeping input order.
pub fn related_posts<'a>(
    current: &BlogPost,
    all: &'a [BlogPost],
    limit: usize,
) -> Vec<&'a BlogPost> {
    let mut scored: Vec<(&BlogPost, u32)> = all
        .iter()
        .filter(|candidate| candidate.slug != current.slug)
        .filter(|candidate| candidate.is_published())
        .map(|candidate| (candidate, relevance(current, candidate)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(limit);
    scored.into_iter().map(|(post, _)| post).collect()
}
