//! In-memory post collection operations: filter, sort, paginate.
//!
//! The engine never talks to a store; the surrounding CMS fetches post
//! documents and hands them over as a slice. These helpers operate on that
//! already-materialized collection.

use crate::post::BlogPost;
use crate::utils::date::DateTimeUtc;

/// Filter criteria for a post listing.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub published_only: bool,
    pub category: Option<String>,
    pub tag: Option<String>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
}

/// Sort order for a post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    Oldest,
    Title,
}

/// A single page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Select posts matching all criteria, preserving input order.
pub fn filter_posts<'a>(posts: &'a [BlogPost], filter: &PostFilter) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| !filter.published_only || post.is_published())
        .filter(|post| {
            filter
                .category
                .as_deref()
                .is_none_or(|category| post.category.eq_ignore_ascii_case(category))
        })
        .filter(|post| {
            filter
                .tag
                .as_deref()
                .is_none_or(|tag| post.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        })
        .filter(|post| {
            filter.search.as_deref().is_none_or(|needle| {
                let needle = needle.to_lowercase();
                post.title.to_lowercase().contains(&needle)
                    || post.description.to_lowercase().contains(&needle)
            })
        })
        .collect()
}

/// Sort a listing in place. Posts without a parseable `created_at` sort as
/// oldest. Ties keep their relative order.
pub fn sort_posts(posts: &mut [&BlogPost], key: SortKey) {
    match key {
        SortKey::Newest => posts.sort_by(|a, b| date_key(b).cmp(&date_key(a))),
        SortKey::Oldest => posts.sort_by(|a, b| date_key(a).cmp(&date_key(b))),
        SortKey::Title => posts.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase())),
    }
}

/// Slice out a 1-based page. A zero `per_page` is clamped to 1; a page past
/// the end yields an empty item list with the totals intact.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Paginated<'_, T> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(per_page).max(1);

    let start = (page - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Paginated {
        items: &items[start..end],
        page,
        per_page,
        total_items,
        total_pages,
    }
}

fn date_key(post: &BlogPost) -> (u16, u8, u8, u8, u8, u8) {
    post.created_at
        .as_deref()
        .and_then(DateTimeUtc::parse)
        .map(|dt| (dt.year, dt.month, dt.day, dt.hour, dt.minute, dt.second))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PostStatus;

    fn post(title: &str, category: &str, created_at: &str) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            category: category.to_string(),
            status: PostStatus::Published,
            created_at: (!created_at.is_empty()).then(|| created_at.to_string()),
            ..BlogPost::default()
        }
    }

    #[test]
    fn test_filter_published_only() {
        let mut draft = post("Draft", "news", "2025-01-01");
        draft.status = PostStatus::Draft;
        let posts = vec![post("Live", "news", "2025-01-02"), draft];

        let filter = PostFilter {
            published_only: true,
            ..PostFilter::default()
        };
        let result = filter_posts(&posts, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Live");
    }

    #[test]
    fn test_filter_category_case_insensitive() {
        let posts = vec![post("A", "News", ""), post("B", "guides", "")];
        let filter = PostFilter {
            category: Some("news".to_string()),
            ..PostFilter::default()
        };
        let result = filter_posts(&posts, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "A");
    }

    #[test]
    fn test_filter_tag() {
        let mut tagged = post("Tagged", "", "");
        tagged.tags = vec!["Rust".to_string()];
        let posts = vec![tagged, post("Plain", "", "")];
        let filter = PostFilter {
            tag: Some("rust".to_string()),
            ..PostFilter::default()
        };
        assert_eq!(filter_posts(&posts, &filter).len(), 1);
    }

    #[test]
    fn test_filter_search_title_and_description() {
        let mut described = post("Quiet", "", "");
        described.description = "All about Keyword research".to_string();
        let posts = vec![post("KEYWORD in title", "", ""), described, post("Other", "", "")];
        let filter = PostFilter {
            search: Some("keyword".to_string()),
            ..PostFilter::default()
        };
        assert_eq!(filter_posts(&posts, &filter).len(), 2);
    }

    #[test]
    fn test_sort_newest_and_oldest() {
        let posts = vec![
            post("Mid", "", "2025-02-01"),
            post("New", "", "2025-03-01"),
            post("Old", "", "2025-01-01"),
            post("Undated", "", ""),
        ];
        let mut listing: Vec<&BlogPost> = posts.iter().collect();

        sort_posts(&mut listing, SortKey::Newest);
        let titles: Vec<&str> = listing.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New", "Mid", "Old", "Undated"]);

        sort_posts(&mut listing, SortKey::Oldest);
        let titles: Vec<&str> = listing.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Undated", "Old", "Mid", "New"]);
    }

    #[test]
    fn test_sort_title() {
        let posts = vec![post("banana", "", ""), post("Apple", "", ""), post("cherry", "", "")];
        let mut listing: Vec<&BlogPost> = posts.iter().collect();
        sort_posts(&mut listing, SortKey::Title);
        let titles: Vec<&str> = listing.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_paginate_slices() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, 1, 3);
        assert_eq!(page.items, &[1, 2, 3]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 7);

        let page = paginate(&items, 3, 3);
        assert_eq!(page.items, &[7]);
    }

    #[test]
    fn test_paginate_out_of_range() {
        let items: Vec<u32> = (1..=3).collect();
        let page = paginate(&items, 9, 3);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_paginate_degenerate_inputs() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);

        let items: Vec<u32> = (1..=4).collect();
        let page = paginate(&items, 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 1);
        assert_eq!(page.items, &[1]);
    }
}
