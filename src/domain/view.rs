//! Render-ready projection of the post collection

use crate::domain::{Post, SortOrder};
use serde::Serialize;

/// Why a list came out empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReason {
    /// The collection holds no posts of this kind at all
    NoData,
    /// Posts of this kind exist but none match the search term
    NoMatch,
}

impl EmptyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyReason::NoData => "no-data",
            EmptyReason::NoMatch => "no-match",
        }
    }
}

/// Filtered, partitioned and sorted posts ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub notices: Vec<Post>,
    pub regular: Vec<Post>,
    pub notice_count: usize,
    pub regular_count: usize,
    pub is_searching: bool,
    pub empty_notice_reason: Option<EmptyReason>,
    pub empty_regular_reason: Option<EmptyReason>,
}

/// Trim and lowercase a raw search term
pub fn normalize_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Compute the view for a snapshot of posts.
///
/// Pure: the same posts, term and order always give the same view. Each
/// partition is stably sorted by `created_at`, so posts created in the same
/// millisecond keep their stored relative order.
pub fn build_view(posts: &[Post], search_term: &str, sort_order: SortOrder) -> BoardView {
    let term = normalize_search_term(search_term);

    let (mut notices, mut regular): (Vec<Post>, Vec<Post>) = posts
        .iter()
        .filter(|post| post.matches(&term))
        .cloned()
        .partition(|post| post.is_notice);

    sort_by_created(&mut notices, sort_order);
    sort_by_created(&mut regular, sort_order);

    let has_notices = posts.iter().any(|post| post.is_notice);
    let has_regular = posts.iter().any(|post| !post.is_notice);

    BoardView {
        notice_count: notices.len(),
        regular_count: regular.len(),
        is_searching: !term.is_empty(),
        empty_notice_reason: empty_reason(&notices, has_notices),
        empty_regular_reason: empty_reason(&regular, has_regular),
        notices,
        regular,
    }
}

fn sort_by_created(posts: &mut [Post], order: SortOrder) {
    match order {
        SortOrder::Asc => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Desc => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
}

fn empty_reason(shown: &[Post], any_stored: bool) -> Option<EmptyReason> {
    if !shown.is_empty() {
        None
    } else if any_stored {
        Some(EmptyReason::NoMatch)
    } else {
        Some(EmptyReason::NoData)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, title: &str, content: &str, is_notice: bool, created_at: i64) -> Post {
        Post {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            is_notice,
            created_at,
            updated_at: None,
        }
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_collection_is_no_data() {
        for term in ["", "anything", "   "] {
            let view = build_view(&[], term, SortOrder::Desc);
            assert_eq!(view.empty_notice_reason, Some(EmptyReason::NoData));
            assert_eq!(view.empty_regular_reason, Some(EmptyReason::NoData));
            assert_eq!(view.notice_count, 0);
            assert_eq!(view.regular_count, 0);
        }
    }

    #[test]
    fn test_partition_and_desc_order() {
        let posts = vec![
            post("a", "A", "B", false, 1000),
            post("c", "C", "D", true, 2000),
        ];

        let view = build_view(&posts, "", SortOrder::Desc);
        assert_eq!(ids(&view.notices), vec!["c"]);
        assert_eq!(ids(&view.regular), vec!["a"]);
        assert_eq!(view.notice_count, 1);
        assert_eq!(view.regular_count, 1);
        assert!(!view.is_searching);
        assert_eq!(view.empty_notice_reason, None);
        assert_eq!(view.empty_regular_reason, None);
    }

    #[test]
    fn test_sort_directions() {
        let posts = vec![
            post("mid", "t", "c", false, 2000),
            post("old", "t", "c", false, 1000),
            post("new", "t", "c", false, 3000),
        ];

        let asc = build_view(&posts, "", SortOrder::Asc);
        assert_eq!(ids(&asc.regular), vec!["old", "mid", "new"]);

        let desc = build_view(&posts, "", SortOrder::Desc);
        assert_eq!(ids(&desc.regular), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_ties_keep_stored_order() {
        let posts = vec![
            post("first", "t", "c", false, 1000),
            post("second", "t", "c", false, 1000),
            post("older", "t", "c", false, 500),
            post("third", "t", "c", false, 1000),
        ];

        let desc = build_view(&posts, "", SortOrder::Desc);
        assert_eq!(ids(&desc.regular), vec!["first", "second", "third", "older"]);

        let asc = build_view(&posts, "", SortOrder::Asc);
        assert_eq!(ids(&asc.regular), vec!["older", "first", "second", "third"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let posts = vec![
            post("n", "Notice A", "body", true, 1),
            post("r", "Regular", "body", false, 2),
        ];

        let view = build_view(&posts, "  NOTICE ", SortOrder::Desc);
        assert!(view.is_searching);
        assert_eq!(ids(&view.notices), vec!["n"]);
        assert!(view.regular.is_empty());
        assert_eq!(view.empty_regular_reason, Some(EmptyReason::NoMatch));
    }

    #[test]
    fn test_search_spans_title_and_content() {
        let posts = vec![post("x", "Weekly", "meeting notes", false, 1)];

        let view = build_view(&posts, "weekly meeting", SortOrder::Desc);
        assert_eq!(view.regular_count, 1);
    }

    #[test]
    fn test_mixed_empty_reasons() {
        let posts = vec![post("r", "Regular", "body", false, 1)];

        let view = build_view(&posts, "zzz", SortOrder::Desc);
        assert_eq!(view.empty_notice_reason, Some(EmptyReason::NoData));
        assert_eq!(view.empty_regular_reason, Some(EmptyReason::NoMatch));
    }

    #[test]
    fn test_view_is_repeatable() {
        let posts = vec![
            post("a", "Alpha", "x", false, 10),
            post("b", "Beta", "x", true, 10),
            post("c", "Gamma", "x", false, 10),
            post("d", "Delta", "x", true, 5),
        ];

        let first = build_view(&posts, "a", SortOrder::Asc);
        for _ in 0..5 {
            assert_eq!(build_view(&posts, "a", SortOrder::Asc), first);
        }
    }

    #[test]
    fn test_empty_reason_serialization() {
        assert_eq!(EmptyReason::NoData.as_str(), "no-data");
        assert_eq!(
            serde_json::to_string(&EmptyReason::NoMatch).unwrap(),
            "\"no-match\""
        );
    }
}
