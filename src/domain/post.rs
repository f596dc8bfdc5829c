//! Post entity and validated post drafts

use crate::error::{BoardError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single bulletin board entry, as persisted in storage.
///
/// Field names are serialized in camelCase (`isNotice`, `createdAt`,
/// `updatedAt`) and timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub is_notice: bool,
    pub created_at: i64,
    /// `None` until the post is edited for the first time
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Post {
    /// Build a never-edited post from a validated draft
    pub fn new(id: String, draft: &PostDraft, created_at: i64) -> Self {
        Post {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            is_notice: draft.is_notice,
            created_at,
            updated_at: None,
        }
    }

    /// Replace the editable fields with those of `draft`.
    ///
    /// `updated_at` never moves below `created_at` or a previous `updated_at`,
    /// even if the clock went backwards between edits.
    pub fn apply(&mut self, draft: &PostDraft, now: i64) {
        self.title = draft.title.clone();
        self.content = draft.content.clone();
        self.is_notice = draft.is_notice;

        let floor = self.updated_at.unwrap_or(self.created_at).max(self.created_at);
        self.updated_at = Some(now.max(floor));
    }

    /// Case-insensitive substring match over "title content".
    ///
    /// `term` must already be normalized (trimmed and lowercased); an empty
    /// term matches every post.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }

        format!("{} {}", self.title, self.content)
            .to_lowercase()
            .contains(term)
    }
}

/// User input for a post that passed validation.
///
/// Title and content are stored trimmed and are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    title: String,
    content: String,
    is_notice: bool,
}

impl PostDraft {
    /// Trim and validate raw form input
    pub fn new(title: &str, content: &str, is_notice: bool) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || content.is_empty() {
            return Err(BoardError::Validation(
                "Title and content must both be filled in".to_string(),
            ));
        }

        Ok(PostDraft {
            title: title.to_string(),
            content: content.to_string(),
            is_notice,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_notice(&self) -> bool {
        self.is_notice
    }
}

/// Generate a post id from a millisecond timestamp plus a random suffix,
/// e.g. `post-1737100000000-3fa9c1`.
pub fn generate_id(now: i64) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..0x0100_0000);
    format!("post-{}-{:06x}", now, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, content: &str) -> PostDraft {
        PostDraft::new(title, content, false).unwrap()
    }

    #[test]
    fn test_draft_trims_input() {
        let d = PostDraft::new("  Hello ", "\tworld\n", true).unwrap();
        assert_eq!(d.title(), "Hello");
        assert_eq!(d.content(), "world");
        assert!(d.is_notice());
    }

    #[test]
    fn test_draft_rejects_blank_title() {
        let result = PostDraft::new("   ", "content", false);
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[test]
    fn test_draft_rejects_blank_content() {
        let result = PostDraft::new("title", "", false);
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[test]
    fn test_new_post_is_unedited() {
        let post = Post::new("post-1".to_string(), &draft("A", "B"), 1000);
        assert_eq!(post.created_at, 1000);
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn test_apply_preserves_identity() {
        let mut post = Post::new("post-1".to_string(), &draft("A", "B"), 1000);
        post.apply(&PostDraft::new("C", "D", true).unwrap(), 2000);

        assert_eq!(post.id, "post-1");
        assert_eq!(post.created_at, 1000);
        assert_eq!(post.title, "C");
        assert_eq!(post.content, "D");
        assert!(post.is_notice);
        assert_eq!(post.updated_at, Some(2000));
    }

    #[test]
    fn test_apply_never_moves_updated_at_backwards() {
        let mut post = Post::new("post-1".to_string(), &draft("A", "B"), 1000);
        post.apply(&draft("A", "B"), 5000);
        post.apply(&draft("A", "B"), 3000);
        assert_eq!(post.updated_at, Some(5000));

        let mut fresh = Post::new("post-2".to_string(), &draft("A", "B"), 1000);
        fresh.apply(&draft("A", "B"), 10);
        assert_eq!(fresh.updated_at, Some(1000));
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let post = Post::new("p".to_string(), &draft("Notice A", "Lunch menu"), 0);
        assert!(post.matches("notice"));
        assert!(post.matches("a lunch"));
        assert!(post.matches("menu"));
        assert!(post.matches(""));
        assert!(!post.matches("dinner"));
    }

    #[test]
    fn test_serialized_field_names() {
        let post = Post::new("post-1".to_string(), &draft("A", "B"), 1000);
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"isNotice\":false"));
        assert!(json.contains("\"createdAt\":1000"));
        assert!(json.contains("\"updatedAt\":null"));
    }

    #[test]
    fn test_deserialize_without_updated_at() {
        let json = r#"{"id":"post-1","title":"A","content":"B","isNotice":true,"createdAt":5}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.is_notice);
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn test_generate_id_format() {
        let id = generate_id(1737100000000);
        assert!(id.starts_with("post-1737100000000-"));
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
