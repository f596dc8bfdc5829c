//! Persistence boundary for the post collection

use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::KeyValueStorage;
use tracing::{debug, warn};

/// Storage key used when the board config does not name one
pub const DEFAULT_STORAGE_KEY: &str = "simple-board-posts";

/// Reads and writes the whole post collection as one JSON list.
///
/// Missing, unreadable or malformed data loads as an empty collection; it is
/// logged and never reported as an error.
#[derive(Debug, Clone)]
pub struct PostStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PostStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        PostStore {
            storage,
            key: key.into(),
        }
    }

    /// Load the stored collection, or an empty one if nothing usable is stored
    pub fn load(&self) -> Vec<Post> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "could not read stored posts, starting empty");
                return Vec::new();
            }
        };

        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Post>>(&raw) {
            Ok(posts) => posts,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored posts are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored collection
    pub fn save(&self, posts: &[Post]) -> Result<()> {
        let json = serde_json::to_string(posts)?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = posts.len(), "saved posts");
        Ok(())
    }
}
