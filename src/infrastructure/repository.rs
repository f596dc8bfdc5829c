//! Post repository

use crate::domain::{generate_id, Post, PostDraft};
use crate::error::{BoardError, Result};
use crate::infrastructure::{Clock, KeyValueStorage, PostStore};
use tracing::debug;

/// CRUD over the post collection.
///
/// Every mutation loads the full snapshot, changes it and saves it back
/// before returning.
#[derive(Debug, Clone)]
pub struct PostRepository<S, C> {
    store: PostStore<S>,
    clock: C,
}

impl<S: KeyValueStorage, C: Clock> PostRepository<S, C> {
    pub fn new(store: PostStore<S>, clock: C) -> Self {
        PostRepository { store, clock }
    }

    /// Current snapshot in stored order
    pub fn all(&self) -> Vec<Post> {
        self.store.load()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Post> {
        self.store.load().into_iter().find(|post| post.id == id)
    }

    /// Append a new post built from `draft`
    pub fn create(&self, draft: &PostDraft) -> Result<Post> {
        let mut posts = self.store.load();
        let now = self.clock.now_millis();

        let id = loop {
            let candidate = generate_id(now);
            if !posts.iter().any(|post| post.id == candidate) {
                break candidate;
            }
        };

        let post = Post::new(id, draft, now);
        posts.push(post.clone());
        self.store.save(&posts)?;

        debug!(id = %post.id, notice = post.is_notice, "created post");
        Ok(post)
    }

    /// Replace the editable fields of post `id`
    pub fn update(&self, id: &str, draft: &PostDraft) -> Result<Post> {
        let mut posts = self.store.load();
        let now = self.clock.now_millis();

        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| BoardError::NotFound(id.to_string()))?;
        post.apply(draft, now);
        let updated = post.clone();

        self.store.save(&posts)?;

        debug!(id = %updated.id, "updated post");
        Ok(updated)
    }

    /// Remove post `id`; returns false if no such post exists
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut posts = self.store.load();
        let before = posts.len();
        posts.retain(|post| post.id != id);

        if posts.len() == before {
            debug!(id, "delete skipped, no such post");
            return Ok(false);
        }

        self.store.save(&posts)?;
        debug!(id, "deleted post");
        Ok(true)
    }
}
