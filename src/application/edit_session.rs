//! Edit session state machine

use crate::domain::{Post, PostDraft};
use crate::error::{BoardError, Result};
use crate::infrastructure::{Clock, KeyValueStorage, PostRepository};
use tracing::debug;

/// Which post, if any, the form is currently editing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// Submitting creates a new post
    #[default]
    Idle,
    /// Submitting updates the post with this id
    Editing(String),
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created(Post),
    Updated(Post),
}

impl Submitted {
    pub fn post(&self) -> &Post {
        match self {
            Submitted::Created(post) | Submitted::Updated(post) => post,
        }
    }
}

impl EditSession {
    /// Id of the post being edited
    pub fn target(&self) -> Option<&str> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(id.as_str()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    /// Begin editing post `id`, returning it so the form can be prefilled.
    ///
    /// An unknown id leaves the session idle.
    pub fn start_edit<S, C>(&mut self, repository: &PostRepository<S, C>, id: &str) -> Result<Post>
    where
        S: KeyValueStorage,
        C: Clock,
    {
        match repository.find_by_id(id) {
            Some(post) => {
                *self = EditSession::Editing(post.id.clone());
                Ok(post)
            }
            None => {
                *self = EditSession::Idle;
                Err(BoardError::NotFound(id.to_string()))
            }
        }
    }

    /// Abandon the current edit without touching stored posts
    pub fn cancel(&mut self) {
        *self = EditSession::Idle;
    }

    /// Create or update a post depending on the session state.
    ///
    /// Invalid input is rejected before any state change. Otherwise the
    /// session always ends idle, including when the edit target has
    /// disappeared in the meantime.
    pub fn submit<S, C>(
        &mut self,
        repository: &PostRepository<S, C>,
        title: &str,
        content: &str,
        is_notice: bool,
    ) -> Result<Submitted>
    where
        S: KeyValueStorage,
        C: Clock,
    {
        let draft = PostDraft::new(title, content, is_notice)?;

        match std::mem::take(self) {
            EditSession::Idle => repository.create(&draft).map(Submitted::Created),
            EditSession::Editing(id) => repository.update(&id, &draft).map(Submitted::Updated),
        }
    }

    /// Drop back to idle if `id` is the edit target; returns whether it was
    pub fn forget(&mut self, id: &str) -> bool {
        if self.target() == Some(id) {
            debug!(id, "edit target deleted, leaving edit mode");
            *self = EditSession::Idle;
            true
        } else {
            false
        }
    }
}
