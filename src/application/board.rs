//! Board controller: owns the repository, edit session and view settings

use crate::application::edit_session::{EditSession, Submitted};
use crate::domain::{build_view, BoardView, Post, SortOrder};
use crate::error::Result;
use crate::infrastructure::{
    BoardDirectory, Clock, FileStorage, KeyValueStorage, PostRepository, PostStore, SystemClock,
};
use tracing::info;

/// Board backed by a `.board/` directory and the wall clock
pub type FileBoard = Board<FileStorage, SystemClock>;

/// All mutable board state lives here: the repository, the current edit
/// session, and the search term and sort order used to build the view.
#[derive(Debug)]
pub struct Board<S, C> {
    repository: PostRepository<S, C>,
    session: EditSession,
    search_term: String,
    sort_order: SortOrder,
}

impl FileBoard {
    /// Open the board stored in `directory`, using its configured sort order
    pub fn open(directory: &BoardDirectory) -> Result<Self> {
        let config = directory.load_config()?;
        let store = PostStore::new(directory.storage(), config.storage_key.clone());
        Ok(Board::new(
            PostRepository::new(store, SystemClock),
            config.get_sort(),
        ))
    }
}

impl<S: KeyValueStorage, C: Clock> Board<S, C> {
    pub fn new(repository: PostRepository<S, C>, sort_order: SortOrder) -> Self {
        Board {
            repository,
            session: EditSession::default(),
            search_term: String::new(),
            sort_order,
        }
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.session
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    pub fn find(&self, id: &str) -> Option<Post> {
        self.repository.find_by_id(id)
    }

    /// Submit the form: creates when idle, updates the edit target otherwise
    pub fn submit(&mut self, title: &str, content: &str, is_notice: bool) -> Result<Submitted> {
        let submitted = self
            .session
            .submit(&self.repository, title, content, is_notice)?;

        match &submitted {
            Submitted::Created(post) => info!(id = %post.id, "post created"),
            Submitted::Updated(post) => info!(id = %post.id, "post updated"),
        }
        Ok(submitted)
    }

    pub fn start_edit(&mut self, id: &str) -> Result<Post> {
        self.session.start_edit(&self.repository, id)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    /// Delete post `id`, leaving edit mode if it was the edit target
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let removed = self.repository.delete(id)?;
        self.session.forget(id);

        if removed {
            info!(id, "post deleted");
        }
        Ok(removed)
    }

    /// Recompute the view from the stored posts and current settings
    pub fn view(&self) -> BoardView {
        build_view(&self.repository.all(), &self.search_term, self.sort_order)
    }
}
