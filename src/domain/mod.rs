//! Domain layer - Posts, ordering and the derived board view

pub mod post;
pub mod sort_order;
pub mod view;

pub use post::{generate_id, Post, PostDraft};
pub use sort_order::SortOrder;
pub use view::{build_view, normalize_search_term, BoardView, EmptyReason};
