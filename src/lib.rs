//! board - Local bulletin board
//!
//! Keeps short text posts in a local key-value store, with an optional
//! notice flag that pins a post to a separate list. The library owns the
//! post collection (persistence, CRUD, edit mode) and derives a filtered,
//! sorted view of it; the `board` binary is a thin terminal front end.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BoardError;
