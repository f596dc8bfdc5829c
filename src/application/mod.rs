//! Application layer - Use cases and orchestration

pub mod board;
pub mod edit_session;
pub mod init;
pub mod manage_config;

pub use board::{Board, FileBoard};
pub use edit_session::{EditSession, Submitted};
pub use manage_config::ConfigService;
