//! Error types for board

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the board application
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Not a board directory: {0}")]
    NotBoardDirectory(PathBuf),

    #[error("Invalid post: {0}")]
    Validation(String),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BoardError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BoardError::NotBoardDirectory(_) => 2,
            BoardError::NotFound(_) => 3,
            BoardError::Validation(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BoardError::NotBoardDirectory(path) => {
                format!(
                    "Not a board directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'board init' in this directory to create a new board\n\
                    • Navigate to an existing board directory\n\
                    • Set BOARD_ROOT environment variable to your board path",
                    path.display()
                )
            }
            BoardError::Validation(msg) => {
                format!(
                    "{}\n\n\
                    Both a title and content are required.\n\
                    Example: board add \"Lunch\" \"Pizza at noon\"",
                    msg
                )
            }
            BoardError::NotFound(id) => {
                format!(
                    "No post with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'board list' to see current post ids\n\
                    • The post may have been deleted",
                    id
                )
            }
            BoardError::Config(msg) => {
                if msg.contains("Invalid sort order") {
                    format!(
                        "{}\n\n\
                        Valid sort orders: asc, desc\n\
                        Example: board config sort asc",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BoardError
pub type Result<T> = std::result::Result<T, BoardError>;
