//! Initialize board use case

use crate::domain::SortOrder;
use crate::error::Result;
use crate::infrastructure::{BoardDirectory, Config};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new board at the specified path.
pub fn init(path: &Path, sort: SortOrder) -> Result<BoardDirectory> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let directory = BoardDirectory::new(path.to_path_buf());
    directory.initialize(&Config::new(sort))?;

    info!(root = %path.display(), %sort, "initialized board");
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config() {
        let temp = TempDir::new().unwrap();

        let directory = init(temp.path(), SortOrder::Asc).unwrap();
        assert!(directory.is_initialized());
        assert_eq!(directory.load_config().unwrap().sort, SortOrder::Asc);
    }

    #[test]
    fn test_init_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("new-board");

        init(&target, SortOrder::Desc).unwrap();
        assert!(target.join(".board/config.toml").exists());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();

        init(temp.path(), SortOrder::Desc).unwrap();
        let result = init(temp.path(), SortOrder::Desc);
        assert!(matches!(result, Err(BoardError::Config(_))));
    }
}
