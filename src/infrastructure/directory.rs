//! Board directory: `.board/config.toml` plus one JSON file per storage key

use crate::error::{BoardError, Result};
use crate::infrastructure::{Config, FileStorage};
use std::fs;
use std::path::{Path, PathBuf};

const BOARD_DIR: &str = ".board";
const CONFIG_FILE: &str = "config.toml";

/// Root of a board on disk
#[derive(Debug, Clone)]
pub struct BoardDirectory {
    pub root: PathBuf,
}

impl BoardDirectory {
    pub fn new(root: PathBuf) -> Self {
        BoardDirectory { root }
    }

    /// BOARD_ROOT if set, otherwise the nearest ancestor of the current
    /// directory that holds a board config
    pub fn discover() -> Result<Self> {
        match std::env::var_os("BOARD_ROOT") {
            Some(root) => {
                let directory = BoardDirectory::new(PathBuf::from(root));
                if directory.is_initialized() {
                    Ok(directory)
                } else {
                    Err(BoardError::Config(format!(
                        "BOARD_ROOT points at '{}', which has no {}/{}. \
                        Run 'board init' there or unset BOARD_ROOT.",
                        directory.root.display(),
                        BOARD_DIR,
                        CONFIG_FILE
                    )))
                }
            }
            None => Self::discover_from(&std::env::current_dir()?),
        }
    }

    /// Nearest board at or above `start`
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .map(|dir| BoardDirectory::new(dir.to_path_buf()))
            .find(BoardDirectory::is_initialized)
            .ok_or_else(|| BoardError::NotBoardDirectory(start.to_path_buf()))
    }

    fn board_dir(&self) -> PathBuf {
        self.root.join(BOARD_DIR)
    }

    /// A board exists once its config file has been written
    pub fn is_initialized(&self) -> bool {
        self.board_dir().join(CONFIG_FILE).is_file()
    }

    /// Create `.board/` and write the initial config.
    ///
    /// An existing `.board/` is never reused, even one without a config.
    pub fn initialize(&self, config: &Config) -> Result<()> {
        let board_dir = self.board_dir();
        if board_dir.exists() {
            return Err(BoardError::Config(format!(
                "{} already holds a {} directory",
                self.root.display(),
                BOARD_DIR
            )));
        }

        fs::create_dir(&board_dir)?;
        self.save_config(config)
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Key-value storage for posts, rooted at `.board/`
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.board_dir())
    }
}
