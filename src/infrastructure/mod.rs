//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod directory;
pub mod repository;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use directory::BoardDirectory;
pub use repository::PostRepository;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{PostStore, DEFAULT_STORAGE_KEY};
