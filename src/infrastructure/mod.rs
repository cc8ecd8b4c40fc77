//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod record_store;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use record_store::{RecordStore, DEFAULT_RECENT, MAX_RECORDS, RECORDS_KEY};
pub use repository::{FileSystemRepository, JournalRepository};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
