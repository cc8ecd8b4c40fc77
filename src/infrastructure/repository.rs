//! File system repository

use crate::error::{MoodError, Result};
use crate::infrastructure::record_store::RecordStore;
use crate::infrastructure::storage::FileKeyValueStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the metadata directory marking a journal root
pub const MOOD_DIR: &str = ".moodjour";

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodjour/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodjour/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodjour directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodjour directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory.
    /// MOODJOUR_ROOT takes precedence when set.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODJOUR_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_mood_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodError::Config(format!(
                    "MOODJOUR_ROOT is set to '{}' but no {} directory found. \
                    Run 'moodjour init' in that directory or unset MOODJOUR_ROOT.",
                    path.display(),
                    MOOD_DIR
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_mood_dir(&current) {
                log::debug!("journal root found at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodError::NotMoodDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_mood_dir(path: &Path) -> bool {
        path.join(MOOD_DIR).is_dir()
    }

    /// Blob storage living inside the metadata directory
    pub fn key_value_store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.root.join(MOOD_DIR))
    }

    /// Read the persisted records once
    pub fn open_records(&self) -> Result<RecordStore<FileKeyValueStore>> {
        RecordStore::load(self.key_value_store())
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_mood_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let mood_dir = self.root.join(MOOD_DIR);

        if mood_dir.exists() {
            return Err(MoodError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&mood_dir)?;
        Ok(())
    }
}
