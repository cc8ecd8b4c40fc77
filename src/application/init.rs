//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new journal
pub struct InitService;

impl InitService {
    /// Initialize a new journal at the specified path.
    pub fn execute(path: &Path) -> Result<FileSystemRepository> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&Config::new())?;

        log::info!("initialized journal at {}", path.display());
        Ok(repo)
    }
}
