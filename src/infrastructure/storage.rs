//! Key-value blob storage

use crate::error::{MoodError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String blobs addressed by a fixed key
pub trait KeyValueStore {
    /// Stored value, or `None` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        FileKeyValueStore { dir }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodError::Io(e)),
        }
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }

        let path = self.path_for(key);
        let tmp_path = self
            .dir
            .join(format!("{}.json.tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}

/// In-process store, used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp.path().to_path_buf());
        assert_eq!(store.get("emotionRecords").unwrap(), None);
    }

    #[test]
    fn test_file_store_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = FileKeyValueStore::new(temp.path().join("nested"));
        store.set("k", "[1]").unwrap();
        store.set("k", "[2]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[2]"));
        assert!(temp.path().join("nested/k.json").exists());

        let leftovers = fs::read_dir(store.dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryKeyValueStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
