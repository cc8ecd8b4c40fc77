//! Capped, persisted record list

use crate::domain::Record;
use crate::error::{MoodError, Result};
use crate::infrastructure::storage::KeyValueStore;

/// Storage key holding the whole record list
pub const RECORDS_KEY: &str = "emotionRecords";

/// Records kept; older ones fall off
pub const MAX_RECORDS: usize = 100;

/// Records shown in the "recent" list by default
pub const DEFAULT_RECENT: usize = 5;

/// Newest-first record list backed by a single blob.
///
/// The blob is read once in [`RecordStore::load`] and rewritten wholesale on
/// every addition.
#[derive(Debug)]
pub struct RecordStore<S: KeyValueStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn load(store: S) -> Result<Self> {
        let records = match store.get(RECORDS_KEY)? {
            Some(blob) if !blob.trim().is_empty() => serde_json::from_str::<Vec<Record>>(&blob)
                .map_err(|e| MoodError::CorruptStore(e.to_string()))?,
            _ => Vec::new(),
        };
        log::debug!("loaded {} record(s) from '{}'", records.len(), RECORDS_KEY);
        Ok(RecordStore { store, records })
    }

    /// All records, newest first
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn recent(&self, limit: usize) -> &[Record] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    /// Prepend, truncate to [`MAX_RECORDS`] and persist.
    /// Returns the records that fell off the end.
    pub fn add(&mut self, record: Record) -> Result<Vec<Record>> {
        log::info!(
            "adding record {} with {} emotion(s)",
            record.id,
            record.emotions.len()
        );

        let mut updated = Vec::with_capacity(self.records.len() + 1);
        updated.push(record);
        updated.extend(self.records.iter().cloned());
        let evicted = if updated.len() > MAX_RECORDS {
            updated.split_off(MAX_RECORDS)
        } else {
            Vec::new()
        };

        let blob = serde_json::to_string(&updated)?;
        self.store.set(RECORDS_KEY, &blob)?;
        self.records = updated;

        for old in &evicted {
            log::debug!("evicted record {} (cap {})", old.id, MAX_RECORDS);
        }
        Ok(evicted)
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
