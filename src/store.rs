//! Record persistence.
//!
//! Extraction hands its result off and keeps nothing. Where the record goes
//! is up to a [`RecordSink`]: a JSON file on disk, or memory in tests.
//! Stores keep records newest first.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::SavedJob;

/// Destination for saved job records.
pub trait RecordSink: Send + Sync {
    /// Add a record ahead of every record already stored.
    fn append(&self, record: SavedJob) -> Result<()>;

    /// All stored records, newest first.
    fn records(&self) -> Result<Vec<SavedJob>>;
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| Error::Store(format!("mutex poisoned: {e}")))
}

/// Records persisted as a pretty-printed JSON array in one file.
///
/// Every append is a read-modify-write of the whole file, serialized through
/// an internal lock so concurrent appends from one process never lose a
/// record.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Store backed by `path`. The file is created on first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<SavedJob>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn save(&self, records: &[SavedJob]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl RecordSink for JsonFileStore {
    fn append(&self, record: SavedJob) -> Result<()> {
        let _guard = lock(&self.write_lock)?;

        let mut records = self.load()?;
        debug!(id = %record.id, existing = records.len(), path = %self.path.display(), "saving job");
        records.insert(0, record);
        self.save(&records)
    }

    fn records(&self) -> Result<Vec<SavedJob>> {
        let _guard = lock(&self.write_lock)?;
        self.load()
    }
}

/// In-memory record store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SavedJob>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemoryStore {
    fn append(&self, record: SavedJob) -> Result<()> {
        lock(&self.records)?.insert(0, record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<SavedJob>> {
        Ok(lock(&self.records)?.clone())
    }
}
