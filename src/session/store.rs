//! Score storage.
//!
//! The session only needs a two-method key/value contract to keep the best
//! score across games: `get` returns the stored value or `None`, `set`
//! replaces it. Two implementations are provided:
//!
//! - `MemoryScoreStore`: process-lifetime map, for tests and embedding
//! - `FileScoreStore`: bincode-encoded map in a single file, rewritten on
//!   every `set`

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

/// Key under which the session keeps the best score.
pub const MAX_SCORE_KEY: &str = "max_score";

/// Key/value storage for scores.
pub trait ScoreStore {
    /// Get a stored value.
    fn get(&self, key: &str) -> Option<u64>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

/// In-memory score store.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    entries: FxHashMap<String, u64>,
}

impl MemoryScoreStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: u64) -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(key.into(), value);
        Self { entries }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed score store.
///
/// The whole map is loaded on `open` and written back on every `set`. A
/// `set` whose write fails leaves the in-memory map unchanged.
#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
    entries: FxHashMap<String, u64>,
}

impl FileScoreStore {
    /// Open a store, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries: FxHashMap<String, u64> = if path.exists() {
            let bytes = std::fs::read(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            bincode::deserialize(&bytes).map_err(|source| StoreError::Decode {
                path: path.clone(),
                source,
            })?
        } else {
            FxHashMap::default()
        };

        log::debug!("opened score store {} ({} entries)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.entries).map_err(StoreError::Encode)?;
        std::fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.entries.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}
