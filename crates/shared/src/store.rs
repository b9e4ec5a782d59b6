use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::warn;

use crate::error::BriefingError;
use crate::models::Briefing;

/// Where the serialized briefing collection lives.
///
/// The store does whole-artifact reads and writes only; a backend never
/// sees individual records.
pub trait StorageBackend: Send + Sync {
    /// Current artifact contents, or `None` if it does not exist yet.
    fn read(&self) -> Result<Option<String>, BriefingError>;

    /// Replace the whole artifact.
    fn write(&self, contents: &str) -> Result<(), BriefingError>;

    fn exists(&self) -> bool;
}

/// Single JSON file on disk. Parent directories are created on first write.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>, BriefingError> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| BriefingError::Persistence(format!("failed to read {}: {e}", self.path.display())))
    }

    fn write(&self, contents: &str) -> Result<(), BriefingError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                BriefingError::Persistence(format!(
                    "failed to create {}: {e}",
                    parent.display()
                ))
            })?;
        }
        fs::write(&self.path, contents).map_err(|e| {
            BriefingError::Persistence(format!("failed to write {}: {e}", self.path.display()))
        })
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

/// Backend held entirely in memory, for tests.
#[derive(Default)]
pub struct MemoryBackend {
    contents: Mutex<Option<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>, BriefingError> {
        Ok(self.contents.lock().unwrap().clone())
    }

    fn write(&self, contents: &str) -> Result<(), BriefingError> {
        *self.contents.lock().unwrap() = Some(contents.to_string());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.contents.lock().unwrap().is_some()
    }
}

/// What an id-targeted deletion found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A matching record existed and was removed.
    Deleted,
    /// The collection exists but holds no record with that id.
    NoSuchRecord,
    /// The collection artifact does not exist at all.
    NoCollection,
}

/// Durable collection of briefing records.
///
/// Every operation loads the collection fresh from the backend, mutates in
/// memory, and rewrites the whole artifact. There is no locking against
/// concurrent writers: two processes mutating the same artifact race
/// (lost-update hazard), so deployments are assumed single-writer.
#[derive(Clone)]
pub struct BriefingStore {
    backend: Arc<dyn StorageBackend>,
}

impl BriefingStore {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::with_backend(Arc::new(FileBackend::new(path)))
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Append a new record and return it.
    pub fn create(&self, filename: &str, summary: &str) -> Result<Briefing, BriefingError> {
        let mut briefings = self.load();
        let briefing = Briefing::new(Self::next_id(&briefings), filename, summary);
        briefings.push(briefing.clone());
        self.persist(&briefings)?;
        Ok(briefing)
    }

    /// The full collection in insertion order. Never fails: a missing,
    /// unreadable, or malformed artifact reads as an empty collection.
    pub fn list(&self) -> Vec<Briefing> {
        self.load()
    }

    /// Remove the first record whose id matches.
    pub fn delete(&self, id: i64) -> Result<DeleteOutcome, BriefingError> {
        if !self.backend.exists() {
            return Ok(DeleteOutcome::NoCollection);
        }

        let mut briefings = self.load();
        match briefings.iter().position(|b| b.id == id) {
            Some(index) => {
                briefings.remove(index);
                self.persist(&briefings)?;
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NoSuchRecord),
        }
    }

    // Ids must stay strictly increasing for the lifetime of the store, even
    // under rapid successive creates and after deleting the newest record.
    // The wall-clock candidate is bumped past the stored maximum on
    // collision.
    fn next_id(briefings: &[Briefing]) -> i64 {
        let candidate = Utc::now().timestamp_millis();
        match briefings.iter().map(|b| b.id).max() {
            Some(max) if candidate <= max => max + 1,
            _ => candidate,
        }
    }

    fn load(&self) -> Vec<Briefing> {
        let contents = match self.backend.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("briefing collection unreadable, treating as empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(briefings) => briefings,
            Err(e) => {
                warn!("briefing collection malformed, resetting to empty: {e}");
                Vec::new()
            }
        }
    }

    fn persist(&self, briefings: &[Briefing]) -> Result<(), BriefingError> {
        let json = serde_json::to_string_pretty(briefings)
            .map_err(|e| BriefingError::Persistence(format!("failed to serialize collection: {e}")))?;
        self.backend.write(&json)
    }
}
