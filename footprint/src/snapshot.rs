//! Session snapshots of the last `Results`.
//!
//! A snapshot lets a results view come back after the in-memory value is
//! gone (a new process, a view change). It is a single JSON string under a
//! fixed key. There is no schema versioning: a value that does not parse is
//! treated as absent.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::Results;

/// The fixed key results are stored under.
pub const SNAPSHOT_KEY: &str = "ecoCalcResults";

/// Error type for writing snapshots.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key-value storage for the results snapshot.
pub trait SnapshotStore {
    /// The stored results, or `None` if nothing usable is stored.
    fn load(&self) -> Option<Results>;

    /// Replace the stored results.
    fn save(&self, results: &Results) -> Result<(), SnapshotError>;

    /// Forget the stored results.
    fn clear(&self) -> Result<(), SnapshotError>;
}

fn decode(raw: &str) -> Option<Results> {
    match serde_json::from_str(raw) {
        Ok(results) => Some(results),
        Err(err) => {
            warn!("Ignoring unreadable results snapshot: {err}");
            None
        }
    }
}

/// In-process key-value store, the equivalent of a browser session storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a raw string under a key, bypassing serialization.
    pub fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().insert(key.into(), value.into());
    }

    /// Read the raw string under a key.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds plain strings; keep using it.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<Results> {
        self.get_raw(SNAPSHOT_KEY).as_deref().and_then(decode)
    }

    fn save(&self, results: &Results) -> Result<(), SnapshotError> {
        let raw = serde_json::to_string(results)?;
        self.set_raw(SNAPSHOT_KEY, raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        self.lock().remove(SNAPSHOT_KEY);
        Ok(())
    }
}

/// Per-user snapshot directory: `~/.cache/footprint` on Linux,
/// the local app-data folder on Windows.
pub fn default_dir() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        // Fallback to ~/.cache
        dirs::home_dir()
            .map(|h| h.join(".cache"))
            .unwrap_or_else(|| PathBuf::from("."))
    });
    base.join("footprint")
}

/// Stores the snapshot as `<dir>/ecoCalcResults.json`.
///
/// Writes go to a fresh temporary file in the same directory that is then
/// renamed over the snapshot, so an existing file or link at the snapshot
/// path is replaced, never written through.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store in the per-user cache directory.
    pub fn session() -> Self {
        Self::new(default_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{SNAPSHOT_KEY}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Option<Results> {
        let path = self.path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => decode(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No snapshot at {}", path.display());
                None
            }
            Err(err) => {
                warn!("Could not read snapshot {}: {err}", path.display());
                None
            }
        }
    }

    fn save(&self, results: &Results) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string_pretty(results)?;
        let path = self.path();
        let mut file = tempfile::NamedTempFile::new_in(&self.dir)?;
        file.write_all(raw.as_bytes())?;
        file.persist(&path).map_err(|err| err.error)?;
        info!("Saved results snapshot to {}", path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerSet, ScoringConfig, assess, standard_catalog};

    fn results() -> Results {
        let catalog = standard_catalog();
        let answers: AnswerSet = catalog
            .questions()
            .iter()
            .map(|q| (q.id(), q.max_value()))
            .collect();
        assess(&catalog, &answers, &ScoringConfig::default()).unwrap()
    }

    #[test]
    fn memory_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        let results = results();
        store.save(&results).unwrap();
        assert_eq!(store.load(), Some(results));

        store.clear().unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn memory_stores_under_fixed_key() {
        let store = MemoryStore::new();
        store.save(&results()).unwrap();
        let raw = store.get_raw(SNAPSHOT_KEY).unwrap();
        assert!(raw.contains("\"totalScore\""));
    }

    #[test]
    fn malformed_memory_snapshot_is_absent() {
        let store = MemoryStore::new();
        store.set_raw(SNAPSHOT_KEY, "{not json");
        assert!(store.load().is_none());

        store.set_raw(SNAPSHOT_KEY, r#"{"totalScore": "eleven"}"#);
        assert!(store.load().is_none());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load().is_none());

        let results = results();
        store.save(&results).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load(), Some(results));

        store.clear().unwrap();
        assert!(store.load().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn default_dir_is_per_user() {
        let dir = default_dir();
        assert!(dir.ends_with("footprint"));
        if let Some(cache) = dirs::cache_dir() {
            assert_eq!(dir, cache.join("footprint"));
        }
        assert_eq!(FileStore::session().dir(), dir.as_path());
    }

    #[cfg(unix)]
    #[test]
    fn save_replaces_link_instead_of_following_it() {
        let dir = tempfile::tempdir().unwrap();
        let victim = dir.path().join("victim.txt");
        std::fs::write(&victim, "precious").unwrap();

        let store = FileStore::new(dir.path().join("footprint"));
        std::fs::create_dir_all(store.dir()).unwrap();
        std::os::unix::fs::symlink(&victim, store.path()).unwrap();

        let results = results();
        store.save(&results).unwrap();

        assert_eq!(std::fs::read_to_string(&victim).unwrap(), "precious");
        assert!(!store.path().is_symlink());
        assert_eq!(store.load(), Some(results));
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(store.path(), "stale").unwrap();

        let results = results();
        store.save(&results).unwrap();
        assert_eq!(store.load(), Some(results));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn malformed_file_snapshot_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        std::fs::write(store.path(), "[]").unwrap();
        assert!(store.load().is_none());
    }
}
