//! Profile store: one serialized profile under a single well-known key.
//!
//! Writes replace the previous record wholesale. There is no merge and no
//! history. Content that fails to parse, or was written under another schema
//! version, reads back as absent.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::warn;

use crate::models::profile::{Profile, StoredProfile, PROFILE_SCHEMA_VERSION};

/// The storage key the profile lives under.
pub const PROFILE_KEY: &str = "cvjoyride_profile";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Synchronous key-value persistence for the single profile.
///
/// Callers on the async runtime should go through `spawn_blocking`.
pub trait ProfileStore: Send + Sync {
    /// Overwrites any existing profile.
    fn save(&self, profile: Profile) -> Result<StoredProfile, StoreError>;

    /// `Ok(None)` when nothing usable is stored.
    fn load(&self) -> Result<Option<StoredProfile>, StoreError>;

    /// Removes the stored profile. Not an error if none exists.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Parses raw stored text, treating malformed or foreign-schema content as absent.
fn decode(raw: &str) -> Option<StoredProfile> {
    match serde_json::from_str::<StoredProfile>(raw) {
        Ok(stored) if stored.schema_version == PROFILE_SCHEMA_VERSION => Some(stored),
        Ok(stored) => {
            warn!(
                "Ignoring stored profile with schema version {} (expected {})",
                stored.schema_version, PROFILE_SCHEMA_VERSION
            );
            None
        }
        Err(e) => {
            warn!("Ignoring malformed stored profile: {e}");
            None
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FileProfileStore
// ────────────────────────────────────────────────────────────────────────────

/// Stores the profile as `<dir>/cvjoyride_profile.json`.
pub struct FileProfileStore {
    dir: PathBuf,
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileProfileStore {
    /// Creates `dir` if it does not exist.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(format!("{PROFILE_KEY}.json"));
        Ok(FileProfileStore {
            dir,
            path,
            lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileStore for FileProfileStore {
    fn save(&self, profile: Profile) -> Result<StoredProfile, StoreError> {
        let stored = StoredProfile::new(profile);
        let body = serde_json::to_string_pretty(&stored)?;

        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        // Write beside the target, then rename over it so readers never see a partial file.
        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(body.as_bytes())
            .map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;

        Ok(stored)
    }

    fn load(&self) -> Result<Option<StoredProfile>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(decode(&raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // Non-UTF-8 content is malformed, not an I/O failure.
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Ignoring non-UTF-8 stored profile: {e}");
                Ok(None)
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryProfileStore
// ────────────────────────────────────────────────────────────────────────────

/// Keeps the serialized profile in memory. Same text round-trip as the file store.
#[derive(Default)]
pub struct MemoryProfileStore {
    raw: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with arbitrary stored text.
    #[cfg(test)]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        MemoryProfileStore {
            raw: Mutex::new(Some(raw.into())),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save(&self, profile: Profile) -> Result<StoredProfile, StoreError> {
        let stored = StoredProfile::new(profile);
        let body = serde_json::to_string(&stored)?;
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = Some(body);
        Ok(stored)
    }

    fn load(&self) -> Result<Option<StoredProfile>, StoreError> {
        let raw = self.raw.lock().unwrap_or_else(|e| e.into_inner());
        Ok(raw.as_deref().and_then(decode))
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.raw.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::fixtures::jane_doe;
    use tempfile::TempDir;

    fn other_profile() -> Profile {
        Profile {
            full_name: "Thabo Mokoena".to_string(),
            email: "thabo@example.com".to_string(),
            phone: "+27 82 111 2222".to_string(),
            location: "Upington".to_string(),
            skills: "Forklift, Stock Control".to_string(),
            experience: "Warehouse Clerk, 5 years".to_string(),
            education: "N3 Certificate".to_string(),
            job_preferences: "Logistics".to_string(),
            receive_job_alerts: false,
        }
    }

    fn stores() -> (TempDir, Vec<Box<dyn ProfileStore>>) {
        let dir = TempDir::new().unwrap();
        let file = FileProfileStore::open(dir.path()).unwrap();
        let stores: Vec<Box<dyn ProfileStore>> = vec![
            Box::new(file) as Box<dyn ProfileStore>,
            Box::new(MemoryProfileStore::new()),
        ];
        (dir, stores)
    }

    #[test]
    fn test_empty_store_loads_none() {
        let (_dir, stores) = stores();
        for store in stores {
            assert!(store.load().unwrap().is_none());
        }
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let (_dir, stores) = stores();
        for store in stores {
            let saved = store.save(jane_doe()).unwrap();
            let loaded = store.load().unwrap().expect("profile should be present");
            assert_eq!(loaded.profile, jane_doe());
            assert_eq!(loaded, saved);
        }
    }

    #[test]
    fn test_second_save_overwrites_first() {
        let (_dir, stores) = stores();
        for store in stores {
            store.save(jane_doe()).unwrap();
            store.save(other_profile()).unwrap();
            let loaded = store.load().unwrap().unwrap();
            assert_eq!(loaded.profile, other_profile());
        }
    }

    #[test]
    fn test_clear_removes_profile_and_is_idempotent() {
        let (_dir, stores) = stores();
        for store in stores {
            store.save(jane_doe()).unwrap();
            store.clear().unwrap();
            assert!(store.load().unwrap().is_none());
            store.clear().unwrap();
        }
    }

    #[test]
    fn test_file_store_writes_under_profile_key() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::open(dir.path()).unwrap();
        store.save(jane_doe()).unwrap();

        assert_eq!(
            store.path().file_name().and_then(|n| n.to_str()),
            Some("cvjoyride_profile.json")
        );
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"fullName\": \"Jane Doe\""));
        assert!(raw.contains("\"schemaVersion\": 1"));
    }

    #[test]
    fn test_file_store_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileProfileStore::open(&nested).unwrap();
        store.save(jane_doe()).unwrap();
        assert!(nested.join("cvjoyride_profile.json").exists());
    }

    #[test]
    fn test_malformed_file_loads_as_absent() {
        let dir = TempDir::new().unwrap();
        let store = FileProfileStore::open(dir.path()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());

        fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_unversioned_legacy_record_loads_as_absent() {
        // The bare record the browser used to write, without an envelope.
        let legacy = serde_json::to_string(&jane_doe()).unwrap();
        let store = MemoryProfileStore::with_raw(legacy);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_future_schema_version_loads_as_absent() {
        let mut value = serde_json::to_value(StoredProfile::new(jane_doe())).unwrap();
        value["schemaVersion"] = serde_json::json!(PROFILE_SCHEMA_VERSION + 1);
        let store = MemoryProfileStore::with_raw(value.to_string());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_after_malformed_content_recovers() {
        let store = MemoryProfileStore::with_raw("garbage");
        assert!(store.load().unwrap().is_none());
        store.save(jane_doe()).unwrap();
        assert_eq!(store.load().unwrap().unwrap().profile, jane_doe());
    }
}
