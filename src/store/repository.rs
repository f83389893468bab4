use async_trait::async_trait;
use std::collections::HashMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::shared::AppError;

/// Trait for whole-value key-value storage
///
/// `set` replaces the stored value entirely; readers observe either the old
/// value or the new one, never a mix.
#[async_trait]
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;
}

/// In-memory implementation of KeyValueStore for development and testing
///
/// Values are lost when the application restarts.
pub struct InMemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryKeyValueStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Creates an in-memory store with pre-populated entries
    pub fn with_entries(entries: Vec<(String, String)>) -> Self {
        Self {
            entries: Mutex::new(entries.into_iter().collect()),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::Storage("In-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let value = self.lock()?.get(key).cloned();

        match &value {
            Some(v) => debug!(key = %key, bytes = v.len(), "Value found in memory"),
            None => debug!(key = %key, "Value not found in memory"),
        }

        Ok(value)
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        debug!(key = %key, bytes = value.len(), "Storing value in memory");
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }
}

/// File-backed store: one `<key>.json` file per key inside a directory.
///
/// Every write goes to its own uniquely named temporary file in the same
/// directory, which is then renamed over the target. A failed write leaves the
/// previous value in place, and concurrent writers never share a temp file.
pub struct FileKeyValueStore {
    dir: PathBuf,
    // Held across a write so two writers for this handle never interleave
    write_lock: tokio::sync::Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, AppError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            warn!(key = %key, "Rejected storage key");
            return Err(AppError::Storage(format!("Invalid storage key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

/// Writes `bytes` to a fresh temp file in `dir` and renames it onto `path`.
/// The temp file is removed when any step fails.
fn write_replacing(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::Builder::new()
        .prefix(".prikup-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(value) => {
                debug!(key = %key, bytes = value.len(), "Value read from file");
                Ok(Some(value))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(key = %key, "No file for key");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read value from file");
                Err(AppError::Storage(e.to_string()))
            }
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let path = self.path_for(key)?;
        debug!(key = %key, bytes = value.len(), "Writing value to file");

        let _guard = self.write_lock.lock().await;
        let dir = self.dir.clone();
        let target = path.clone();
        let written =
            tokio::task::spawn_blocking(move || write_replacing(&dir, &target, value.as_bytes()))
                .await
                .map_err(|e| {
                    warn!(error = %e, "File write task failed");
                    AppError::Internal
                })?;

        if let Err(e) = written {
            warn!(error = %e, path = %path.display(), "Failed to write value to file");
            return Err(AppError::Storage(e.to_string()));
        }

        debug!(key = %key, "Value written to file");
        Ok(())
    }
}
