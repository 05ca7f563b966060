use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use crate::errors::CoreError;

/// String key-value slot the dashboard persists into — the shape of
/// browser local/session storage, abstracted so stores can be handed a
/// test double instead of a real backend.
///
/// Reads are infallible by contract: a backend that cannot read a key
/// reports absence (and may log), because missing or unreadable data
/// always degrades to "empty", never to a fatal error.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete the value under `key`. Deleting an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

/// In-memory backend: session-scoped storage and the test double.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: HashMap<String, String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.slots.remove(key);
        Ok(())
    }
}

/// File-backed backend (native only): the whole slot map is one JSON
/// object on disk, rewritten on every mutation — the durable analog of
/// browser local storage.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    slots: HashMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileBackend {
    /// Open (or create) the backing file. A missing file starts empty; a
    /// corrupt one is logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("Corrupt storage file {}: {e}; starting empty", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self { path, slots }
    }

    fn flush(&self) -> Result<(), CoreError> {
        let raw = serde_json::to_string(&self.slots)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.slots.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        if self.slots.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
