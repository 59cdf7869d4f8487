use crate::error::Result;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key/value store for user preferences.
///
/// The page persists exactly one flag through this interface, but the
/// interface is explicit and injectable rather than a hidden global so
/// hosts can decide where preferences live.
pub trait PreferenceStore: Send + Sync {
    /// Read a preference value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a preference value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, for tests and hostless use
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .expect("preference lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("preference lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// The whole map is read once on open and rewritten on every set. A single
/// writer is assumed; the page has no concurrent preference writers.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    cache: Mutex<HashMap<String, String>>,
}

impl FilePreferenceStore {
    /// Open a store at the given path; a missing file starts empty
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let cache = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let values: HashMap<String, String> = serde_json::from_str(&content)?;
            debug!(
                "Loaded {} preference(s) from {}",
                values.len(),
                path.display()
            );
            values
        } else {
            debug!("Preference file {} not found, starting empty", path.display());
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    fn persist(&self, values: &HashMap<String, String>) -> Result<()> {
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache
            .lock()
            .expect("preference lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut cache = self.cache.lock().expect("preference lock poisoned");
        cache.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist(&cache) {
            warn!("Failed to persist preference '{}': {}", key, e);
            return Err(e);
        }
        Ok(())
    }
}
