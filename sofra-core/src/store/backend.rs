//! Durable key-value storage behind the store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{SofraError, SofraResult};

/// String-keyed storage of JSON-encoded values.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> SofraResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> SofraResult<()>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> SofraResult<Option<String>> {
        let path = self.path_for(key);

        if !path.exists() {
            return Ok(None);
        }

        std::fs::read_to_string(&path).map(Some).map_err(|e| {
            SofraError::Storage(format!("Could not read {}: {e}", path.display()))
        })
    }

    /// Write to a temp file first, then rename over the old value.
    fn set(&mut self, key: &str, value: &str) -> SofraResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)
            .map_err(|e| SofraError::Storage(format!("Could not write {}: {e}", temp.display())))?;
        std::fs::rename(&temp, &path)
            .map_err(|e| SofraError::Storage(format!("Could not replace {}: {e}", path.display())))?;

        Ok(())
    }
}

/// In-memory storage for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `set` fail until switched off again.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SofraResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> SofraResult<()> {
        if self.fail_writes {
            return Err(SofraError::Storage(format!("write of '{key}' rejected")));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));
        assert_eq!(store.dir(), dir.path().join("data"));

        assert_eq!(store.get("events").unwrap(), None);

        store.set("events", "[]").unwrap();
        store.set("events", "[1]").unwrap();

        assert_eq!(store.get("events").unwrap().as_deref(), Some("[1]"));
        assert!(dir.path().join("data/events.json").exists());
        assert!(!dir.path().join("data/events.json.tmp").exists());
    }

    #[test]
    fn test_memory_store_failure_switch() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);

        assert!(store.set("language", "\"tr\"").is_err());
        assert_eq!(store.value("language"), None);

        store.set_fail_writes(false);
        store.set("language", "\"tr\"").unwrap();
        assert_eq!(store.value("language"), Some("\"tr\""));
        assert_eq!(store.writes(), 1);
    }
}
