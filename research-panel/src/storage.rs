//! Local key/value storage backends.

use crate::error::HostError;
use crate::host::KeyValueStorage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-process storage, lost when dropped
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        let values = self
            .values
            .lock()
            .map_err(|e| HostError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| HostError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage persisted as one JSON object in a file, the shape of an
/// extension's local storage area.
///
/// Every write rewrites the whole file.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, empty when the file does not exist yet
    async fn read_raw(&self) -> Result<String, HostError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(HostError::Storage(e.to_string())),
        }
    }

    fn parse(&self, raw: &str) -> Result<HashMap<String, String>, HostError> {
        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(raw).map_err(|e| {
            HostError::Storage(format!("Corrupt storage file {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl KeyValueStorage for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        let raw = self.read_raw().await?;
        Ok(self.parse(&raw)?.remove(key))
    }

    /// A corrupt file is replaced rather than blocking every later write
    async fn set(&self, key: &str, value: &str) -> Result<(), HostError> {
        let raw = self.read_raw().await?;
        let mut values = match self.parse(&raw) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("[NOTES] {}; starting from empty storage", e);
                HashMap::new()
            }
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| HostError::Storage(e.to_string()))?;
        }

        let serialized =
            serde_json::to_string_pretty(&values).map_err(|e| HostError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, serialized)
            .await
            .map_err(|e| HostError::Storage(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").await.unwrap(), None);

        storage.set("k", "v1").await.unwrap();
        storage.set("k", "v2").await.unwrap();
        assert_eq!(storage.get("k").await.unwrap(), Some("v2".to_string()));
    }

    #[tokio::test]
    async fn test_json_file_storage_missing_file() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("storage.json"));
        assert_eq!(storage.get("researchNotes").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_json_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/storage.json");

        JsonFileStorage::new(&path).set("researchNotes", "abc").await.unwrap();
        JsonFileStorage::new(&path).set("other", "x").await.unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(
            reopened.get("researchNotes").await.unwrap(),
            Some("abc".to_string())
        );
        assert_eq!(reopened.get("other").await.unwrap(), Some("x".to_string()));
    }

    #[tokio::test]
    async fn test_json_file_storage_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStorage::new(&path).get("k").await.unwrap_err();
        assert!(matches!(err, HostError::Storage(_)));
    }

    #[tokio::test]
    async fn test_json_file_storage_set_recovers_from_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        storage.set("researchNotes", "fresh").await.unwrap();

        assert_eq!(
            storage.get("researchNotes").await.unwrap(),
            Some("fresh".to_string())
        );
    }
}
