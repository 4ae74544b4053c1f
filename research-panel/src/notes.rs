//! NotesStore — the single persisted research note
//!
//! The note lives under one fixed key and is overwritten wholesale on save.

use crate::error::HostError;
use crate::host::KeyValueStorage;
use std::sync::Arc;

/// Storage key of the research note
pub const NOTES_KEY: &str = "researchNotes";

pub struct NotesStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl NotesStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Persisted note, `None` when absent or empty
    pub async fn load(&self) -> Result<Option<String>, HostError> {
        let value = self.storage.get(NOTES_KEY).await?;
        Ok(value.filter(|v| !v.is_empty()))
    }

    /// Replace the persisted note with `value`
    pub async fn save(&self, value: &str) -> Result<(), HostError> {
        self.storage.set(NOTES_KEY, value).await?;
        log::info!("[NOTES] Saved research note ({} chars)", value.len());
        Ok(())
    }
}
