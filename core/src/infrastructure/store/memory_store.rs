use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, journal::ports::PersistedStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl PersistedStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, CoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| CoreError::StorageError("memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| CoreError::StorageError("memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
