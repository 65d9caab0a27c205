//! In-memory cache store

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::ports::CacheStore;
use crate::error::CacheError;

#[derive(Default, Clone)]
pub struct InMemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with an entry for testing
    #[cfg(test)]
    pub fn with_entry(self, key: &str, value: &[u8]) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        self
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

fn poisoned(_: impl std::fmt::Display) -> CacheError {
    CacheError::Backend("cache lock poisoned".to_string())
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn add(&self, key: &str, value: &[u8]) -> Result<bool, CacheError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.contains_key(key) {
            return Ok(false);
        }
        entries.insert(key.to_string(), value.to_vec());
        Ok(true)
    }
}
