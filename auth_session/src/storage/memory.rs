use async_trait::async_trait;
use std::collections::HashMap;

use super::errors::StorageError;
use super::types::{InMemoryMirrorStore, MirrorData, MirrorStore};

const MIRROR_PREFIX: &str = "mirror";

impl InMemoryMirrorStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session mirror store");
        Self {
            entry: HashMap::new(),
        }
    }

    fn make_key(key: &str) -> String {
        format!("{MIRROR_PREFIX}:{key}")
    }
}

impl Default for InMemoryMirrorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MirrorStore for InMemoryMirrorStore {
    async fn init(&self) -> Result<(), StorageError> {
        Ok(()) // Nothing to initialize for in-memory store
    }

    async fn put(&mut self, key: &str, value: MirrorData) -> Result<(), StorageError> {
        let key = Self::make_key(key);
        self.entry.insert(key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<MirrorData>, StorageError> {
        let key = Self::make_key(key);
        Ok(self.entry.get(&key).cloned())
    }

    async fn clear(&mut self) -> Result<(), StorageError> {
        self.entry.clear();
        Ok(())
    }
}
