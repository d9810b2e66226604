use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::errors::StorageError;

/// One serialized slot in the mirror scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MirrorData {
    pub value: String,
}

pub struct InMemoryMirrorStore {
    pub(super) entry: HashMap<String, MirrorData>,
}

pub(crate) struct RedisMirrorStore {
    pub(super) client: redis::Client,
}

/// Session-scoped key/value storage backing the persisted mirror.
///
/// The scope holds the last known session for fast restore; `clear` wipes
/// the whole scope, not a single slot, matching browser session storage
/// semantics on sign-out.
#[async_trait]
pub trait MirrorStore: Send + Sync + 'static {
    /// Initialize the store. This is called when the store is created.
    async fn init(&self) -> Result<(), StorageError>;

    /// Write a slot, overwriting any previous value.
    async fn put(&mut self, key: &str, value: MirrorData) -> Result<(), StorageError>;

    /// Read a slot.
    async fn get(&self, key: &str) -> Result<Option<MirrorData>, StorageError>;

    /// Wipe every slot in the scope.
    async fn clear(&mut self) -> Result<(), StorageError>;
}
