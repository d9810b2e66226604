use std::{env, sync::LazyLock};

use super::errors::StorageError;
use super::types::{InMemoryMirrorStore, MirrorStore, RedisMirrorStore};

pub(super) static SESSION_MIRROR_STORE: LazyLock<String> = LazyLock::new(|| {
    env::var("SESSION_MIRROR_STORE")
        .ok()
        .unwrap_or("memory".to_string())
});

/// Build the mirror store selected by `SESSION_MIRROR_STORE` (`memory` or
/// `redis`; `redis` additionally requires `SESSION_MIRROR_STORE_URL`).
///
/// Returns a boxed store for the caller to inject into the session
/// controller. There is no process-wide store; each controller owns the one
/// it is given.
pub fn mirror_store_from_env() -> Result<Box<dyn MirrorStore>, StorageError> {
    let store_type = SESSION_MIRROR_STORE.as_str();

    tracing::info!("Initializing session mirror store with type: {store_type}");

    match store_type {
        "memory" => Ok(Box::new(InMemoryMirrorStore::new())),
        "redis" => {
            let store_url = env::var("SESSION_MIRROR_STORE_URL").map_err(|_| {
                StorageError::Storage(
                    "SESSION_MIRROR_STORE_URL must be set for the redis mirror store".to_string(),
                )
            })?;
            let client = redis::Client::open(store_url.as_str())?;
            Ok(Box::new(RedisMirrorStore { client }))
        }
        t => Err(StorageError::Storage(format!(
            "Unsupported mirror store type: {t}. Supported types are 'memory' and 'redis'"
        ))),
    }
}
