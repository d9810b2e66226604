use async_trait::async_trait;
use redis::{self, AsyncCommands};

use super::errors::StorageError;
use super::types::{MirrorData, MirrorStore, RedisMirrorStore};

const MIRROR_PREFIX: &str = "mirror";

impl RedisMirrorStore {
    fn make_key(key: &str) -> String {
        format!("{MIRROR_PREFIX}:{key}")
    }
}

#[async_trait]
impl MirrorStore for RedisMirrorStore {
    async fn init(&self) -> Result<(), StorageError> {
        // Verify the connection works
        let _conn = self.client.get_multiplexed_async_connection().await?;
        Ok(())
    }

    async fn put(&mut self, key: &str, value: MirrorData) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value = serde_json::to_string(&value)?;
        let _: () = conn.set(&key, value).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<MirrorData>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let key = Self::make_key(key);
        let value: Option<String> = conn.get(&key).await?;

        match value {
            Some(v) => Ok(Some(serde_json::from_str(&v)?)),
            None => Ok(None),
        }
    }

    async fn clear(&mut self) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        // The scope is everything under the mirror prefix.
        let keys: Vec<String> = conn.keys(format!("{MIRROR_PREFIX}:*")).await?;
        if !keys.is_empty() {
            let _: () = conn.del(keys).await?;
        }
        Ok(())
    }
}
