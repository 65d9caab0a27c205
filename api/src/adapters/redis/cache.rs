//! Redis cache store
//!
//! Shared backend for multi-instance deployments. `add` maps to `SET NX`.

use std::fmt;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};

use crate::domain::ports::CacheStore;
use crate::error::CacheError;

/// Cache store backed by a Redis `ConnectionManager`, which reconnects on its own
#[derive(Clone)]
pub struct RedisCacheStore {
    conn_manager: ConnectionManager,
    redis_url: String,
}

impl fmt::Debug for RedisCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCacheStore")
            .field("redis_url", &self.redis_url)
            .finish_non_exhaustive()
    }
}

impl RedisCacheStore {
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        tracing::info!("Connecting to Redis cache...");
        let client = redis::Client::open(redis_url)?;
        let conn_manager = ConnectionManager::new(client).await?;
        tracing::info!("Redis cache connected");

        Ok(Self {
            conn_manager,
            redis_url: redis_url.to_string(),
        })
    }

    fn write_error(key: &str, e: redis::RedisError) -> CacheError {
        CacheError::Write {
            key: key.to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn_manager.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        tracing::debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut conn = self.conn_manager.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| Self::write_error(key, e))
    }

    async fn add(&self, key: &str, value: &[u8]) -> Result<bool, CacheError> {
        let mut conn = self.conn_manager.clone();
        conn.set_nx::<_, _, bool>(key, value)
            .await
            .map_err(|e| Self::write_error(key, e))
    }
}
