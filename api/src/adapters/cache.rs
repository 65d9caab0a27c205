//! Cache backend selection
//!
//! The concrete store is picked at startup from configuration.

use async_trait::async_trait;

use super::memory::InMemoryCacheStore;
use super::redis::RedisCacheStore;
use crate::domain::ports::CacheStore;
use crate::error::CacheError;

pub enum CacheBackend {
    Memory(InMemoryCacheStore),
    Redis(RedisCacheStore),
}

impl CacheBackend {
    /// Redis when a URL is configured, otherwise a process-local map
    pub async fn from_url(redis_url: Option<&str>) -> Result<Self, CacheError> {
        match redis_url {
            Some(url) => Ok(CacheBackend::Redis(RedisCacheStore::connect(url).await?)),
            None => {
                tracing::warn!("REDIS_URL not set, using in-memory cache");
                Ok(CacheBackend::Memory(InMemoryCacheStore::new()))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CacheBackend::Memory(_) => "memory",
            CacheBackend::Redis(_) => "redis",
        }
    }
}

#[async_trait]
impl CacheStore for CacheBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        match self {
            CacheBackend::Memory(store) => store.get(key).await,
            CacheBackend::Redis(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        match self {
            CacheBackend::Memory(store) => store.set(key, value).await,
            CacheBackend::Redis(store) => store.set(key, value).await,
        }
    }

    async fn add(&self, key: &str, value: &[u8]) -> Result<bool, CacheError> {
        match self {
            CacheBackend::Memory(store) => store.add(key, value).await,
            CacheBackend::Redis(store) => store.add(key, value).await,
        }
    }
}
