//! Cache store port trait

use async_trait::async_trait;

use crate::error::CacheError;

/// Key/blob store holding the last good upstream payload per user.
///
/// Last writer wins; `add` is the only conditional write.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read a blob, `None` on a miss
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Unconditional overwrite
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Store only if the key is absent; `Ok(false)` if it was already present
    async fn add(&self, key: &str, value: &[u8]) -> Result<bool, CacheError>;
}
