//! Payload service
//!
//! Decides whether a user's gist listing comes from GitHub or from the cache.
//! Fresh data always wins while the upstream budget lasts; the cache is only
//! read once GitHub reports the budget as spent.

use std::sync::Arc;

use crate::domain::entities::{decode_gists, Gist};
use crate::domain::ports::{CacheStore, GistSource, UpstreamResponse};
use crate::error::{AppError, UpstreamError};

/// Where a resolved payload came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadSource {
    Live,
    Cached,
}

/// The authoritative listing for one request
#[derive(Debug, Clone)]
pub struct ResolvedPayload {
    /// Raw JSON exactly as fetched or cached
    pub body: Vec<u8>,
    pub gists: Vec<Gist>,
    pub source: PayloadSource,
}

/// Service resolving listing payloads under the upstream rate limit
pub struct PayloadService<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    source: Arc<GS>,
    cache: Arc<CS>,
    key_prefix: String,
}

impl<GS, CS> PayloadService<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    pub fn new(source: Arc<GS>, cache: Arc<CS>, key_prefix: String) -> Self {
        Self {
            source,
            cache,
            key_prefix,
        }
    }

    /// Cache key for a user's listing
    pub fn cache_key(&self, user: &str) -> String {
        format!("{}{}", self.key_prefix, user)
    }

    /// Resolve the listing for a user, live or from cache
    pub async fn resolve_payload(&self, user: &str) -> Result<ResolvedPayload, AppError> {
        let response = self.source.list_user_gists(user).await?;
        let key = self.cache_key(user);

        if response.rate_limit.is_exhausted() {
            tracing::info!(
                user,
                status = response.status,
                "Rate limit exhausted, reading cache"
            );
            return self.from_cache(user, &key).await;
        }

        self.from_live(user, &key, response).await
    }

    async fn from_live(
        &self,
        user: &str,
        key: &str,
        response: UpstreamResponse,
    ) -> Result<ResolvedPayload, AppError> {
        if !response.is_success() {
            return Err(UpstreamError::Status {
                status: response.status,
                message: String::from_utf8_lossy(&response.body).into_owned(),
            }
            .into());
        }

        // Only a decodable listing may land in the cache
        let gists = decode_gists(&response.body)?;
        self.store(user, key, &response.body).await;

        Ok(ResolvedPayload {
            body: response.body,
            gists,
            source: PayloadSource::Live,
        })
    }

    async fn from_cache(&self, user: &str, key: &str) -> Result<ResolvedPayload, AppError> {
        match self.cache.get(key).await? {
            Some(body) => {
                tracing::debug!(user, key, "Cache hit");
                let gists = decode_gists(&body)?;
                Ok(ResolvedPayload {
                    body,
                    gists,
                    source: PayloadSource::Cached,
                })
            }
            None => {
                tracing::warn!(user, key, "Cache miss with exhausted rate limit");
                Err(AppError::RateLimitExceededNoCache {
                    user: user.to_string(),
                })
            }
        }
    }

    /// Best-effort write: add, falling back to set when the key already exists
    async fn store(&self, user: &str, key: &str, body: &[u8]) {
        let result = match self.cache.add(key, body).await {
            Ok(true) => Ok(()),
            Ok(false) => self.cache.set(key, body).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => tracing::debug!(user, key, bytes = body.len(), "Cached gist listing"),
            Err(e) => tracing::warn!(user, key, error = %e, "Failed to cache gist listing"),
        }
    }
}
