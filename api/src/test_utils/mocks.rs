//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record how they were called so tests can verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::ports::{CacheStore, GistSource, RateLimit, UpstreamResponse};
use crate::error::{CacheError, UpstreamError};

// ============================================================================
// Mock Gist Source
// ============================================================================

enum Reply {
    Response(UpstreamResponse),
    Unreachable,
}

/// Upstream stand-in returning the same reply on every call
pub struct MockGistSource {
    reply: Reply,
    calls: Arc<AtomicUsize>,
}

impl MockGistSource {
    /// 200 with the given body and budget
    pub fn ok(body: Vec<u8>, rate_limit: RateLimit) -> Self {
        Self {
            reply: Reply::Response(UpstreamResponse {
                status: 200,
                body,
                rate_limit,
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// What GitHub sends once the budget is spent
    pub fn rate_limited() -> Self {
        Self::ok(
            br#"{"message":"API rate limit exceeded"}"#.to_vec(),
            RateLimit::Remaining(0),
        )
        .with_status(403)
    }

    /// Every call fails at the transport level
    pub fn unreachable() -> Self {
        Self {
            reply: Reply::Unreachable,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        if let Reply::Response(ref mut response) = self.reply {
            response.status = status;
        }
        self
    }

    /// Shared call counter, readable after the mock is moved into a service
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl GistSource for MockGistSource {
    async fn list_user_gists(&self, _user: &str) -> Result<UpstreamResponse, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Unreachable => {
                // reqwest errors can only be built by reqwest itself
                let err = reqwest::Client::new()
                    .get("http://")
                    .build()
                    .expect_err("an empty host is not a valid URL");
                Err(UpstreamError::Request(err))
            }
        }
    }
}

// ============================================================================
// Failing Cache Store
// ============================================================================

/// Cache store whose every operation fails
#[derive(Default)]
pub struct FailingCacheStore;

impl FailingCacheStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Err(CacheError::Backend("connection refused".to_string()))
    }

    async fn set(&self, key: &str, _value: &[u8]) -> Result<(), CacheError> {
        Err(CacheError::Write {
            key: key.to_string(),
            message: "out of memory".to_string(),
        })
    }

    async fn add(&self, key: &str, _value: &[u8]) -> Result<bool, CacheError> {
        Err(CacheError::Write {
            key: key.to_string(),
            message: "out of memory".to_string(),
        })
    }
}
