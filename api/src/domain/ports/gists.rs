//! Gist source port trait
//!
//! Defines the interface for listing a user's gists upstream.

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Remaining upstream call budget, as reported by the last response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    Remaining(u64),
    /// Header absent or unreadable
    Unknown,
}

impl RateLimit {
    /// Parse the raw `X-RateLimit-Remaining` header value
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(RateLimit::Remaining)
            .unwrap_or(RateLimit::Unknown)
    }

    /// Only an explicit zero counts as exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, RateLimit::Remaining(0))
    }
}

/// Raw upstream response, whatever its status
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub rate_limit: RateLimit,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Port trait for the upstream gist listing
#[async_trait]
pub trait GistSource: Send + Sync {
    /// Fetch the public gist listing for a user.
    ///
    /// Non-2xx responses are returned as-is so the caller can inspect the
    /// rate limit; only transport failures are errors.
    async fn list_user_gists(&self, user: &str) -> Result<UpstreamResponse, UpstreamError>;
}
