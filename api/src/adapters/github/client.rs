//! GitHub gist API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use urlencoding::encode;

use crate::domain::ports::{GistSource, RateLimit, UpstreamResponse};
use crate::error::UpstreamError;

/// Header GitHub uses to report the remaining call budget
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Implementation of the upstream gist listing over the GitHub REST API
pub struct GithubGistClient {
    http: Client,
    base_url: String,
}

impl GithubGistClient {
    pub fn new(
        base_url: String,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn gists_url(&self, user: &str) -> String {
        format!("{}/users/{}/gists", self.base_url, encode(user))
    }
}

fn rate_limit_from(headers: &HeaderMap) -> RateLimit {
    RateLimit::from_header(
        headers
            .get(RATE_LIMIT_REMAINING_HEADER)
            .and_then(|v| v.to_str().ok()),
    )
}

#[async_trait]
impl GistSource for GithubGistClient {
    async fn list_user_gists(&self, user: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = self.gists_url(user);
        tracing::debug!(%url, "Fetching gist listing");

        let resp = self.http.get(&url).send().await?;

        let status = resp.status().as_u16();
        let rate_limit = rate_limit_from(resp.headers());
        let body = resp.bytes().await?.to_vec();

        tracing::debug!(status, ?rate_limit, bytes = body.len(), "Gist listing received");

        Ok(UpstreamResponse {
            status,
            body,
            rate_limit,
        })
    }
}
