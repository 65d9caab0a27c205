//! Unified error types for the gist feed API
//!
//! This module defines error types for each layer:
//! - `UpstreamError`: GitHub API client errors
//! - `CacheError`: cache store errors
//! - `AppError`: Application layer errors (rendered as plain-text HTTP responses)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body returned for every failure that is not worth explaining to the caller
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Body returned when the upstream budget is spent and nothing is cached
pub const RATE_LIMIT_MESSAGE: &str = "GitHub API rate limit exceeded, try again later.";

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },
}

/// Cache store errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache write failed for {key}: {message}")]
    Write { key: String, message: String },
}

impl From<redis::RedisError> for CacheError {
    fn from(e: redis::RedisError) -> Self {
        CacheError::Backend(e.to_string())
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Rate limit exhausted and no cached gists for {user}")]
    RateLimitExceededNoCache { user: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::RateLimitExceededNoCache { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, RATE_LIMIT_MESSAGE.to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, format!("Bad Request: {}", msg)),
            AppError::Upstream(_)
            | AppError::Cache(_)
            | AppError::Decode(_)
            | AppError::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
            ),
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
