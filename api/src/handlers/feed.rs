//! Feed handlers
//!
//! Endpoints serving a user's gists as an Atom feed.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::domain::ports::{CacheStore, GistSource};
use crate::error::AppError;
use crate::feed::{render_atom, ATOM_CONTENT_TYPE};
use crate::AppState;

/// GET /:user
///
/// Returns the Atom feed of a user's public gists.
pub async fn get_user_feed<GS, CS>(
    State(state): State<AppState<GS, CS>>,
    Path(user): Path<String>,
) -> Result<Response, AppError>
where
    GS: GistSource + 'static,
    CS: CacheStore + 'static,
{
    serve_feed(&state, &user).await
}

/// GET /
///
/// Returns the feed of the configured default user.
pub async fn get_default_feed<GS, CS>(
    State(state): State<AppState<GS, CS>>,
) -> Result<Response, AppError>
where
    GS: GistSource + 'static,
    CS: CacheStore + 'static,
{
    let user = state
        .default_user
        .clone()
        .ok_or_else(|| AppError::BadRequest("no default user configured".to_string()))?;

    serve_feed(&state, &user).await
}

async fn serve_feed<GS, CS>(state: &AppState<GS, CS>, user: &str) -> Result<Response, AppError>
where
    GS: GistSource,
    CS: CacheStore,
{
    let feed = state
        .feed_service
        .user_feed(user)
        .await
        .inspect_err(|e| log_failure(user, e))?;

    let body = render_atom(&feed).inspect_err(|e| log_failure(user, e))?;

    tracing::info!(user, entries = feed.entries.len(), "Serving gist feed");

    Ok(([(header::CONTENT_TYPE, ATOM_CONTENT_TYPE)], body).into_response())
}

fn log_failure(user: &str, error: &AppError) {
    match error {
        AppError::RateLimitExceededNoCache { .. } | AppError::BadRequest(_) => {
            tracing::warn!(user, error = %error, "Feed request refused")
        }
        _ => tracing::error!(user, error = %error, "Failed to build feed"),
    }
}
