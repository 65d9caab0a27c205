//! Gist Feed API Server
//!
//! Republishes a GitHub user's public gists as an Atom feed.
//! Upstream responses are cached per user so the feed keeps working,
//! slightly stale, once the GitHub rate limit is spent.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{CacheBackend, GithubGistClient};
use app::FeedService;
use config::Config;
use domain::ports::{CacheStore, GistSource};

/// Application state shared across all handlers
pub struct AppState<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    pub feed_service: Arc<FeedService<GS, CS>>,
    pub default_user: Option<String>,
}

impl<GS, CS> Clone for AppState<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
            default_user: self.default_user.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router. `/` is only served when a default user is configured.
pub fn router<GS, CS>(state: AppState<GS, CS>) -> Router
where
    GS: GistSource + 'static,
    CS: CacheStore + 'static,
{
    let mut app = Router::new().route("/health", get(health));

    if state.default_user.is_some() {
        app = app.route("/", get(handlers::get_default_feed::<GS, CS>));
    }

    app.route("/:user", get(handlers::get_user_feed::<GS, CS>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gistfeed_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting gist feed API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let github = Arc::new(
        GithubGistClient::new(
            config.github_api_url.clone(),
            &config.user_agent,
            config.upstream_timeout(),
        )
        .context("Failed to build GitHub client")?,
    );

    let cache = Arc::new(
        CacheBackend::from_url(config.redis_url.as_deref())
            .await
            .context("Failed to connect to cache")?,
    );
    tracing::info!(backend = cache.name(), "Cache ready");

    // Create application services
    let feed_service = Arc::new(FeedService::new(
        github,
        cache,
        config.cache_key_prefix.clone(),
        config.feed_settings(),
    ));

    let state = AppState {
        feed_service,
        default_user: config.default_user.clone(),
    };

    if let Some(user) = &state.default_user {
        tracing::info!(user = %user, "Serving default user at /");
    }

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
