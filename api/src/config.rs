use std::env;
use std::time::Duration;

use crate::app::{EntryContent, FeedSettings};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub github_api_url: String,
    /// Gist web host, used for alternate links and embeds
    pub gist_web_url: String,
    /// Public URL of this service (feed ids and self links)
    pub public_base_url: String,
    /// Shared cache; an in-memory store is used when unset
    pub redis_url: Option<String>,
    pub cache_key_prefix: String,
    /// User served at `/`, if any
    pub default_user: Option<String>,
    pub author_email: Option<String>,
    /// Embed gists in entry content instead of leaving it empty
    pub embed_content: bool,
    pub upstream_timeout_secs: u64,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            gist_web_url: env::var("GIST_WEB_URL")
                .unwrap_or_else(|_| "https://gist.github.com".to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            redis_url: non_empty_var("REDIS_URL"),
            cache_key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or_else(|_| "gist_".to_string()),
            default_user: non_empty_var("DEFAULT_USER"),
            author_email: non_empty_var("FEED_AUTHOR_EMAIL"),
            embed_content: env::var("FEED_EMBED_CONTENT")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            user_agent: env::var("UPSTREAM_USER_AGENT")
                .unwrap_or_else(|_| format!("gistfeed/{}", env!("CARGO_PKG_VERSION"))),
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            public_base_url: self.public_base_url.clone(),
            gist_web_url: self.gist_web_url.clone(),
            author_email: self.author_email.clone(),
            content: if self.embed_content {
                EntryContent::Embed
            } else {
                EntryContent::Empty
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
