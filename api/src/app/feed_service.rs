//! Feed service
//!
//! Turns a user's gist listing into an Atom-ready feed document.
//! Gists without a description are left out; everything else keeps the
//! order GitHub returned it in.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use crate::app::payload_service::PayloadService;
use crate::domain::entities::Gist;
use crate::domain::ports::{CacheStore, GistSource};
use crate::error::AppError;

/// Longest login GitHub accepts
const MAX_LOGIN_LEN: usize = 39;

/// A feed for one user, ready to be rendered
#[derive(Debug, Clone, PartialEq)]
pub struct Feed {
    pub title: String,
    /// Feed id, also the self link
    pub id: String,
    pub self_link: String,
    /// The user's gist page
    pub alternate_link: String,
    pub author: FeedAuthor,
    /// Time of generation, not of any entry
    pub updated: DateTime<FixedOffset>,
    pub entries: Vec<FeedEntry>,
}

/// Feed author
#[derive(Debug, Clone, PartialEq)]
pub struct FeedAuthor {
    pub name: String,
    pub email: Option<String>,
}

/// One published gist
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    /// The gist's web URL; distinct gists have distinct URLs
    pub id: String,
    pub link: String,
    pub updated: DateTime<FixedOffset>,
    /// HTML content, empty unless embedding is enabled
    pub content: String,
}

/// What goes into an entry's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryContent {
    #[default]
    Empty,
    /// A `<script>` tag embedding the gist
    Embed,
}

/// Deployment-specific feed settings
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Public URL of this service; feed ids hang off it
    pub public_base_url: String,
    /// GitHub's gist web host, for alternate links and embeds
    pub gist_web_url: String,
    pub author_email: Option<String>,
    pub content: EntryContent,
}

impl FeedSettings {
    fn feed_url(&self, user: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), user)
    }

    fn gist_page_url(&self, user: &str) -> String {
        format!("{}/{}", self.gist_web_url.trim_end_matches('/'), user)
    }

    fn entry_content(&self, user: &str, gist: &Gist) -> String {
        match self.content {
            EntryContent::Empty => String::new(),
            EntryContent::Embed => format!(
                r#"<script src="{}/{}/{}.js"></script>"#,
                self.gist_web_url.trim_end_matches('/'),
                user,
                gist.id
            ),
        }
    }
}

/// Build the feed document for a user's listing.
///
/// Deterministic: the same listing and `generated_at` yield the same feed.
pub fn build_feed(
    settings: &FeedSettings,
    user: &str,
    gists: &[Gist],
    generated_at: DateTime<FixedOffset>,
) -> Result<Feed, AppError> {
    let entries = gists
        .iter()
        .filter(|gist| gist.is_publishable())
        .map(|gist| {
            let updated = DateTime::parse_from_rfc3339(&gist.updated_at).map_err(|e| {
                AppError::Decode(format!(
                    "gist {} has invalid updated_at {:?}: {}",
                    gist.html_url, gist.updated_at, e
                ))
            })?;

            Ok(FeedEntry {
                title: gist.description.clone(),
                id: gist.html_url.clone(),
                link: gist.html_url.clone(),
                updated,
                content: settings.entry_content(user, gist),
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let feed_url = settings.feed_url(user);

    Ok(Feed {
        title: format!("{} gists", user),
        id: feed_url.clone(),
        self_link: feed_url,
        alternate_link: settings.gist_page_url(user),
        author: FeedAuthor {
            name: user.to_string(),
            email: settings.author_email.clone(),
        },
        updated: generated_at,
        entries,
    })
}

/// Check a user identifier against GitHub's login rules
pub fn validate_user(user: &str) -> Result<(), AppError> {
    if user.is_empty() || user.len() > MAX_LOGIN_LEN {
        return Err(AppError::BadRequest(format!(
            "user must be 1 to {} characters",
            MAX_LOGIN_LEN
        )));
    }
    if !user.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppError::BadRequest(
            "user may only contain letters, digits and '-'".to_string(),
        ));
    }
    Ok(())
}

/// Service producing feeds end to end
pub struct FeedService<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    payloads: PayloadService<GS, CS>,
    settings: FeedSettings,
}

impl<GS, CS> FeedService<GS, CS>
where
    GS: GistSource,
    CS: CacheStore,
{
    pub fn new(
        source: Arc<GS>,
        cache: Arc<CS>,
        cache_key_prefix: String,
        settings: FeedSettings,
    ) -> Self {
        Self {
            payloads: PayloadService::new(source, cache, cache_key_prefix),
            settings,
        }
    }

    /// Generate the feed for a user
    pub async fn user_feed(&self, user: &str) -> Result<Feed, AppError> {
        validate_user(user)?;

        let payload = self.payloads.resolve_payload(user).await?;
        tracing::debug!(
            user,
            source = ?payload.source,
            gists = payload.gists.len(),
            bytes = payload.body.len(),
            "Resolved gist listing"
        );

        build_feed(&self.settings, user, &payload.gists, Utc::now().fixed_offset())
    }
}
