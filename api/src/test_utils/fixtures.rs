//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::app::{EntryContent, FeedSettings};
use crate::domain::entities::Gist;

/// The single-gist listing used across scenario tests
pub fn demo_listing() -> Vec<u8> {
    br#"[{"Description":"demo snippet","Html_Url":"https://x/1","Updated_At":"2024-01-01T00:00:00Z"}]"#
        .to_vec()
}

/// Create a test gist owned by alice
pub fn test_gist(id: &str, description: &str) -> Gist {
    Gist {
        id: id.to_string(),
        url: format!("https://api.github.com/gists/{}", id),
        html_url: format!("https://gist.github.com/alice/{}", id),
        public: true,
        created_at: "2023-12-31T10:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
        description: description.to_string(),
        ..Gist::default()
    }
}

/// Serialize gists as GitHub would return them
pub fn listing_json(gists: &[Gist]) -> Vec<u8> {
    serde_json::to_vec(gists).unwrap()
}

/// Feed settings for a deployment at feeds.example.com
pub fn test_settings() -> FeedSettings {
    FeedSettings {
        public_base_url: "https://feeds.example.com/".to_string(),
        gist_web_url: "https://gist.github.com".to_string(),
        author_email: None,
        content: EntryContent::Empty,
    }
}
