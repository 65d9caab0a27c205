//! Gist entity
//!
//! One entry of the GitHub `/users/{user}/gists` listing. Field names are
//! accepted both in GitHub's snake_case and in the Title_Case spelling older
//! clients of this service produced, and missing fields decode to defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty string, empty map, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A single gist listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gist {
    #[serde(alias = "Id", deserialize_with = "deserialize_null_default")]
    pub id: String,
    #[serde(alias = "Url", deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(alias = "Html_Url", deserialize_with = "deserialize_null_default")]
    pub html_url: String,
    #[serde(alias = "Public")]
    pub public: bool,
    #[serde(alias = "Created_At", deserialize_with = "deserialize_null_default")]
    pub created_at: String,
    /// ISO-8601 timestamp, kept verbatim; the feed builder parses it
    #[serde(alias = "Updated_At", deserialize_with = "deserialize_null_default")]
    pub updated_at: String,
    /// Empty means the gist is not published in the feed
    #[serde(alias = "Description", deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(alias = "Comments")]
    pub comments: i64,
    /// Keyed by filename
    #[serde(alias = "Files", deserialize_with = "deserialize_null_default")]
    pub files: BTreeMap<String, GistFile>,
    #[serde(alias = "Owner")]
    pub owner: Option<GistOwner>,
}

impl Gist {
    /// Whether this gist should appear in the feed
    pub fn is_publishable(&self) -> bool {
        !self.description.is_empty()
    }
}

/// A file attached to a gist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistFile {
    #[serde(alias = "Filename", deserialize_with = "deserialize_null_default")]
    pub filename: String,
    #[serde(rename = "type", alias = "Type", deserialize_with = "deserialize_null_default")]
    pub file_type: String,
    #[serde(alias = "Language")]
    pub language: Option<String>,
    #[serde(alias = "Raw_Url", deserialize_with = "deserialize_null_default")]
    pub raw_url: String,
    #[serde(alias = "Size")]
    pub size: u64,
}

/// The account owning a gist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistOwner {
    #[serde(alias = "Login", deserialize_with = "deserialize_null_default")]
    pub login: String,
    #[serde(alias = "Html_Url", deserialize_with = "deserialize_null_default")]
    pub html_url: String,
    #[serde(alias = "Avatar_Url", deserialize_with = "deserialize_null_default")]
    pub avatar_url: String,
}

/// Decode a listing payload, keeping upstream order
pub fn decode_gists(payload: &[u8]) -> Result<Vec<Gist>, serde_json::Error> {
    serde_json::from_slice(payload)
}
