//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod feed_service;
pub mod payload_service;

pub use feed_service::{EntryContent, Feed, FeedEntry, FeedService, FeedSettings};
// Re-exported for tests and alternative front ends
#[allow(unused_imports)]
pub use feed_service::{build_feed, FeedAuthor};
