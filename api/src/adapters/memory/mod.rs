//! In-memory adapter
//!
//! Process-local cache store, used when no shared backend is configured.

pub mod cache;

pub use cache::InMemoryCacheStore;
