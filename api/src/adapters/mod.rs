//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod cache;
pub mod github;
pub mod memory;
pub mod redis;

pub use self::cache::CacheBackend;
pub use self::github::GithubGistClient;
pub use self::memory::InMemoryCacheStore;
