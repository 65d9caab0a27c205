//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod cache;
pub mod gists;

pub use cache::CacheStore;
pub use gists::{GistSource, RateLimit, UpstreamResponse};
