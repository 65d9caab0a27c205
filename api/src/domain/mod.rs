//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Gist listing types decoded from upstream
//! - `ports`: Trait definitions for the upstream API and the cache store

pub mod entities;
pub mod ports;
