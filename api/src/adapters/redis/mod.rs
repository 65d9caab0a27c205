//! Redis adapter
//!
//! Shared cache store for deployments running more than one instance.

pub mod cache;

pub use cache::RedisCacheStore;
