//! GitHub adapter
//!
//! Implementation of the upstream gist listing client.

pub mod client;

pub use client::GithubGistClient;
