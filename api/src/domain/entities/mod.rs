//! Domain entities
//!
//! Core types decoded from the upstream listing API.

pub mod gist;

pub use gist::{decode_gists, Gist};
