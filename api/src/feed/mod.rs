//! Feed module
//!
//! Atom rendering for gist feeds.

pub mod renderer;

pub use renderer::{render_atom, ATOM_CONTENT_TYPE};
