//! Configuration for glyphboard
//!
//! Provides types, discovery and loading for `glyphboard.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
