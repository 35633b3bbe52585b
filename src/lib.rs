//! Glyphboard - Library for drawing game pieces as shape symbols on a board
//!
//! This library provides functionality to:
//! - Generate normalized outlines for a closed set of shapes
//! - Place symbols on a rendering surface and morph them between positions
//! - Map faction roles to shapes and lay pieces out on a grid board

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod motion;
pub mod movement;
pub mod path;
pub mod placement;
pub mod registry;
pub mod renderer;
pub mod shapes;
pub mod surface;

pub use error::SymbolError;
