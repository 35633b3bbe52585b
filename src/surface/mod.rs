//! Rendering surfaces for board symbols.
//!
//! The [`Surface`] trait is the only thing the renderer knows about the
//! output: it appends uniquely addressed path and label elements and morphs
//! a path to a new value over time. [`SvgSurface`] keeps the scene in memory
//! and renders it as an SVG document.

mod handle;
mod svg;

pub use handle::{AnimationHandle, TransitionOutcome};
pub use svg::SvgSurface;

use crate::error::SymbolError;
use crate::motion::TransitionTiming;
use crate::path::PathData;
use crate::shapes::Point;

/// A 2D drawing surface holding uniquely addressed elements.
pub trait Surface {
    /// Append a path element. Ids are unique across all elements.
    fn append_path(&mut self, id: &str, class: &str, path: PathData) -> Result<(), SymbolError>;

    /// Append a text element anchored at `at`.
    fn append_label(&mut self, id: &str, class: &str, at: Point, text: &str) -> Result<(), SymbolError>;

    /// Check if any element uses `id`.
    fn contains(&self, id: &str) -> bool;

    /// The path currently drawn for `id`, mid-transition values included.
    fn path(&self, id: &str) -> Option<&PathData>;

    /// Move a text element.
    fn set_label_position(&mut self, id: &str, at: Point) -> Result<(), SymbolError>;

    /// Morph the path of `id` from its current value to `to`.
    ///
    /// A transition already running on the same element is superseded: its
    /// handle resolves as interrupted and the new one starts from the path as
    /// drawn at that moment.
    fn animate_path(
        &mut self,
        id: &str,
        to: PathData,
        timing: &TransitionTiming,
    ) -> Result<AnimationHandle, SymbolError>;
}
