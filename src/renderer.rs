//! Symbol placement onto a rendering surface

use log::debug;

use crate::error::SymbolError;
use crate::motion::TransitionTiming;
use crate::path::PathData;
use crate::registry::{RenderedSymbol, SymbolRegistry};
use crate::shapes::{Interpolation, Point, ShapeKind, ShapeTable};
use crate::surface::Surface;

/// Places symbols on a surface and keeps their owned outlines.
///
/// The renderer and the mover (see [`SymbolRenderer::move_symbol`]) share the
/// same registry, so a symbol's outline is only ever touched through this
/// type.
#[derive(Debug)]
pub struct SymbolRenderer<S> {
    pub(crate) surface: S,
    pub(crate) symbols: SymbolRegistry,
    pub(crate) timing: TransitionTiming,
    shapes: &'static ShapeTable,
}

impl<S: Surface> SymbolRenderer<S> {
    /// Create a renderer drawing onto `surface` with the process-wide shape table.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            symbols: SymbolRegistry::new(),
            timing: TransitionTiming::default(),
            shapes: ShapeTable::global(),
        }
    }

    /// Use `timing` for every later move.
    pub fn with_timing(mut self, timing: TransitionTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_shape_table(mut self, shapes: &'static ShapeTable) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn symbols(&self) -> &SymbolRegistry {
        &self.symbols
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    /// Place a shape by name.
    ///
    /// The normalized outline is scaled by `diameter` and centered on
    /// `origin`, appended to the surface as a path tagged with `class` and
    /// `id`, and kept as the symbol's owned state. Returns the interpolation
    /// mode to hand back to [`SymbolRenderer::move_symbol`].
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphboard::renderer::SymbolRenderer;
    /// use glyphboard::shapes::{Interpolation, Point};
    /// use glyphboard::surface::SvgSurface;
    ///
    /// let mut renderer = SymbolRenderer::new(SvgSurface::new(100.0, 100.0));
    /// let mode = renderer.place("circle", Point::new(50.0, 50.0), 10.0, "playerSymbol", "p1").unwrap();
    /// assert_eq!(mode, Interpolation::Basis);
    /// assert!(renderer.place("circle", Point::new(0.0, 0.0), 10.0, "playerSymbol", "p1").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// - [`SymbolError::UnknownShape`] if `shape` is not in the closed set
    /// - [`SymbolError::DuplicateSymbolId`] if `id` is already on the surface
    pub fn place(
        &mut self,
        shape: &str,
        origin: Point,
        diameter: f64,
        class: &str,
        id: &str,
    ) -> Result<Interpolation, SymbolError> {
        let kind: ShapeKind = shape.parse()?;
        self.place_kind(kind, origin, diameter, class, id)
    }

    /// Place an already resolved shape. See [`SymbolRenderer::place`].
    pub fn place_kind(
        &mut self,
        kind: ShapeKind,
        origin: Point,
        diameter: f64,
        class: &str,
        id: &str,
    ) -> Result<Interpolation, SymbolError> {
        if self.symbols.contains(id) || self.surface.contains(id) {
            return Err(SymbolError::DuplicateSymbolId(id.to_string()));
        }

        let definition = self.shapes.definition(kind);
        let outline = definition.placed(origin, diameter);
        let interpolation = definition.interpolation;

        self.surface.append_path(id, class, PathData::from_points(&outline, interpolation))?;
        self.symbols.register(RenderedSymbol::new(id, class, outline, interpolation))?;

        debug!(
            "placed {} '{}' at ({}, {}) diameter {} ({})",
            kind, id, origin.x, origin.y, diameter, interpolation
        );
        Ok(interpolation)
    }
}
