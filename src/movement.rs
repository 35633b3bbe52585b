//! Moving placed symbols

use log::{debug, warn};

use crate::error::SymbolError;
use crate::renderer::SymbolRenderer;
use crate::shapes::Interpolation;
use crate::surface::{AnimationHandle, Surface};

impl<S: Surface> SymbolRenderer<S> {
    /// Translate a placed symbol by (dx, dy) and morph its path to the new spot.
    ///
    /// The symbol's owned outline is shifted in place, then redrawn with the
    /// caller's `interpolation`, which should be the mode returned by
    /// [`SymbolRenderer::place`]. The surface transitions the drawn path over
    /// the renderer's timing; the returned handle resolves when it finishes.
    /// Calling again before that retargets the running transition.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphboard::renderer::SymbolRenderer;
    /// use glyphboard::shapes::Point;
    /// use glyphboard::surface::SvgSurface;
    ///
    /// let mut renderer = SymbolRenderer::new(SvgSurface::new(100.0, 100.0));
    /// let mode = renderer.place("square", Point::new(10.0, 10.0), 4.0, "playerSymbol", "p1").unwrap();
    /// let _handle = renderer.move_symbol("p1", 30.0, 0.0, mode).unwrap();
    ///
    /// let symbol = renderer.symbols().get("p1").unwrap();
    /// assert_eq!(symbol.outline()[0], Point::new(38.0, 8.0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`SymbolError::SymbolNotFound`] if no symbol has this id. Nothing is
    /// mutated in that case.
    pub fn move_symbol(
        &mut self,
        id: &str,
        dx: f64,
        dy: f64,
        interpolation: Interpolation,
    ) -> Result<AnimationHandle, SymbolError> {
        let symbol = self.symbols.get_mut(id)?;
        if symbol.interpolation() != interpolation {
            warn!(
                "symbol '{}' was placed as {} but is being redrawn as {}",
                id,
                symbol.interpolation(),
                interpolation
            );
        }

        symbol.translate(dx, dy);
        let path = symbol.path_with(interpolation);

        debug!("moving '{}' by ({}, {})", id, dx, dy);
        self.surface.animate_path(id, path, &self.timing)
    }
}
