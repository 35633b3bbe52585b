//! Symbol registry: the owned state behind every drawable on a surface.

use std::collections::HashMap;

use crate::error::SymbolError;
use crate::path::PathData;
use crate::shapes::{Interpolation, Point};

/// A placed symbol and the board-space outline it owns.
///
/// The outline is created once at placement and only ever translated; its
/// point count and order never change.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSymbol {
    id: String,
    class: String,
    outline: Vec<Point>,
    interpolation: Interpolation,
}

impl RenderedSymbol {
    pub fn new(
        id: impl Into<String>,
        class: impl Into<String>,
        outline: Vec<Point>,
        interpolation: Interpolation,
    ) -> Self {
        Self { id: id.into(), class: class.into(), outline, interpolation }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Mode the symbol was placed with
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    /// Shift every outline point by (dx, dy) in place
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for point in &mut self.outline {
            point.translate(dx, dy);
        }
    }

    /// Average of the distinct outline points.
    ///
    /// The repeated closing point of a closed outline is counted once.
    pub fn centroid(&self) -> Point {
        let points = match (self.outline.first(), self.outline.last()) {
            (Some(first), Some(last)) if self.outline.len() > 1 && first == last => {
                &self.outline[..self.outline.len() - 1]
            }
            _ => &self.outline[..],
        };
        if points.is_empty() {
            return Point::default();
        }
        let n = points.len() as f64;
        let (sx, sy) = points.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }

    /// Path for the current outline drawn with `interpolation`
    pub fn path_with(&self, interpolation: Interpolation) -> PathData {
        PathData::from_points(&self.outline, interpolation)
    }
}

/// Registry of rendered symbols keyed by their unique id.
#[derive(Debug, Clone, Default)]
pub struct SymbolRegistry {
    symbols: HashMap<String, RenderedSymbol>,
}

impl SymbolRegistry {
    /// Create a new empty symbol registry.
    pub fn new() -> Self {
        Self { symbols: HashMap::new() }
    }

    /// Register a symbol.
    ///
    /// Ids are never overwritten: a second symbol with a taken id is
    /// rejected and the first one is kept.
    pub fn register(&mut self, symbol: RenderedSymbol) -> Result<(), SymbolError> {
        if self.symbols.contains_key(&symbol.id) {
            return Err(SymbolError::DuplicateSymbolId(symbol.id));
        }
        self.symbols.insert(symbol.id.clone(), symbol);
        Ok(())
    }

    /// Get a symbol by id.
    pub fn get(&self, id: &str) -> Option<&RenderedSymbol> {
        self.symbols.get(id)
    }

    /// Get a symbol for mutation, failing with `SymbolNotFound`.
    pub fn get_mut(&mut self, id: &str) -> Result<&mut RenderedSymbol, SymbolError> {
        self.symbols.get_mut(id).ok_or_else(|| SymbolError::SymbolNotFound(id.to_string()))
    }

    /// Check if a symbol with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.symbols.contains_key(id)
    }

    /// Get the number of registered symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over all symbols in the registry.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RenderedSymbol)> {
        self.symbols.iter()
    }
}
