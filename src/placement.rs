//! Placing game pieces on a grid board.
//!
//! A [`Board`] turns [`PieceRecord`]s into drawn symbols: the faction and
//! role pick a shape from the [`ShapeCatalog`], the grid cell picks the
//! origin through the [`BoardLayout`], and the piece's side and number pick
//! the element ids. Each piece also gets a text label with its number.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::ShapeCatalog;
use crate::error::SymbolError;
use crate::renderer::SymbolRenderer;
use crate::shapes::{Interpolation, Point};
use crate::surface::{AnimationHandle, Surface};

/// Style class shared by every piece symbol
pub const SYMBOL_CLASS: &str = "playerSymbol";
/// Style class shared by every piece number label
pub const LABEL_CLASS: &str = "playerNumber";

/// A piece as described by the game data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub faction: String,
    pub role: String,
    /// Grid column
    pub x: i32,
    /// Grid row
    pub y: i32,
    /// Display number, unique per side
    pub number: u32,
    /// Team tag, also used as a style class
    pub side: String,
}

impl PieceRecord {
    /// `player-{side}-{number}`
    pub fn piece_id(&self) -> String {
        piece_id(&self.side, self.number)
    }

    pub fn symbol_id(&self) -> String {
        format!("{}Symbol", self.piece_id())
    }

    pub fn label_id(&self) -> String {
        format!("{}Number", self.piece_id())
    }
}

/// Build the piece id for a side and number
pub fn piece_id(side: &str, number: u32) -> String {
    format!("player-{}-{}", side, number)
}

/// Grid geometry of the board in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardLayout {
    /// Space between the surface edge and the first cell
    pub margin: f64,
    pub cell_size: f64,
    /// Diameter of a piece symbol
    pub symbol_size: f64,
    pub columns: u32,
    pub rows: u32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self { margin: 20.0, cell_size: 30.0, symbol_size: 20.0, columns: 26, rows: 15 }
    }
}

impl BoardLayout {
    /// Center of the cell at grid position (gx, gy)
    pub fn cell_center(&self, gx: i32, gy: i32) -> Point {
        Point::new(
            self.margin + (f64::from(gx) + 0.5) * self.cell_size,
            self.margin + (f64::from(gy) + 0.5) * self.cell_size,
        )
    }

    pub fn width(&self) -> f64 {
        2.0 * self.margin + f64::from(self.columns) * self.cell_size
    }

    pub fn height(&self) -> f64 {
        2.0 * self.margin + f64::from(self.rows) * self.cell_size
    }
}

/// A piece that has been drawn on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedPiece {
    pub record: PieceRecord,
    pub symbol_id: String,
    pub label_id: String,
    /// Mode the symbol was drawn with, reused on every move
    pub interpolation: Interpolation,
}

/// Pieces on a grid, drawn through a [`SymbolRenderer`].
#[derive(Debug)]
pub struct Board<S> {
    renderer: SymbolRenderer<S>,
    catalog: ShapeCatalog,
    layout: BoardLayout,
    pieces: HashMap<String, PlacedPiece>,
    order: Vec<String>,
}

impl<S: Surface> Board<S> {
    pub fn new(renderer: SymbolRenderer<S>, catalog: ShapeCatalog, layout: BoardLayout) -> Self {
        Self { renderer, catalog, layout, pieces: HashMap::new(), order: Vec::new() }
    }

    pub fn renderer(&self) -> &SymbolRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut SymbolRenderer<S> {
        &mut self.renderer
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.renderer.surface_mut()
    }

    pub fn into_surface(self) -> S {
        self.renderer.into_surface()
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn piece(&self, piece_id: &str) -> Option<&PlacedPiece> {
        self.pieces.get(piece_id)
    }

    /// Placed pieces in placement order
    pub fn pieces(&self) -> impl Iterator<Item = &PlacedPiece> {
        self.order.iter().filter_map(|id| self.pieces.get(id))
    }

    /// Draw a piece and its number label at its grid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphboard::catalog::ShapeCatalog;
    /// use glyphboard::placement::{Board, BoardLayout, PieceRecord};
    /// use glyphboard::renderer::SymbolRenderer;
    /// use glyphboard::shapes::Interpolation;
    /// use glyphboard::surface::SvgSurface;
    ///
    /// let layout = BoardLayout::default();
    /// let surface = SvgSurface::new(layout.width(), layout.height());
    /// let mut board = Board::new(SymbolRenderer::new(surface), ShapeCatalog::reference(), layout);
    ///
    /// let record = PieceRecord {
    ///     faction: "orc".into(),
    ///     role: "Lineman".into(),
    ///     x: 3,
    ///     y: 7,
    ///     number: 4,
    ///     side: "away".into(),
    /// };
    /// let placed = board.place_piece(record).unwrap();
    /// assert_eq!(placed.symbol_id, "player-away-4Symbol");
    /// assert_eq!(placed.interpolation, Interpolation::Basis);
    /// ```
    ///
    /// # Errors
    ///
    /// - [`SymbolError::UnknownPieceRole`] if the catalog has no shape for the
    ///   record's faction and role
    /// - [`SymbolError::DuplicateSymbolId`] if the piece is already on the board
    pub fn place_piece(&mut self, record: PieceRecord) -> Result<&PlacedPiece, SymbolError> {
        let kind = self.catalog.shape_for(&record.faction, &record.role)?;
        let piece_id = record.piece_id();
        let symbol_id = record.symbol_id();
        let label_id = record.label_id();
        if self.pieces.contains_key(&piece_id) || self.renderer.surface().contains(&label_id) {
            return Err(SymbolError::DuplicateSymbolId(symbol_id));
        }

        let center = self.layout.cell_center(record.x, record.y);
        let interpolation = self.renderer.place_kind(
            kind,
            center,
            self.layout.symbol_size,
            &format!("{} {}", SYMBOL_CLASS, record.side),
            &symbol_id,
        )?;
        self.renderer.surface_mut().append_label(
            &label_id,
            &format!("{} {}", LABEL_CLASS, record.side),
            center,
            &record.number.to_string(),
        )?;

        debug!("piece '{}' ({} {}) placed as {}", piece_id, record.faction, record.role, kind);
        self.order.push(piece_id.clone());
        let placed: &PlacedPiece = self
            .pieces
            .entry(piece_id)
            .or_insert(PlacedPiece { record, symbol_id, label_id, interpolation });
        Ok(placed)
    }

    /// Move a placed piece to grid cell (gx, gy).
    ///
    /// The symbol is shifted by the grid delta times the cell size and
    /// redrawn with the mode stored at placement; the label jumps to the new
    /// cell center.
    ///
    /// # Errors
    ///
    /// [`SymbolError::SymbolNotFound`] if no piece has this id.
    pub fn move_piece(&mut self, piece_id: &str, gx: i32, gy: i32) -> Result<AnimationHandle, SymbolError> {
        let piece = self
            .pieces
            .get_mut(piece_id)
            .ok_or_else(|| SymbolError::SymbolNotFound(piece_id.to_string()))?;

        let dx = (f64::from(gx) - f64::from(piece.record.x)) * self.layout.cell_size;
        let dy = (f64::from(gy) - f64::from(piece.record.y)) * self.layout.cell_size;
        let handle = self.renderer.move_symbol(&piece.symbol_id, dx, dy, piece.interpolation)?;
        self.renderer
            .surface_mut()
            .set_label_position(&piece.label_id, self.layout.cell_center(gx, gy))?;

        debug!(
            "piece '{}' moved from ({}, {}) to ({}, {})",
            piece_id, piece.record.x, piece.record.y, gx, gy
        );
        piece.record.x = gx;
        piece.record.y = gy;
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::motion::TransitionTiming;
    use crate::surface::{SvgSurface, TransitionOutcome};

    fn record(faction: &str, role: &str, x: i32, y: i32, number: u32, side: &str) -> PieceRecord {
        PieceRecord {
            faction: faction.to_string(),
            role: role.to_string(),
            x,
            y,
            number,
            side: side.to_string(),
        }
    }

    fn board() -> Board<SvgSurface> {
        let layout = BoardLayout::default();
        let renderer = SymbolRenderer::new(SvgSurface::new(layout.width(), layout.height()))
            .with_timing(TransitionTiming::instant());
        Board::new(renderer, ShapeCatalog::reference(), layout)
    }

    #[test]
    fn test_ids() {
        let r = record("orc", "Blitzer", 0, 0, 4, "away");
        assert_eq!(r.piece_id(), "player-away-4");
        assert_eq!(r.symbol_id(), "player-away-4Symbol");
        assert_eq!(r.label_id(), "player-away-4Number");
    }

    #[test]
    fn test_layout_geometry() {
        let layout = BoardLayout::default();
        assert_eq!(layout.cell_center(0, 0), Point::new(35.0, 35.0));
        assert_eq!(layout.cell_center(3, 7), Point::new(125.0, 245.0));
        assert_eq!(layout.width(), 820.0);
        assert_eq!(layout.height(), 490.0);
    }

    #[test]
    fn test_record_from_json() {
        let r: PieceRecord = serde_json::from_str(
            r#"{"faction":"orc","role":"Blitzer","x":3,"y":7,"number":4,"side":"away"}"#,
        )
        .unwrap();
        assert_eq!(r, record("orc", "Blitzer", 3, 7, 4, "away"));
    }

    #[test]
    fn test_place_piece_draws_symbol_and_label() {
        let mut b = board();
        let placed = b.place_piece(record("ogre", "Ogre", 3, 7, 9, "home")).unwrap().clone();
        assert_eq!(placed.interpolation, Interpolation::Linear);

        let surface = b.surface();
        assert_eq!(surface.class_of("player-home-9Symbol"), Some("playerSymbol home"));
        assert_eq!(surface.label("player-home-9Number"), Some((Point::new(125.0, 245.0), "9")));

        let symbol = b.renderer().symbols().get("player-home-9Symbol").unwrap();
        assert_eq!(symbol.outline()[0], Point::new(115.0, 235.0));
        assert_eq!(symbol.centroid(), Point::new(125.0, 245.0));
    }

    #[test]
    fn test_place_unknown_role() {
        let mut b = board();
        let err = b.place_piece(record("human", "Referee", 0, 0, 1, "home")).unwrap_err();
        assert_eq!(
            err,
            SymbolError::UnknownPieceRole { faction: "human".to_string(), role: "Referee".to_string() }
        );
        assert!(b.surface().is_empty());
        assert!(b.piece("player-home-1").is_none());
    }

    #[test]
    fn test_place_twice_is_duplicate() {
        let mut b = board();
        b.place_piece(record("orc", "Lineman", 1, 1, 2, "away")).unwrap();
        let err = b.place_piece(record("orc", "Blitzer", 5, 5, 2, "away")).unwrap_err();
        assert!(matches!(err, SymbolError::DuplicateSymbolId(_)));
        assert_eq!(b.surface().len(), 2);
        assert_eq!(b.piece("player-away-2").unwrap().record.role, "Lineman");
    }

    #[test]
    fn test_same_number_on_both_sides() {
        let mut b = board();
        b.place_piece(record("orc", "Lineman", 1, 1, 2, "away")).unwrap();
        b.place_piece(record("human", "Lineman", 2, 2, 2, "home")).unwrap();
        assert_eq!(b.pieces().count(), 2);
        assert_eq!(b.surface().len(), 4);
    }

    #[test]
    fn test_move_piece_shifts_by_cells() {
        let mut b = board();
        b.place_piece(record("human", "Catcher", 2, 2, 5, "home")).unwrap();
        let handle = b.move_piece("player-home-5", 4, 1).unwrap();
        assert_eq!(handle.now_or_never(), Some(TransitionOutcome::Completed));

        let symbol = b.renderer().symbols().get("player-home-5Symbol").unwrap();
        assert_eq!(symbol.centroid(), b.layout().cell_center(4, 1));
        assert_eq!(b.surface().label("player-home-5Number").unwrap().0, b.layout().cell_center(4, 1));

        let piece = b.piece("player-home-5").unwrap();
        assert_eq!((piece.record.x, piece.record.y), (4, 1));
    }

    #[test]
    fn test_move_circle_piece_keeps_basis() {
        let mut b = board();
        b.place_piece(record("orc", "Lineman", 0, 0, 1, "away")).unwrap();
        b.move_piece("player-away-1", 1, 0).unwrap().now_or_never();

        let symbol = b.renderer().symbols().get("player-away-1Symbol").unwrap();
        let drawn = b.surface().path("player-away-1Symbol").unwrap();
        assert_eq!(drawn, &crate::path::PathData::from_points(symbol.outline(), Interpolation::Basis));
    }

    #[test]
    fn test_move_across_extreme_grid_values() {
        let mut b = board();
        b.place_piece(record("ogre", "Ogre", -5, i32::MIN, 1, "home")).unwrap();
        let before = b.renderer().symbols().get("player-home-1Symbol").unwrap().centroid();

        b.move_piece("player-home-1", i32::MAX, i32::MAX).unwrap().now_or_never();

        let after = b.renderer().symbols().get("player-home-1Symbol").unwrap().centroid();
        let expected_dx = (f64::from(i32::MAX) + 5.0) * 30.0;
        let expected_dy = (f64::from(i32::MAX) - f64::from(i32::MIN)) * 30.0;
        assert!(((after.x - before.x) - expected_dx).abs() < 1.0);
        assert!(((after.y - before.y) - expected_dy).abs() < 1.0);
        let piece = b.piece("player-home-1").unwrap();
        assert_eq!((piece.record.x, piece.record.y), (i32::MAX, i32::MAX));
    }

    #[test]
    fn test_move_unknown_piece() {
        let mut b = board();
        let err = b.move_piece("player-home-99", 1, 1).unwrap_err();
        assert_eq!(err, SymbolError::SymbolNotFound("player-home-99".to_string()));
    }

    #[test]
    fn test_move_animates_over_timing() {
        let layout = BoardLayout::default();
        let renderer = SymbolRenderer::new(SvgSurface::new(layout.width(), layout.height()));
        let mut b = Board::new(renderer, ShapeCatalog::reference(), layout);
        b.place_piece(record("ogre", "Ogre", 0, 0, 1, "home")).unwrap();

        let mut handle = b.move_piece("player-home-1", 2, 0).unwrap();
        assert_eq!(handle.try_outcome(), None);
        b.surface_mut().settle(Duration::from_millis(16));
        assert_eq!(handle.try_outcome(), Some(TransitionOutcome::Completed));
        assert_eq!(block_on(handle), TransitionOutcome::Completed);
    }
}
