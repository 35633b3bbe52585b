//! Shape geometry for board symbols.
//!
//! Every shape in the closed vocabulary is an outline in a unit square
//! centered on the origin, paired with the curve rule used to join its
//! points. Definitions are computed once into a process-wide [`ShapeTable`]
//! and handed out by reference or as owned clones.
//!
//! # Examples
//!
//! ```
//! use glyphboard::shapes::{generate, Interpolation};
//!
//! let square = generate("square").unwrap();
//! assert_eq!(square.interpolation, Interpolation::Linear);
//! assert_eq!(square.outline.first(), square.outline.last());
//!
//! assert!(generate("hexagon").is_err());
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::SymbolError;

/// Circle sample count used when nothing else is configured
pub const DEFAULT_CIRCLE_SAMPLES: usize = 50;

/// Fewest circle samples that still read as a smooth curve
pub const MIN_CIRCLE_SAMPLES: usize = 32;

/// A 2D point in either normalized shape space or board space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between two points
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Shift the point in place
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Scale uniformly by `diameter` and move the result to `origin`
    pub fn place(&self, origin: Point, diameter: f64) -> Point {
        Point {
            x: self.x * diameter + origin.x,
            y: self.y * diameter + origin.y,
        }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

/// Curve rule joining consecutive outline points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    /// Straight segments
    #[default]
    Linear,
    /// Uniform cubic B-spline through the points (pulls the curve slightly inward)
    Basis,
}

impl Interpolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Basis => "basis",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The closed set of symbol shapes.
///
/// The serialized names are the wire contract used by shape catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    Square,
    Circle,
    Rising,
    RectangleHorizontal,
    Diamond,
    Chevron,
}

impl ShapeKind {
    /// Every shape, in table order
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Rising,
        ShapeKind::RectangleHorizontal,
        ShapeKind::Diamond,
        ShapeKind::Chevron,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Rising => "rising",
            ShapeKind::RectangleHorizontal => "rectangleHorizontal",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Chevron => "chevron",
        }
    }

    /// Curve rule the shape is drawn with
    pub fn interpolation(&self) -> Interpolation {
        match self {
            ShapeKind::Circle => Interpolation::Basis,
            _ => Interpolation::Linear,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    /// Hand-specified closed vertex loop for polygon shapes
    fn vertices(&self) -> Option<&'static [(f64, f64)]> {
        let vertices: &'static [(f64, f64)] = match self {
            ShapeKind::Square => &[(-0.5, -0.5), (-0.5, 0.5), (0.5, 0.5), (0.5, -0.5), (-0.5, -0.5)],
            ShapeKind::Rising => &[
                (-0.5, 0.5),
                (-0.5, 0.0),
                (0.0, -0.5),
                (0.5, -0.5),
                (0.5, 0.0),
                (0.0, 0.5),
                (-0.5, 0.5),
            ],
            ShapeKind::RectangleHorizontal => {
                &[(-0.5, -0.35), (-0.5, 0.35), (0.5, 0.35), (0.5, -0.35), (-0.5, -0.35)]
            }
            ShapeKind::Diamond => &[(-0.5, 0.0), (0.0, 0.5), (0.5, 0.0), (0.0, -0.5), (-0.5, 0.0)],
            ShapeKind::Chevron => &[
                (-0.5, 0.5),
                (-0.5, -0.25),
                (0.0, -0.5),
                (0.5, -0.25),
                (0.5, 0.5),
                (0.0, 0.25),
                (-0.5, 0.5),
            ],
            ShapeKind::Circle => return None,
        };
        Some(vertices)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SymbolError::UnknownShape(s.to_string()))
    }
}

/// A normalized outline plus the curve rule that joins it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDefinition {
    pub outline: Vec<Point>,
    pub interpolation: Interpolation,
}

impl ShapeDefinition {
    /// True when the first and last points coincide exactly
    pub fn is_closed(&self) -> bool {
        match (self.outline.first(), self.outline.last()) {
            (Some(first), Some(last)) => self.outline.len() >= 2 && first == last,
            _ => false,
        }
    }

    /// Outline scaled by `diameter` and centered on `origin`
    pub fn placed(&self, origin: Point, diameter: f64) -> Vec<Point> {
        self.outline.iter().map(|p| p.place(origin, diameter)).collect()
    }

    fn polygon(vertices: &[(f64, f64)]) -> Self {
        Self {
            outline: vertices.iter().copied().map(Point::from).collect(),
            interpolation: Interpolation::Linear,
        }
    }

    fn circle(samples: usize) -> Self {
        let outline = (0..=samples)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / samples as f64;
                Point::new(0.5 * theta.cos(), 0.5 * theta.sin())
            })
            .collect();
        Self { outline, interpolation: Interpolation::Basis }
    }
}

static SHAPE_TABLE: OnceLock<ShapeTable> = OnceLock::new();

/// Precomputed definitions for every [`ShapeKind`].
///
/// One table is installed per process and never changes afterwards.
#[derive(Debug, Clone)]
pub struct ShapeTable {
    circle_samples: usize,
    definitions: Vec<ShapeDefinition>,
}

impl ShapeTable {
    /// Build a table sampling the circle `circle_samples` times.
    ///
    /// Counts below [`MIN_CIRCLE_SAMPLES`] are raised to the minimum.
    pub fn new(circle_samples: usize) -> Self {
        let circle_samples = circle_samples.max(MIN_CIRCLE_SAMPLES);
        let definitions = ShapeKind::ALL
            .iter()
            .map(|kind| match kind.vertices() {
                Some(vertices) => ShapeDefinition::polygon(vertices),
                None => ShapeDefinition::circle(circle_samples),
            })
            .collect();
        Self { circle_samples, definitions }
    }

    /// Install `table` as the process-wide table.
    ///
    /// Only the first install wins; later calls keep the existing table and
    /// return it.
    pub fn install(table: ShapeTable) -> &'static ShapeTable {
        let requested = table.circle_samples;
        let installed = SHAPE_TABLE.get_or_init(|| table);
        if installed.circle_samples != requested {
            log::warn!(
                "shape table already installed with {} circle samples, ignoring request for {}",
                installed.circle_samples,
                requested
            );
        }
        installed
    }

    /// The process-wide table, created with defaults on first use
    pub fn global() -> &'static ShapeTable {
        SHAPE_TABLE.get_or_init(ShapeTable::default)
    }

    pub fn circle_samples(&self) -> usize {
        self.circle_samples
    }

    pub fn definition(&self, kind: ShapeKind) -> &ShapeDefinition {
        &self.definitions[kind.index()]
    }

    /// Look up a definition by its wire name
    pub fn lookup(&self, name: &str) -> Result<&ShapeDefinition, SymbolError> {
        let kind: ShapeKind = name.parse()?;
        Ok(self.definition(kind))
    }
}

impl Default for ShapeTable {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SAMPLES)
    }
}

/// Generate the definition for a shape name.
///
/// # Errors
///
/// Returns [`SymbolError::UnknownShape`] for names outside the closed set.
pub fn generate(name: &str) -> Result<ShapeDefinition, SymbolError> {
    ShapeTable::global().lookup(name).cloned()
}
