//! SVG path data for symbol outlines
//!
//! Builds path commands from a point sequence and an [`Interpolation`], and
//! parses SVG `d` strings back into commands. Supported commands:
//! - M (moveto)
//! - L (lineto)
//! - H (horizontal lineto)
//! - V (vertical lineto)
//! - C (cubic bezier)
//! - Z (closepath)
//!
//! Each command supports both absolute (uppercase) and relative (lowercase)
//! variants. Parsed paths are normalized to absolute M/L/C/Z commands.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::shapes::{Interpolation, Point};

/// Error type for path parsing failures
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum PathError {
    /// Path string is empty
    #[error("empty path string")]
    Empty,
    /// Unknown command character
    #[error("unknown command '{0}'")]
    UnknownCommand(char),
    /// Not enough coordinates for command
    #[error("not enough coordinates for command '{0}'")]
    NotEnoughCoordinates(char),
    /// Invalid number format
    #[error("invalid number '{0}': {1}")]
    InvalidNumber(String, String),
    /// Missing initial moveto command
    #[error("path must start with M or m command")]
    MissingMoveto,
}

/// A single absolute path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo(Point, Point, Point),
    Close,
}

impl PathCommand {
    fn same_kind(&self, other: &PathCommand) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn lerp(&self, other: &PathCommand, t: f64) -> PathCommand {
        match (self, other) {
            (PathCommand::MoveTo(a), PathCommand::MoveTo(b)) => PathCommand::MoveTo(a.lerp(b, t)),
            (PathCommand::LineTo(a), PathCommand::LineTo(b)) => PathCommand::LineTo(a.lerp(b, t)),
            (PathCommand::CurveTo(a1, a2, a3), PathCommand::CurveTo(b1, b2, b3)) => {
                PathCommand::CurveTo(a1.lerp(b1, t), a2.lerp(b2, t), a3.lerp(b3, t))
            }
            _ => *other,
        }
    }
}

/// A drawable path: the value of an SVG `d` attribute
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

// Uniform cubic B-spline to bezier weights
const BASIS_CONTROL_1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const BASIS_CONTROL_2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
const BASIS_END: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

fn dot4(weights: &[f64; 4], values: &[f64; 4]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}

impl PathData {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Build a path through `points` with the given curve rule.
    ///
    /// Linear paths are `M p0 L p1 ... L pn`. Basis paths run a clamped
    /// uniform B-spline over the points; with fewer than three points they
    /// fall back to straight segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphboard::path::PathData;
    /// use glyphboard::shapes::{Interpolation, Point};
    ///
    /// let points = [Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(5.0, 5.0)];
    /// let path = PathData::from_points(&points, Interpolation::Linear);
    /// assert_eq!(path.to_string(), "M0,0L5,0L5,5");
    /// ```
    pub fn from_points(points: &[Point], interpolation: Interpolation) -> Self {
        match interpolation {
            Interpolation::Basis if points.len() >= 3 => Self::basis(points),
            _ => Self::linear(points),
        }
    }

    fn linear(points: &[Point]) -> Self {
        let commands = points
            .iter()
            .enumerate()
            .map(|(i, p)| if i == 0 { PathCommand::MoveTo(*p) } else { PathCommand::LineTo(*p) })
            .collect();
        Self { commands }
    }

    fn basis(points: &[Point]) -> Self {
        let n = points.len();
        let first = points[0];
        let second = points[1];
        let mut xs = [first.x, first.x, first.x, second.x];
        let mut ys = [first.y, first.y, first.y, second.y];

        let mut commands = Vec::with_capacity(n + 2);
        commands.push(PathCommand::MoveTo(first));
        commands.push(PathCommand::LineTo(Point::new(dot4(&BASIS_END, &xs), dot4(&BASIS_END, &ys))));

        // The last point is repeated once so the spline reaches it
        let last = points[n - 1];
        for p in points[2..].iter().chain(std::iter::once(&last)) {
            xs.rotate_left(1);
            ys.rotate_left(1);
            xs[3] = p.x;
            ys[3] = p.y;
            commands.push(PathCommand::CurveTo(
                Point::new(dot4(&BASIS_CONTROL_1, &xs), dot4(&BASIS_CONTROL_1, &ys)),
                Point::new(dot4(&BASIS_CONTROL_2, &xs), dot4(&BASIS_CONTROL_2, &ys)),
                Point::new(dot4(&BASIS_END, &xs), dot4(&BASIS_END, &ys)),
            ));
        }
        commands.push(PathCommand::LineTo(last));

        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// True when both paths have the same command sequence shape
    pub fn is_compatible(&self, other: &PathData) -> bool {
        self.commands.len() == other.commands.len()
            && self.commands.iter().zip(&other.commands).all(|(a, b)| a.same_kind(b))
    }

    /// Morph towards `other`.
    ///
    /// Coordinates are interpolated pairwise when the two paths are
    /// compatible; otherwise the result snaps to `other`.
    pub fn lerp(&self, other: &PathData, t: f64) -> PathData {
        if !self.is_compatible(other) {
            return other.clone();
        }
        let commands = self.commands.iter().zip(&other.commands).map(|(a, b)| a.lerp(b, t)).collect();
        PathData { commands }
    }

    /// Every endpoint and control point, in command order
    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(*p),
                PathCommand::CurveTo(c1, c2, p) => points.extend([*c1, *c2, *p]),
                PathCommand::Close => {}
            }
        }
        points
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", p.x, p.y)?,
                PathCommand::CurveTo(c1, c2, p) => {
                    write!(f, "C{},{},{},{},{},{}", c1.x, c1.y, c2.x, c2.y, p.x, p.y)?
                }
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

impl FromStr for PathData {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

/// Parse an SVG path string into absolute path commands.
///
/// # Examples
///
/// ```
/// use glyphboard::path::{parse_path, PathCommand};
/// use glyphboard::shapes::Point;
///
/// let path = parse_path("M0,0 l10,0 V5 Z").unwrap();
/// assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(10.0, 0.0)));
/// assert_eq!(path.commands()[2], PathCommand::LineTo(Point::new(10.0, 5.0)));
/// ```
///
/// # Errors
///
/// Returns `PathError` if the path is invalid or malformed.
pub fn parse_path(path: &str) -> Result<PathData, PathError> {
    let path = path.trim();
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let mut commands = Vec::new();
    let mut current = Point::default();
    let mut start = Point::default();
    let mut tokens = tokenize_path(path).into_iter().peekable();
    let mut has_moveto = false;

    while let Some(token) = tokens.next() {
        let cmd = match token {
            PathToken::Command(c) => c,
            PathToken::Number(n) => {
                return Err(PathError::UnknownCommand(n.chars().next().unwrap_or('?')));
            }
        };

        // First command must be M or m
        if !has_moveto && cmd != 'M' && cmd != 'm' {
            return Err(PathError::MissingMoveto);
        }

        match cmd {
            'M' | 'm' => {
                let p = next_point(&mut tokens, cmd)?;
                // A leading relative moveto is treated as absolute
                current = if cmd == 'm' && has_moveto { offset(current, p) } else { p };
                start = current;
                commands.push(PathCommand::MoveTo(current));
                has_moveto = true;
            }
            'L' | 'l' => {
                let p = next_point(&mut tokens, cmd)?;
                current = if cmd == 'l' { offset(current, p) } else { p };
                commands.push(PathCommand::LineTo(current));
            }
            'H' | 'h' => {
                let x = next_number(&mut tokens, cmd)?;
                current.x = if cmd == 'h' { current.x + x } else { x };
                commands.push(PathCommand::LineTo(current));
            }
            'V' | 'v' => {
                let y = next_number(&mut tokens, cmd)?;
                current.y = if cmd == 'v' { current.y + y } else { y };
                commands.push(PathCommand::LineTo(current));
            }
            'C' | 'c' => {
                let c1 = next_point(&mut tokens, cmd)?;
                let c2 = next_point(&mut tokens, cmd)?;
                let end = next_point(&mut tokens, cmd)?;
                let (c1, c2, end) = if cmd == 'c' {
                    (offset(current, c1), offset(current, c2), offset(current, end))
                } else {
                    (c1, c2, end)
                };
                current = end;
                commands.push(PathCommand::CurveTo(c1, c2, end));
            }
            'Z' | 'z' => {
                current = start;
                commands.push(PathCommand::Close);
            }
            other => return Err(PathError::UnknownCommand(other)),
        }
    }

    Ok(PathData { commands })
}

fn offset(base: Point, delta: Point) -> Point {
    Point::new(base.x + delta.x, base.y + delta.y)
}

#[derive(Debug, Clone, PartialEq)]
enum PathToken {
    Command(char),
    Number(String),
}

/// Tokenize a path string into command and number tokens
fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, tokens: &mut Vec<PathToken>| {
        if !current.is_empty() {
            tokens.push(PathToken::Number(std::mem::take(current)));
        }
    };

    for ch in path.chars() {
        match ch {
            ',' | ' ' | '\t' | '\n' | '\r' => flush(&mut current, &mut tokens),
            // A sign starts a new number unless it follows an exponent
            '-' | '+' if !current.is_empty() && !current.ends_with(|c| c == 'e' || c == 'E') => {
                flush(&mut current, &mut tokens);
                current.push(ch);
            }
            c if c.is_ascii_alphabetic() && c != 'e' && c != 'E' => {
                flush(&mut current, &mut tokens);
                tokens.push(PathToken::Command(c));
            }
            _ => current.push(ch),
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

fn next_number<I>(tokens: &mut std::iter::Peekable<I>, cmd: char) -> Result<f64, PathError>
where
    I: Iterator<Item = PathToken>,
{
    match tokens.peek() {
        Some(PathToken::Number(_)) => {}
        _ => return Err(PathError::NotEnoughCoordinates(cmd)),
    }
    match tokens.next() {
        Some(PathToken::Number(s)) => {
            s.parse::<f64>().map_err(|e| PathError::InvalidNumber(s.clone(), e.to_string()))
        }
        _ => Err(PathError::NotEnoughCoordinates(cmd)),
    }
}

fn next_point<I>(tokens: &mut std::iter::Peekable<I>, cmd: char) -> Result<Point, PathError>
where
    I: Iterator<Item = PathToken>,
{
    let x = next_number(tokens, cmd)?;
    let y = next_number(tokens, cmd)?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_linear_path_string() {
        let path = PathData::from_points(&square(), Interpolation::Linear);
        assert_eq!(path.to_string(), "M0,0L0,5L5,5L5,0L0,0");
    }

    #[test]
    fn test_basis_path_structure() {
        let points = square();
        let path = PathData::from_points(&points, Interpolation::Basis);
        let commands = path.commands();
        // M, L, one C per point after the first (with the last repeated), final L
        assert_eq!(commands.len(), 2 + (points.len() - 1) + 1);
        assert_eq!(commands[0], PathCommand::MoveTo(points[0]));
        assert_eq!(commands[commands.len() - 1], PathCommand::LineTo(points[points.len() - 1]));
        assert!(matches!(commands[2], PathCommand::CurveTo(..)));
    }

    #[test]
    fn test_basis_first_segment_weights() {
        let points = [Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(6.0, 6.0)];
        let path = PathData::from_points(&points, Interpolation::Basis);
        // b(p0, p0, p0, p1) = p0*5/6 + p1/6
        assert_eq!(path.commands()[1], PathCommand::LineTo(Point::new(1.0, 0.0)));
        match path.commands()[2] {
            PathCommand::CurveTo(c1, c2, end) => {
                assert!((c1.x - 2.0).abs() < 1e-9 && c1.y.abs() < 1e-9);
                assert!((c2.x - 4.0).abs() < 1e-9 && c2.y.abs() < 1e-9);
                assert!((end.x - 5.0).abs() < 1e-9 && (end.y - 1.0).abs() < 1e-9);
            }
            other => panic!("expected curve, got {:?}", other),
        }
    }

    #[test]
    fn test_basis_falls_back_to_linear() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let basis = PathData::from_points(&points, Interpolation::Basis);
        let linear = PathData::from_points(&points, Interpolation::Linear);
        assert_eq!(basis, linear);
    }

    #[test]
    fn test_basis_contracts_circle() {
        let def = crate::shapes::generate("circle").unwrap();
        let path = PathData::from_points(&def.outline, Interpolation::Basis);
        let origin = Point::default();
        for p in path.points() {
            assert!(p.distance(&origin) <= 0.5 + 1e-9);
        }
    }

    #[test]
    fn test_display_parses_back() {
        let def = crate::shapes::generate("circle").unwrap();
        let path = PathData::from_points(&def.placed(Point::new(12.5, -3.0), 7.0), Interpolation::Basis);
        let parsed: PathData = path.to_string().parse().unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_lerp_compatible() {
        let a = PathData::from_points(&square(), Interpolation::Linear);
        let moved: Vec<Point> = square().iter().map(|p| Point::new(p.x + 10.0, p.y - 4.0)).collect();
        let b = PathData::from_points(&moved, Interpolation::Linear);
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.commands()[0], PathCommand::MoveTo(Point::new(5.0, -2.0)));
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_lerp_incompatible_snaps() {
        let a = PathData::from_points(&square(), Interpolation::Linear);
        let b = PathData::from_points(&square(), Interpolation::Basis);
        assert!(!a.is_compatible(&b));
        assert_eq!(a.lerp(&b, 0.1), b);
    }

    #[test]
    fn test_parse_path_rectangle() {
        let path = parse_path("M0,0 L5,0 L5,5 L0,5 Z").unwrap();
        assert_eq!(
            path.points(),
            vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(5.0, 5.0), Point::new(0.0, 5.0)]
        );
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_parse_path_relative_commands() {
        let path = parse_path("M10,10 l5,0 v5 h-5 c0,1 1,2 3,3").unwrap();
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(Point::new(10.0, 10.0)),
                PathCommand::LineTo(Point::new(15.0, 10.0)),
                PathCommand::LineTo(Point::new(15.0, 15.0)),
                PathCommand::LineTo(Point::new(10.0, 15.0)),
                PathCommand::CurveTo(Point::new(10.0, 16.0), Point::new(11.0, 17.0), Point::new(13.0, 18.0)),
            ]
        );
    }

    #[test]
    fn test_parse_path_first_moveto_relative_treated_absolute() {
        let path = parse_path("m5,5 L10,10").unwrap();
        assert_eq!(path.points(), vec![Point::new(5.0, 5.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn test_parse_path_compact_negative_numbers() {
        let path = parse_path("M-1.5-2L3e-1,-4").unwrap();
        assert_eq!(path.points(), vec![Point::new(-1.5, -2.0), Point::new(0.3, -4.0)]);
    }

    #[test]
    fn test_parse_path_whitespace_variations() {
        let v1 = parse_path("M0,0 L5,0 L5,5 Z").unwrap();
        let v2 = parse_path("M0 0 L5 0 L5 5 Z").unwrap();
        let v3 = parse_path("M 0 , 0 L 5 , 0 L 5 , 5 Z").unwrap();
        assert_eq!(v1, v2);
        assert_eq!(v1, v3);
    }

    #[test]
    fn test_parse_path_empty() {
        assert!(matches!(parse_path(""), Err(PathError::Empty)));
    }

    #[test]
    fn test_parse_path_missing_moveto() {
        assert!(matches!(parse_path("L10,10"), Err(PathError::MissingMoveto)));
    }

    #[test]
    fn test_parse_path_unknown_command() {
        assert!(matches!(parse_path("M0,0 Q10,10"), Err(PathError::UnknownCommand('Q'))));
    }

    #[test]
    fn test_parse_path_not_enough_coordinates() {
        assert!(matches!(parse_path("M0,0 L5"), Err(PathError::NotEnoughCoordinates('L'))));
        assert!(matches!(parse_path("M0,0 C1,1 2,2"), Err(PathError::NotEnoughCoordinates('C'))));
    }

    #[test]
    fn test_parse_path_invalid_number() {
        assert!(matches!(parse_path("M0,0 L5.5.5,5"), Err(PathError::InvalidNumber(_, _))));
    }
}
