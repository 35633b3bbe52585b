//! Easing and timing for symbol transitions
//!
//! A transition morphs a symbol's path from where it is drawn now to its new
//! position. This module decides how fast: the easing curve maps linear time
//! onto morph progress, and [`TransitionTiming`] pairs a curve with a duration.
//!
//! # Example
//!
//! ```
//! use glyphboard::motion::{ease, Easing, TransitionTiming};
//! use std::time::Duration;
//!
//! assert_eq!(ease(0.5, &Easing::Linear), 0.5);
//!
//! let timing = TransitionTiming::new(Duration::from_millis(200), Easing::EaseInOut);
//! assert!((timing.progress(Duration::from_millis(100)) - 0.5).abs() < 1e-9);
//! ```

use std::f64::consts::PI;
use std::time::Duration;

/// Default transition length for symbol moves
pub const DEFAULT_TRANSITION_MS: u64 = 250;

/// Easing curve applied to transition progress
#[derive(Debug, Clone, PartialEq)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start, fast end (acceleration)
    EaseIn,
    /// Fast start, slow end (deceleration)
    EaseOut,
    /// Smooth S-curve (slow start and end)
    EaseInOut,
    /// Overshoot and settle back
    Bounce,
    /// Spring-like oscillation
    Elastic,
    /// Custom cubic bezier curve
    Bezier {
        /// Control point 1 (x, y) - typically (0.0-1.0, 0.0-1.0)
        p1: (f64, f64),
        /// Control point 2 (x, y) - typically (0.0-1.0, 0.0-1.0)
        p2: (f64, f64),
    },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseInOut
    }
}

/// Apply easing to a normalized time value (0.0 to 1.0)
///
/// # Arguments
/// * `t` - Normalized time (0.0 = start, 1.0 = end)
/// * `easing` - The easing function to apply
///
/// # Returns
/// Eased value (typically 0.0 to 1.0, but may overshoot for bounce/elastic)
pub fn ease(t: f64, easing: &Easing) -> f64 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,

        Easing::EaseIn => t * t,

        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),

        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }

        Easing::Bounce => {
            let t = 1.0 - t;
            if t < 1.0 / 2.75 {
                1.0 - 7.5625 * t * t
            } else if t < 2.0 / 2.75 {
                let t = t - 1.5 / 2.75;
                1.0 - (7.5625 * t * t + 0.75)
            } else if t < 2.5 / 2.75 {
                let t = t - 2.25 / 2.75;
                1.0 - (7.5625 * t * t + 0.9375)
            } else {
                let t = t - 2.625 / 2.75;
                1.0 - (7.5625 * t * t + 0.984375)
            }
        }

        Easing::Elastic => {
            if t == 0.0 || t == 1.0 {
                t
            } else {
                let p = 0.3;
                let s = p / 4.0;
                let t = t - 1.0;
                -(2.0_f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin())
            }
        }

        Easing::Bezier { p1, p2 } => cubic_bezier_ease(t, p1.0, p1.1, p2.0, p2.1),
    }
}

/// Cubic bezier easing calculation
///
/// The curve is defined by: P0=(0,0), P1=(x1,y1), P2=(x2,y2), P3=(1,1)
fn cubic_bezier_ease(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    // Newton-Raphson iteration to find bezier parameter for x=t
    let mut guess = t;
    for _ in 0..8 {
        let x = cubic_bezier_1d(guess, x1, x2);
        let dx = cubic_bezier_derivative(guess, x1, x2);
        if dx.abs() < 1e-10 {
            break;
        }
        guess -= (x - t) / dx;
        guess = guess.clamp(0.0, 1.0);
    }

    cubic_bezier_1d(guess, y1, y2)
}

/// Evaluate 1D cubic bezier at parameter t with P0=0 and P3=1
fn cubic_bezier_1d(t: f64, p1: f64, p2: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * t * p1 + 3.0 * mt * t2 * p2 + t3
}

/// Derivative of 1D cubic bezier
fn cubic_bezier_derivative(t: f64, p1: f64, p2: f64) -> f64 {
    let t2 = t * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;

    3.0 * mt2 * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t2 * (1.0 - p2)
}

/// Parse an easing name or a CSS-style `cubic-bezier(x1, y1, x2, y2)`.
///
/// Bezier x coordinates must lie in [0, 1].
pub fn parse_easing(s: &str) -> Option<Easing> {
    let lower = s.trim().to_lowercase();
    if let Some(args) = lower.strip_prefix("cubic-bezier(").and_then(|rest| rest.strip_suffix(')')) {
        return parse_cubic_bezier(args);
    }
    match lower.as_str() {
        "linear" => Some(Easing::Linear),
        "ease-in" | "easein" => Some(Easing::EaseIn),
        "ease-out" | "easeout" => Some(Easing::EaseOut),
        "ease-in-out" | "easeinout" | "ease" => Some(Easing::EaseInOut),
        "bounce" => Some(Easing::Bounce),
        "elastic" => Some(Easing::Elastic),
        _ => None,
    }
}

fn parse_cubic_bezier(args: &str) -> Option<Easing> {
    let values = args.split(',').map(|v| v.trim().parse::<f64>().ok()).collect::<Option<Vec<_>>>()?;
    let [x1, y1, x2, y2] = values[..] else {
        return None;
    };
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) || y1.is_nan() || y2.is_nan() {
        return None;
    }
    Some(Easing::Bezier { p1: (x1, y1), p2: (x2, y2) })
}

/// How long a transition runs and how its progress is shaped
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTiming {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionTiming {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Timing that applies the new path at once
    pub fn instant() -> Self {
        Self { duration: Duration::ZERO, easing: Easing::Linear }
    }

    /// Linear progress after `elapsed`, clamped to 0.0..=1.0
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased morph amount after `elapsed`
    pub fn eased(&self, elapsed: Duration) -> f64 {
        ease(self.progress(elapsed), &self.easing)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self { duration: Duration::from_millis(DEFAULT_TRANSITION_MS), easing: Easing::default() }
    }
}
