//! Configuration schema types for `glyphboard.toml`
//!
//! Defines the structure and validation rules for board rendering settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::catalog::ShapeCatalog;
use crate::motion::{parse_easing, TransitionTiming, DEFAULT_TRANSITION_MS};
use crate::placement::BoardLayout;
use crate::shapes::{DEFAULT_CIRCLE_SAMPLES, MIN_CIRCLE_SAMPLES};

/// Shape generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapesConfig {
    /// Number of distinct points sampled around the circle
    #[serde(default = "default_circle_samples")]
    pub circle_samples: usize,
}

impl Default for ShapesConfig {
    fn default() -> Self {
        Self { circle_samples: default_circle_samples() }
    }
}

fn default_circle_samples() -> usize {
    DEFAULT_CIRCLE_SAMPLES
}

/// Move transition settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Transition length in milliseconds, 0 applies moves at once
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Easing curve name
    #[serde(default = "default_easing")]
    pub easing: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: default_duration_ms(), easing: default_easing() }
    }
}

fn default_duration_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}

fn default_easing() -> String {
    "ease-in-out".to_string()
}

/// Complete glyphboard.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Board grid geometry
    #[serde(default)]
    pub layout: BoardLayout,
    /// Shape generation
    #[serde(default)]
    pub shapes: ShapesConfig,
    /// Move transitions
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Faction tables; the reference catalog is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<ShapeCatalog>,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "layout.cell_size")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "glyphboard.toml: '{}' {}", self.field, self.message)
    }
}

impl GlyphConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let mut push = |field: &str, message: &str| {
            errors.push(ConfigValidationError { field: field.to_string(), message: message.to_string() });
        };

        let layout = &self.layout;
        if layout.cell_size.is_nan() || layout.cell_size <= 0.0 {
            push("layout.cell_size", "must be a positive number");
        }
        if layout.symbol_size.is_nan() || layout.symbol_size <= 0.0 {
            push("layout.symbol_size", "must be a positive number");
        }
        if layout.margin.is_nan() || layout.margin < 0.0 {
            push("layout.margin", "must not be negative");
        }
        if layout.columns == 0 {
            push("layout.columns", "must be a positive integer");
        }
        if layout.rows == 0 {
            push("layout.rows", "must be a positive integer");
        }

        if self.shapes.circle_samples < MIN_CIRCLE_SAMPLES {
            push("shapes.circle_samples", &format!("must be at least {}", MIN_CIRCLE_SAMPLES));
        }

        if parse_easing(&self.animation.easing).is_none() {
            push(
                "animation.easing",
                &format!("unknown easing '{}'", self.animation.easing),
            );
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Transition timing for moves. Unknown easing names fall back to the default curve.
    pub fn timing(&self) -> TransitionTiming {
        TransitionTiming::new(
            Duration::from_millis(self.animation.duration_ms),
            parse_easing(&self.animation.easing).unwrap_or_default(),
        )
    }

    /// Configured catalog, or the reference one
    pub fn catalog(&self) -> ShapeCatalog {
        self.catalog.clone().unwrap_or_else(ShapeCatalog::reference)
    }
}
