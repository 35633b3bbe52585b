//! Configuration loading and discovery for `glyphboard.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::GlyphConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during discovery
pub const CONFIG_FILE_NAME: &str = "glyphboard.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse glyphboard.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override transition length
    pub duration_ms: Option<u64>,
    /// Override easing curve
    pub easing: Option<String>,
    /// Override symbol diameter
    pub symbol_size: Option<f64>,
}

/// Find glyphboard.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for glyphboard.toml
/// 2. Check XDG_CONFIG_HOME/glyphboard/glyphboard.toml (or ~/.config/glyphboard/glyphboard.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find glyphboard.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("glyphboard").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find glyphboard.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a glyphboard.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// // Load from discovered config
/// let config = load_config(None)?;
///
/// // Load from specific path
/// let config = load_config(Some(Path::new("boards/glyphboard.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<GlyphConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

/// Parse and validate configuration text.
pub fn parse_config(contents: &str) -> Result<GlyphConfig, ConfigError> {
    let config: GlyphConfig = toml::from_str(contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<GlyphConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Configuration used when no glyphboard.toml is found.
pub fn default_config() -> GlyphConfig {
    GlyphConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut GlyphConfig, overrides: &CliOverrides) {
    if let Some(duration_ms) = overrides.duration_ms {
        config.animation.duration_ms = duration_ms;
    }

    if let Some(ref easing) = overrides.easing {
        config.animation.easing = easing.clone();
    }

    if let Some(symbol_size) = overrides.symbol_size {
        config.layout.symbol_size = symbol_size;
    }
}
