//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod animate;
mod render;
mod shapes;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Deserialize;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, ConfigError, GlyphConfig};
use crate::placement::{Board, PieceRecord};
use crate::renderer::SymbolRenderer;
use crate::shapes::ShapeTable;
use crate::surface::SvgSurface;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// glyphb - Draw and animate board pieces as SVG
#[derive(Parser)]
#[command(name = "glyphb")]
#[command(about = "glyphb - Draw board pieces as shape symbols and animate their moves")]
#[command(version)]
pub struct Cli {
    /// Path to glyphboard.toml (default: discovered from the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every shape with its normalized outline and interpolation mode
    Shapes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw a list of pieces to an SVG file
    Render {
        /// JSON array of piece records
        pieces: PathBuf,

        /// Output SVG file
        #[arg(short, long, default_value = "board.svg")]
        output: PathBuf,
    },

    /// Draw pieces, apply moves and write one SVG per frame
    Animate {
        /// JSON array of piece records
        pieces: PathBuf,

        /// JSON array of moves ({"piece": "player-away-4", "x": 5, "y": 7})
        moves: PathBuf,

        /// Directory for frame files
        #[arg(long, default_value = "frames")]
        out_dir: PathBuf,

        /// Frames per second
        #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(1..=240))]
        fps: u32,

        /// Override transition length in milliseconds
        #[arg(long)]
        duration_ms: Option<u64>,

        /// Override easing curve (linear, ease-in, ease-out, ease-in-out, bounce, elastic, cubic-bezier(x1,y1,x2,y2))
        #[arg(long)]
        easing: Option<String>,
    },
}

/// A requested relocation of one piece
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveRecord {
    pub piece: String,
    pub x: i32,
    pub y: i32,
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Shapes { json } => shapes::run_shapes(config_path, json),
        Commands::Render { pieces, output } => render::run_render(config_path, &pieces, &output),
        Commands::Animate { pieces, moves, out_dir, fps, duration_ms, easing } => {
            let overrides = CliOverrides { duration_ms, easing, ..Default::default() };
            animate::run_animate(config_path, &overrides, &pieces, &moves, &out_dir, fps)
        }
    }
}

/// Load config, apply overrides, and install the shape table it asks for.
pub(crate) fn load_settings(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<GlyphConfig, ExitCode> {
    let mut config = load_config(path).map_err(|e| {
        eprintln!("Error: {}", e);
        match e {
            ConfigError::Io(_) => ExitCode::from(EXIT_INVALID_ARGS),
            _ => ExitCode::from(EXIT_ERROR),
        }
    })?;
    merge_cli_overrides(&mut config, overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in errors {
            eprintln!("Error: {}", e);
        }
        return Err(ExitCode::from(EXIT_INVALID_ARGS));
    }

    ShapeTable::install(ShapeTable::new(config.shapes.circle_samples));
    Ok(config)
}

/// Read a JSON array from `path`, reporting failures on stderr.
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T, ExitCode> {
    let contents = fs::read_to_string(path).map_err(|e| {
        eprintln!("Error: Cannot open {} file '{}': {}", what, path.display(), e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        eprintln!("Error: Invalid {} file '{}': {}", what, path.display(), e);
        ExitCode::from(EXIT_ERROR)
    })
}

/// Build a board sized by the config and place every piece on it.
pub(crate) fn build_board(config: &GlyphConfig, pieces: Vec<PieceRecord>) -> Result<Board<SvgSurface>, ExitCode> {
    let layout = config.layout;
    let surface = SvgSurface::new(layout.width(), layout.height());
    let renderer = SymbolRenderer::new(surface).with_timing(config.timing());
    let mut board = Board::new(renderer, config.catalog(), layout);

    for record in pieces {
        let piece_id = record.piece_id();
        if let Err(e) = board.place_piece(record) {
            eprintln!("Error: Cannot place '{}': {}", piece_id, e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    }
    log::info!("placed {} pieces", board.pieces().count());
    Ok(board)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ExitCode> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Error: Cannot create directory '{}': {}", parent.display(), e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    }
    fs::write(path, contents).map_err(|e| {
        eprintln!("Error: Cannot write '{}': {}", path.display(), e);
        ExitCode::from(EXIT_ERROR)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_animate_defaults() {
        let cli = Cli::try_parse_from(["glyphb", "animate", "pieces.json", "moves.json"]).unwrap();
        match cli.command {
            Commands::Animate { out_dir, fps, duration_ms, .. } => {
                assert_eq!(out_dir, PathBuf::from("frames"));
                assert_eq!(fps, 30);
                assert_eq!(duration_ms, None);
            }
            _ => panic!("expected animate"),
        }
    }

    #[test]
    fn test_parse_global_config() {
        let cli =
            Cli::try_parse_from(["glyphb", "render", "p.json", "-o", "out.svg", "--config", "g.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("g.toml")));
    }

    #[test]
    fn test_parse_rejects_zero_fps() {
        assert!(Cli::try_parse_from(["glyphb", "animate", "p.json", "m.json", "--fps", "0"]).is_err());
    }

    #[test]
    fn test_move_record_json() {
        let moves: Vec<MoveRecord> =
            serde_json::from_str(r#"[{"piece":"player-away-4","x":5,"y":7}]"#).unwrap();
        assert_eq!(moves, vec![MoveRecord { piece: "player-away-4".to_string(), x: 5, y: 7 }]);
    }
}
