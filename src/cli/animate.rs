//! Animate command implementation (SVG frame sequence)

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use crate::config::CliOverrides;
use crate::placement::{Board, PieceRecord};
use crate::surface::{SvgSurface, TransitionOutcome};

use super::{build_board, load_settings, read_json, write_file, MoveRecord, EXIT_ERROR, EXIT_SUCCESS};

struct FrameWriter<'a> {
    out_dir: &'a Path,
    count: usize,
}

impl FrameWriter<'_> {
    fn write(&mut self, board: &Board<SvgSurface>) -> Result<(), ExitCode> {
        let path = self.out_dir.join(format!("frame_{:04}.svg", self.count));
        write_file(&path, &board.surface().to_svg())?;
        self.count += 1;
        Ok(())
    }
}

/// Execute the animate command.
///
/// Moves run one after another. Frame 0 shows the initial board; every
/// later frame advances the surface clock by one frame interval until the
/// running move has settled.
pub fn run_animate(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
    pieces: &Path,
    moves: &Path,
    out_dir: &Path,
    fps: u32,
) -> ExitCode {
    let config = match load_settings(config_path, overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let records: Vec<PieceRecord> = match read_json(pieces, "pieces") {
        Ok(r) => r,
        Err(code) => return code,
    };
    let moves: Vec<MoveRecord> = match read_json(moves, "moves") {
        Ok(m) => m,
        Err(code) => return code,
    };
    let mut board = match build_board(&config, records) {
        Ok(b) => b,
        Err(code) => return code,
    };

    let frame_dt = Duration::from_secs(1) / fps;
    let mut frames = FrameWriter { out_dir, count: 0 };
    if let Err(code) = frames.write(&board) {
        return code;
    }

    for mv in &moves {
        let mut handle = match board.move_piece(&mv.piece, mv.x, mv.y) {
            Ok(h) => h,
            Err(e) => {
                eprintln!("Error: Cannot move '{}': {}", mv.piece, e);
                return ExitCode::from(EXIT_ERROR);
            }
        };

        loop {
            if let Some(outcome) = handle.try_outcome() {
                if outcome == TransitionOutcome::Interrupted {
                    log::warn!("move of '{}' was interrupted", mv.piece);
                }
                break;
            }
            board.surface_mut().tick(frame_dt);
            if let Err(code) = frames.write(&board) {
                return code;
            }
        }

        // An instant move still gets a frame of its own
        if config.timing().duration.is_zero() {
            if let Err(code) = frames.write(&board) {
                return code;
            }
        }
        log::debug!("'{}' reached ({}, {}) at frame {}", mv.piece, mv.x, mv.y, frames.count);
    }

    log::info!("wrote {} frames for {} moves", frames.count, moves.len());
    println!("Saved {} frames to {}", frames.count, out_dir.display());
    ExitCode::from(EXIT_SUCCESS)
}
