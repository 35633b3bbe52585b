//! Render command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::placement::PieceRecord;

use super::{build_board, load_settings, read_json, write_file, EXIT_SUCCESS};

/// Execute the render command
pub fn run_render(config_path: Option<&Path>, pieces: &Path, output: &Path) -> ExitCode {
    let config = match load_settings(config_path, &CliOverrides::default()) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let records: Vec<PieceRecord> = match read_json(pieces, "pieces") {
        Ok(r) => r,
        Err(code) => return code,
    };
    let board = match build_board(&config, records) {
        Ok(b) => b,
        Err(code) => return code,
    };

    if let Err(code) = write_file(output, &board.surface().to_svg()) {
        return code;
    }
    log::info!("wrote {}", output.display());
    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
