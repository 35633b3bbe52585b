//! glyphb - Command-line tool for drawing and animating board pieces as SVG

use std::process::ExitCode;

use glyphboard::cli;

fn main() -> ExitCode {
    env_logger::init();
    cli::run()
}
