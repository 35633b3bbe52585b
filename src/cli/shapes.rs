//! Shapes command implementation

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

use crate::config::CliOverrides;
use crate::shapes::{Interpolation, Point, ShapeKind, ShapeTable};

use super::{load_settings, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Serialize)]
struct ShapeListing<'a> {
    name: &'static str,
    interpolation: Interpolation,
    points: usize,
    outline: &'a [Point],
}

/// Execute the shapes command
pub fn run_shapes(config_path: Option<&Path>, json: bool) -> ExitCode {
    if let Err(code) = load_settings(config_path, &CliOverrides::default()) {
        return code;
    }
    let table = ShapeTable::global();

    let listings: Vec<ShapeListing> = ShapeKind::ALL
        .iter()
        .map(|kind| {
            let definition = table.definition(*kind);
            ShapeListing {
                name: kind.name(),
                interpolation: definition.interpolation,
                points: definition.outline.len(),
                outline: &definition.outline,
            }
        })
        .collect();

    if json {
        match serde_json::to_string_pretty(&listings) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: Cannot serialize shapes: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("{:<22} {:<8} {:>6}", "SHAPE", "MODE", "POINTS");
        for listing in &listings {
            println!("{:<22} {:<8} {:>6}", listing.name, listing.interpolation.as_str(), listing.points);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
