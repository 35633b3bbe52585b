//! Criterion benchmarks for glyphboard critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Shapes: table construction and lookup
//! - Path: linear and basis path building, SVG `d` parsing
//! - Placement: placing a full roster on a board
//! - Movement: moving symbols and stepping transitions

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glyphboard::catalog::ShapeCatalog;
use glyphboard::motion::{Easing, TransitionTiming};
use glyphboard::path::PathData;
use glyphboard::placement::{Board, BoardLayout, PieceRecord};
use glyphboard::renderer::SymbolRenderer;
use glyphboard::shapes::{generate, Interpolation, Point, ShapeKind, ShapeTable};
use glyphboard::surface::SvgSurface;
use std::time::Duration;

// =============================================================================
// Test Data Generators
// =============================================================================

/// A roster of `count` pieces spread over the default board
fn make_roster(count: u32) -> Vec<PieceRecord> {
    let roles = [("orc", "Lineman"), ("orc", "Blitzer"), ("human", "Catcher"), ("ogre", "Ogre")];
    (0..count)
        .map(|i| {
            let (faction, role) = roles[i as usize % roles.len()];
            PieceRecord {
                faction: faction.to_string(),
                role: role.to_string(),
                x: (i % 26) as i32,
                y: (i / 26 % 15) as i32,
                number: i,
                side: "home".to_string(),
            }
        })
        .collect()
}

fn make_board(timing: TransitionTiming) -> Board<SvgSurface> {
    let layout = BoardLayout::default();
    let renderer = SymbolRenderer::new(SvgSurface::new(layout.width(), layout.height())).with_timing(timing);
    Board::new(renderer, ShapeCatalog::reference(), layout)
}

// =============================================================================
// Shape Benchmarks
// =============================================================================

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    for samples in [32, 50, 128, 512].iter() {
        group.bench_with_input(BenchmarkId::new("table_new", samples), samples, |b, &samples| {
            b.iter(|| ShapeTable::new(black_box(samples)))
        });
    }

    for kind in ShapeKind::ALL.iter() {
        group.bench_function(BenchmarkId::new("generate", kind.name()), |b| {
            b.iter(|| generate(black_box(kind.name())))
        });
    }

    group.finish();
}

// =============================================================================
// Path Benchmarks
// =============================================================================

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");

    let circle = ShapeTable::global().definition(ShapeKind::Circle).placed(Point::new(50.0, 50.0), 20.0);
    group.throughput(Throughput::Elements(circle.len() as u64));
    group.bench_function("basis_circle", |b| {
        b.iter(|| PathData::from_points(black_box(&circle), Interpolation::Basis))
    });

    let d = PathData::from_points(&circle, Interpolation::Basis).to_string();
    group.bench_function("parse_basis_circle", |b| b.iter(|| black_box(&d).parse::<PathData>()));

    let moved: Vec<Point> = circle.iter().map(|p| Point::new(p.x + 30.0, p.y)).collect();
    let from = PathData::from_points(&circle, Interpolation::Basis);
    let to = PathData::from_points(&moved, Interpolation::Basis);
    group.bench_function("lerp_basis_circle", |b| b.iter(|| from.lerp(black_box(&to), 0.5)));

    group.finish();
}

// =============================================================================
// Placement Benchmarks
// =============================================================================

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    for count in [11u32, 22, 64].iter() {
        let roster = make_roster(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::new("place_roster", count), &roster, |b, roster| {
            b.iter(|| {
                let mut board = make_board(TransitionTiming::default());
                for record in roster.iter().cloned() {
                    let _ = board.place_piece(record);
                }
                board
            })
        });
    }

    let mut board = make_board(TransitionTiming::default());
    for record in make_roster(22) {
        let _ = board.place_piece(record);
    }
    group.bench_function("to_svg_22", |b| b.iter(|| board.surface().to_svg()));

    group.finish();
}

// =============================================================================
// Movement Benchmarks
// =============================================================================

fn bench_movement(c: &mut Criterion) {
    let mut group = c.benchmark_group("movement");

    group.bench_function("move_instant", |b| {
        let mut board = make_board(TransitionTiming::instant());
        for record in make_roster(22) {
            let _ = board.place_piece(record);
        }
        let mut step = 0;
        b.iter(|| {
            step = (step + 1) % 10;
            let _ = board.move_piece(black_box("player-home-0"), step, 0);
        })
    });

    group.bench_function("move_and_settle", |b| {
        let mut board = make_board(TransitionTiming::new(Duration::from_millis(250), Easing::EaseInOut));
        for record in make_roster(22) {
            let _ = board.place_piece(record);
        }
        let mut step = 0;
        b.iter(|| {
            step = (step + 1) % 10;
            let _ = board.move_piece(black_box("player-home-0"), step, 0);
            board.surface_mut().settle(Duration::from_millis(16));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_path, bench_placement, bench_movement);

criterion_main!(benches);
