//! Criterion benchmarks for Promptpix critical paths
//!
//! Benchmarks the operations a renderer runs per color fragment:
//! - Color: hex literal parsing
//! - Palette: SGR code resolution with and without overrides
//! - Output: file name derivation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use promptpix::color::{parse_hex, HexColor, Rgb};
use promptpix::output::resolve_output_path;
use promptpix::palette::ColorOverrides;
use promptpix::sgr::apply_fragment;
use promptpix::state::RenderColorState;

// =============================================================================
// Color Parsing Benchmarks
// =============================================================================

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    group.bench_function("parse_hex_hash", |b| b.iter(|| parse_hex(black_box("#FF0000"))));

    group.bench_function("parse_hex_bare", |b| b.iter(|| parse_hex(black_box("4ecdc4"))));

    group.bench_function("parse_hex_invalid", |b| b.iter(|| parse_hex(black_box("#GGGGGG"))));

    let colors = [
        "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF", "#FFFFFF", "#000000",
        "#F0F0F0", "#0F0F0F", "#123456", "#ABCDEF", "#FEDCBA", "#654321", "#AABBCC", "#CCBBAA",
    ];
    group.bench_function("parse_palette_16_hex", |b| {
        b.iter(|| {
            for color in &colors {
                let _ = parse_hex(black_box(*color));
            }
        })
    });

    group.finish();
}

// =============================================================================
// Palette Resolution Benchmarks
// =============================================================================

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");

    let none = ColorOverrides::new();
    let overrides = ColorOverrides::from([
        ("red".to_string(), HexColor::from("#FF6B6B")),
        ("blue".to_string(), HexColor::from("#4ECDC4")),
    ]);
    let initial = RenderColorState::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));

    group.bench_function("base16_code", |b| {
        let mut state = initial.clone();
        b.iter(|| state.set_base16_color(black_box("32"), &none))
    });

    group.bench_function("override_code", |b| {
        let mut state = initial.clone();
        b.iter(|| state.set_base16_color(black_box("31"), &overrides))
    });

    group.bench_function("malformed_code", |b| {
        let mut state = initial.clone();
        b.iter(|| state.set_base16_color(black_box("invalid"), &overrides))
    });

    group.bench_function("fragment_3_codes", |b| {
        let mut state = initial.clone();
        b.iter(|| apply_fragment(&mut state, black_box("\x1b[1;31;44m"), &overrides))
    });

    group.finish();
}

// =============================================================================
// Output Path Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    group.bench_function("derive_theme_name", |b| {
        b.iter(|| resolve_output_path(black_box(""), black_box("~/jandedobbeleer.omp.json")))
    });

    group.bench_function("explicit_path", |b| {
        b.iter(|| resolve_output_path(black_box("mytheme.png"), black_box("~/x.omp.json")))
    });

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_color, bench_palette, bench_output);

criterion_main!(benches);
