extern crate perspective_grids;
extern crate pgrid_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use perspective_grids::grids::GridOptions;
use perspective_grids::math::size;
use perspective_grids::svg::path_set_data;
use pgrid_tests::*;

static LINE_WIDTHS: [f64; 3] = [0.0, 1.0, 4.0];

fn generation(c: &mut Criterion) {
    let canvas = size(1024.0, 768.0);
    let options = GridOptions::default();

    let mut g = c.benchmark_group("generate");
    for width in &LINE_WIDTHS {
        for grid in stroked_grids(15.0, *width) {
            g.bench_with_input(BenchmarkId::new(grid.title(), width), width, |b, _| {
                b.iter(|| grid.generate(canvas, &options))
            });
        }
    }
}

fn serialization(c: &mut Criterion) {
    let canvas = size(1024.0, 768.0);
    let mut g = c.benchmark_group("path data");
    for grid in default_grids() {
        let paths = match grid.generate(canvas, &GridOptions::default()) {
            Ok(paths) => paths,
            Err(_) => continue,
        };
        g.bench_function(grid.title(), |b| b.iter(|| path_set_data(&paths)));
    }
}

criterion_group!(benches, generation, serialization);
criterion_main!(benches);
