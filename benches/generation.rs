use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazing::{algorithms::generate, dims::Dims, solver::solve};

const DIMS: Dims = Dims(300, 300);

pub fn backtracker_rough(c: &mut Criterion) {
    c.bench_function("backtracker_rough", |b| {
        b.iter(|| generate(black_box(DIMS), black_box(1), 0).unwrap())
    });
}

pub fn backtracker_smooth(c: &mut Criterion) {
    c.bench_function("backtracker_smooth", |b| {
        b.iter(|| generate(black_box(DIMS), black_box(1), 24).unwrap())
    });
}

pub fn solve_corners(c: &mut Criterion) {
    let board = generate(DIMS, 1, 0).unwrap();
    let dest = Dims(DIMS.0 - 1, DIMS.1 - 1);
    c.bench_function("solve_corners", |b| {
        b.iter(|| solve(black_box(&board), Dims(0, 0), dest).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = backtracker_rough, backtracker_smooth, solve_corners}
criterion_main!(benches);
