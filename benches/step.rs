use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{count_neighbors, seeded, step, Grid};
use tui_life::engine::Session;
use tui_life::types::Pattern;

fn bench_step_default(c: &mut Criterion) {
    let grid = seeded(10, Pattern::Glider);

    c.bench_function("step_10x10_glider", |b| {
        b.iter(|| step(black_box(&grid)));
    });
}

fn bench_step_large(c: &mut Criterion) {
    // Dense pseudo-random soup so every branch of the rule is exercised.
    let mut grid = Grid::new(256);
    let mut state: u32 = 12345;
    for row in 0..256 {
        for col in 0..256 {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            grid.set(row, col, state >> 31 == 1);
        }
    }

    c.bench_function("step_256x256_soup", |b| {
        b.iter(|| step(black_box(&grid)));
    });
}

fn bench_session_advance(c: &mut Criterion) {
    let mut session = Session::new(10);
    session.start(Pattern::Tetris);

    c.bench_function("session_advance_double_buffer", |b| {
        b.iter(|| session.advance());
    });
}

fn bench_count_neighbors(c: &mut Criterion) {
    let grid = seeded(10, Pattern::Tetris);

    c.bench_function("count_neighbors_interior", |b| {
        b.iter(|| count_neighbors(black_box(&grid), black_box(5), black_box(4)));
    });
}

criterion_group!(
    benches,
    bench_step_default,
    bench_step_large,
    bench_session_advance,
    bench_count_neighbors
);
criterion_main!(benches);
