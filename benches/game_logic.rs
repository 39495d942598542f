use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{GameGrid, GameState};
use blockfall::types::ShapeKind;

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut grid = GameGrid::new(22, 10);
            // Fill bottom 4 rows
            for row in 18..22 {
                for column in 0..10 {
                    grid.set(row, column, ShapeKind::I.id());
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(state.move_block_left());
            black_box(state.move_block_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            black_box(state.rotate_block_cw());
        })
    });
}

fn bench_drop_distance(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("block_drop_distance", |b| {
        b.iter(|| black_box(state.block_drop_distance()))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.game_over() {
                state.restart();
            }
            black_box(state.drop_block());
        })
    });
}

criterion_group!(
    benches,
    bench_line_clear,
    bench_move,
    bench_rotate,
    bench_drop_distance,
    bench_hard_drop
);
criterion_main!(benches);
