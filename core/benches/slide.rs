use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use slide2048_core::*;

fn busy_grid() -> Grid {
    Grid::from_rows(&[
        [2u32, 2, 4, 8],
        [0, 4, 4, 16],
        [2, 0, 2, 0],
        [32, 32, 64, 64],
    ])
    .expect("fixture should be valid")
}

fn bench_slide(c: &mut Criterion) {
    let grid = busy_grid();
    let mut group = c.benchmark_group("slide");
    for direction in Direction::ALL {
        group.bench_function(format!("{direction:?}"), |b| {
            b.iter(|| slide(black_box(&grid), black_box(direction)))
        });
    }
    group.finish();

    c.bench_function("has_moves", |b| b.iter(|| has_moves(black_box(&grid))));
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("playout_seeded", |b| {
        b.iter(|| {
            let mut engine = PlayEngine::new(GameConfig::default(), black_box(7));
            let mut turn = 0usize;
            while !engine.is_game_over() && turn < 2_000 {
                engine.slide(Direction::ALL[turn % 4]);
                turn += 1;
            }
            engine.score()
        })
    });
}

criterion_group!(benches, bench_slide, bench_playout);
criterion_main!(benches);
