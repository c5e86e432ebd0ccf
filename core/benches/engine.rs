use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use minefield_core::*;
use std::hint::black_box;

const TIERS: [(&str, Coord, Coord, CellCount); 3] = [
    ("beginner", 9, 9, 10),
    ("expert", 16, 30, 99),
    ("huge", 255, 255, 10_000),
];

fn generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, rows, columns, mines) in TIERS {
        let config = GameConfig::new(rows, columns, mines).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(Game::with_seed(config, seed).unwrap())
            })
        });
    }
    group.finish();
}

fn cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade_reveal");
    for (name, rows, columns, _) in TIERS {
        let layout = MineLayout::from_mine_coords((rows, columns), &[(rows - 1, columns - 1)]).unwrap();
        let game = Game::from_layout(&layout);
        group.bench_with_input(BenchmarkId::from_parameter(name), &game, |b, game| {
            b.iter_batched(
                || game.clone(),
                |mut game| black_box(game.reveal((0, 0)).unwrap()),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, generation, cascade);
criterion_main!(benches);
