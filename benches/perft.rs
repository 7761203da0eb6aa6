use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lib::chess::Game;

fn perft(game: &mut Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        d => {
            let mut nodes = 0;
            for m in Vec::from_iter(game.moves()) {
                game.make(m.whence(), m.whither()).unwrap();
                nodes += perft(game, d - 1);
                game.undo();
            }

            nodes
        }
    }
}

fn bench(c: &mut Criterion) {
    c.benchmark_group("benches")
        .bench_function("legal_moves", |b| {
            let game = Game::new();
            b.iter(|| game.moves().count());
        })
        .bench_function("perft/3", |b| {
            b.iter_batched_ref(Game::new, |g| perft(g, 3), BatchSize::SmallInput);
        });
}

criterion_group!(benches, bench);
criterion_main!(benches);
