use criterion::{black_box, criterion_group, criterion_main, Criterion};
use match3::core::{find_matches, Board};
use match3::engine::{best_swap, find_swaps};

fn bench_initialize(c: &mut Criterion) {
    let mut board = Board::with_seed(8, 8, 6, 12345);

    c.bench_function("initialize_8x8", |b| {
        b.iter(|| {
            board.initialize();
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let board = Board::with_seed(8, 8, 6, 12345);

    c.bench_function("find_matches_8x8", |b| {
        b.iter(|| find_matches(black_box(&board)))
    });
}

fn bench_resolving_swap(c: &mut Criterion) {
    c.bench_function("best_swap_and_resolve", |b| {
        b.iter(|| {
            let mut board = Board::with_seed(8, 8, 6, 12345);
            if let Some(swap) = best_swap(&board) {
                board.try_swap_and_resolve(swap.a, swap.b);
            }
            board
        })
    });
}

fn bench_find_swaps(c: &mut Criterion) {
    let board = Board::with_seed(8, 8, 6, 12345);

    c.bench_function("find_swaps_8x8", |b| b.iter(|| find_swaps(black_box(&board))));
}

criterion_group!(
    benches,
    bench_initialize,
    bench_find_matches,
    bench_resolving_swap,
    bench_find_swaps
);
criterion_main!(benches);
