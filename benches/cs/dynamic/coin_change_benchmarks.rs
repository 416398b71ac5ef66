use coinchange::{count_change_ways, CoinChangeSolver};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_coins(count: usize, max: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(1..=max)).collect()
}

fn bench_min_coins(c: &mut Criterion) {
    let solver = CoinChangeSolver::default();
    let mut group = c.benchmark_group("min_coins");

    for &amount in &[1_000u32, 10_000, 100_000] {
        let coins = random_coins(16, 500, 42);
        group.bench_with_input(BenchmarkId::from_parameter(amount), &amount, |b, &amount| {
            b.iter(|| solver.solve(black_box(&coins), black_box(amount)))
        });
    }
    group.finish();
}

fn bench_make_change(c: &mut Criterion) {
    let solver = CoinChangeSolver::default();
    let coins = random_coins(16, 500, 7);
    c.bench_function("make_change 50000", |b| {
        b.iter(|| solver.make_change(black_box(&coins), black_box(50_000u32)))
    });
}

fn bench_count_ways(c: &mut Criterion) {
    let coins = [1u32, 2, 5, 10, 20, 50, 100, 200];
    c.bench_function("count_change_ways 10000", |b| {
        b.iter(|| count_change_ways(black_box(&coins), black_box(10_000u32)))
    });
}

criterion_group!(benches, bench_min_coins, bench_make_change, bench_count_ways);
criterion_main!(benches);
