use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hashlab::hashing::{HashTable, Key, Strategy};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const CAPACITY: usize = 1009;

fn random_keys(n: usize, seed: u64) -> Vec<Key> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0..1_000_000)).collect()
}

fn filled(strategy: Strategy, keys: &[Key]) -> Box<dyn HashTable> {
    let mut table = strategy.build(CAPACITY).unwrap();
    for &key in keys {
        let _ = table.insert(key);
    }
    table
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for load in [25, 50, 90] {
        let keys = random_keys(CAPACITY * load / 100, 1);
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), load), &keys, |b, keys| {
                b.iter(|| {
                    let table = filled(strategy, black_box(keys));
                    black_box(table.len());
                })
            });
        }
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for load in [25, 50, 90] {
        let keys = random_keys(CAPACITY * load / 100, 2);
        let misses = random_keys(256, 3);
        for strategy in Strategy::ALL {
            let table = filled(strategy, &keys);
            group.bench_with_input(BenchmarkId::new(strategy.name(), load), &misses, |b, misses| {
                b.iter(|| {
                    let found = misses.iter().filter(|&&k| table.search(black_box(k))).count();
                    black_box(found);
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
