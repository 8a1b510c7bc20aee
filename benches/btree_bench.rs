//! B-tree benchmarks: insert, search, and delete-drain across degrees.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nbtree::{BTree, NaturalOrder, TreeConfig};

const KEYS: u64 = 10_000;

/// Keys in a scrambled but deterministic order.
fn scrambled() -> Vec<u64> {
    (0..KEYS).map(|k| (k * 7_919) % KEYS).collect()
}

fn build(degree: usize, keys: &[u64]) -> BTree<u64> {
    let config = TreeConfig::new(degree).verify_invariants(false);
    let mut tree = BTree::with_config(config, NaturalOrder).unwrap();
    for &k in keys {
        tree.insert(k).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let keys = scrambled();
    let mut group = c.benchmark_group("insert");
    for degree in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(degree), &degree, |b, &t| {
            b.iter(|| build(t, black_box(&keys)))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let keys = scrambled();
    let mut group = c.benchmark_group("search");
    for degree in [2, 8, 32] {
        let tree = build(degree, &keys);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &tree, |b, tree| {
            b.iter(|| {
                for k in (0..KEYS).step_by(7) {
                    black_box(tree.contains(&k));
                }
            })
        });
    }
    group.finish();
}

fn bench_delete_drain(c: &mut Criterion) {
    let keys = scrambled();
    let mut group = c.benchmark_group("delete_drain");
    for degree in [2, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(degree), &degree, |b, &t| {
            b.iter_batched(
                || build(t, &keys),
                |mut tree| {
                    for k in 0..KEYS {
                        tree.delete(&k).unwrap();
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete_drain);
criterion_main!(benches);
