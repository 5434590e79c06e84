use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use osbst::OrderedTree;
use std::collections::BTreeMap;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn balanced_tree(keys: &[i64]) -> OrderedTree<i64, i64> {
    let mut tree: OrderedTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    tree.balance();
    tree
}

// ─── Point operations ───────────────────────────────────────────────────────

fn bench_put_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("put_random");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| {
            let mut tree = OrderedTree::new();
            for &k in &keys {
                tree.put(k, k);
            }
            tree
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree: OrderedTree<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let balanced = balanced_tree(&keys);
    let map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("get_random");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(tree.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("OrderedTree/balanced", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(balanced.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(map.get(k));
            }
        });
    });

    group.finish();
}

fn bench_delete_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OrderedTree<i64, i64>>(),
            |mut tree| {
                for k in &keys {
                    black_box(tree.delete(k));
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    black_box(map.remove(k));
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_select(c: &mut Criterion) {
    let tree = balanced_tree(&random_keys(N));
    let map: BTreeMap<i64, i64> = tree.iter().map(|(&k, &v)| (k, v)).collect();

    let mut group = c.benchmark_group("select");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| {
            for i in (0..tree.len()).step_by(97) {
                black_box(tree.select(i).ok());
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap/nth", N), |b| {
        b.iter(|| {
            for i in (0..map.len()).step_by(97) {
                black_box(map.keys().nth(i));
            }
        });
    });

    group.finish();
}

fn bench_rank_and_range_count(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = balanced_tree(&keys);

    let mut group = c.benchmark_group("rank");

    group.bench_function(BenchmarkId::new("rank", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(tree.rank(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("range_count", N), |b| {
        b.iter(|| {
            for pair in keys.chunks_exact(2) {
                black_box(tree.range_count(&pair[0].min(pair[1]), &pair[0].max(pair[1])));
            }
        });
    });

    group.finish();
}

// ─── Rebuild ────────────────────────────────────────────────────────────────

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");

    for (name, keys) in [("ordered", ordered_keys(N / 4)), ("random", random_keys(N))] {
        group.bench_function(BenchmarkId::new(name, keys.len()), |b| {
            b.iter_batched(
                || keys.iter().map(|&k| (k, k)).collect::<OrderedTree<i64, i64>>(),
                |mut tree| {
                    tree.balance();
                    tree
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_put_random,
    bench_get_random,
    bench_delete_random,
    bench_select,
    bench_rank_and_range_count,
    bench_balance,
);
criterion_main!(benches);
