//! Criterion benchmark: cache store set/get/del, single-threaded and contended.
//! Run with: cargo bench --bench store_bench

use std::hint::black_box;
use std::sync::Arc;
use std::thread;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use memorycache::CacheStore;

const NUM_KEYS: usize = 10_000;
const WORKERS: usize = 8;

fn populated(num_keys: usize) -> CacheStore<usize> {
    let store = CacheStore::new();
    for i in 0..num_keys {
        store.set(i.to_string(), i).unwrap();
    }
    store
}

fn bench_single_threaded(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_threaded");

    group.bench_function("set", |b| {
        let store: CacheStore<usize> = CacheStore::new();
        let mut i = 0usize;
        b.iter(|| {
            store.set(i.to_string(), i).unwrap();
            i += 1;
        });
    });

    group.bench_function("get", |b| {
        let store = populated(NUM_KEYS);
        let mut i = 0usize;
        b.iter(|| {
            black_box(store.get(&(i % NUM_KEYS).to_string()));
            i += 1;
        });
    });

    group.bench_function("del", |b| {
        b.iter_batched(
            || populated(1_000),
            |store| {
                for i in 0..1_000usize {
                    black_box(store.del(&i.to_string()));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("mixed", |b| {
        let store: CacheStore<usize> = CacheStore::new();
        let mut i = 0usize;
        b.iter(|| {
            let key = i.to_string();
            match i % 3 {
                0 => store.set(key, i).unwrap(),
                1 => {
                    black_box(store.get(&key));
                }
                _ => {
                    black_box(store.del(&key));
                }
            }
            i += 1;
        });
    });

    group.bench_function("large_values", |b| {
        let store: CacheStore<Arc<Vec<u8>>> = CacheStore::new();
        let large = Arc::new(vec![0u8; 10 * 1024]);
        let mut i = 0usize;
        b.iter(|| {
            store.set(i.to_string(), Arc::clone(&large)).unwrap();
            i += 1;
        });
    });

    group.finish();
}

/// Runs `ops` operations split across `WORKERS` threads against one store.
fn run_workers<F>(store: &Arc<CacheStore<usize>>, ops: usize, op: F)
where
    F: Fn(&CacheStore<usize>, usize, usize) + Sync,
{
    let per_worker = ops / WORKERS;
    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let store = Arc::clone(store);
            let op = &op;
            scope.spawn(move || {
                for i in 0..per_worker {
                    op(&*store, worker, i);
                }
            });
        }
    });
}

fn bench_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");
    let ops = 80_000;

    group.bench_function("set", |b| {
        b.iter(|| {
            let store = Arc::new(CacheStore::new());
            run_workers(&store, ops, |store, worker, i| {
                store.set(format!("{}_{}", worker, i), i).unwrap();
            });
        });
    });

    group.bench_function("get", |b| {
        let store = Arc::new(populated(NUM_KEYS));
        b.iter(|| {
            run_workers(&store, ops, |store, worker, i| {
                black_box(store.get(&((i * 31 + worker) % NUM_KEYS).to_string()));
            });
        });
    });

    group.bench_function("mixed", |b| {
        b.iter(|| {
            let store = Arc::new(CacheStore::new());
            run_workers(&store, ops, |store, worker, i| {
                let key = format!("{}_{}", worker, i);
                match i % 3 {
                    0 => store.set(key, i).unwrap(),
                    1 => {
                        black_box(store.get(&key));
                    }
                    _ => {
                        black_box(store.del(&key));
                    }
                }
            });
        });
    });

    group.bench_function("high_contention", |b| {
        let store = Arc::new(populated(10));
        b.iter(|| {
            run_workers(&store, ops, |store, worker, i| {
                let key = ((i + worker) % 10).to_string();
                match (i * 7 + worker) % 3 {
                    0 => store.set(key, i).unwrap(),
                    1 => {
                        black_box(store.get(&key));
                    }
                    _ => {
                        black_box(store.del(&key));
                    }
                }
            });
        });
    });

    group.finish();
}

fn bench_sequential_vs_concurrent(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_vs_concurrent");
    let ops = 40_000;

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let store: CacheStore<usize> = CacheStore::new();
            for i in 0..ops {
                let key = format!("key_{}", i);
                store.set(key.clone(), i).unwrap();
                black_box(store.get(&key));
                black_box(store.del(&key));
            }
        });
    });

    group.bench_function("concurrent", |b| {
        b.iter(|| {
            let store = Arc::new(CacheStore::new());
            run_workers(&store, ops, |store, worker, i| {
                let key = format!("key_{}_{}", worker, i);
                store.set(key.clone(), i).unwrap();
                black_box(store.get(&key));
                black_box(store.del(&key));
            });
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_threaded,
    bench_concurrent,
    bench_sequential_vs_concurrent
);
criterion_main!(benches);
