//! Criterion benchmark: lock-free index vs single mutex
//! Criterion 基准：无锁索引 vs 单互斥锁

use std::{hint::black_box, sync::Arc, thread};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use node_lru::{Cache, LockLru, Lru};

const KEYS: u64 = 4096;
const CAP: usize = 1024;
const OPS: usize = 10_000;

fn keys(seed: u64) -> Vec<Vec<u8>> {
  let mut rng = fastrand::Rng::with_seed(seed);
  (0..OPS)
    .map(|_| rng.u64(..KEYS).to_be_bytes().to_vec())
    .collect()
}

/// 80% get, 20% add on miss
/// 80% 读取，未命中时写入
fn mixed(cache: &dyn Cache<Vec<u8>>, keys: &[Vec<u8>]) {
  for (i, k) in keys.iter().enumerate() {
    if i % 5 == 0 || cache.get(k).is_none() {
      black_box(cache.add(Arc::new(k.clone())));
    }
  }
}

fn bench_single_thread(c: &mut Criterion) {
  let mut group = c.benchmark_group("single_thread");
  let keys = keys(42);
  group.throughput(Throughput::Elements(keys.len() as u64));

  let lru = Lru::<Vec<u8>>::new(CAP);
  group.bench_function("lru", |b| b.iter(|| mixed(&lru, &keys)));

  let lock = LockLru::<Vec<u8>>::new(CAP);
  group.bench_function("lock_lru", |b| b.iter(|| mixed(&lock, &keys)));

  group.finish();
}

fn bench_threads(c: &mut Criterion) {
  let mut group = c.benchmark_group("threads");

  for n in [2usize, 4, 8] {
    let per: Vec<_> = (0..n as u64).map(keys).collect();
    group.throughput(Throughput::Elements((OPS * n) as u64));

    let lru = Lru::<Vec<u8>>::new(CAP);
    let lock = LockLru::<Vec<u8>>::new(CAP);
    let caches: [(&str, &dyn Cache<Vec<u8>>); 2] = [("lru", &lru), ("lock_lru", &lock)];

    for (name, cache) in caches {
      group.bench_with_input(BenchmarkId::new(name, n), &per, |b, per| {
        b.iter(|| {
          thread::scope(|s| {
            for keys in per {
              s.spawn(move || mixed(cache, keys));
            }
          })
        })
      });
    }
  }

  group.finish();
}

criterion_group!(benches, bench_single_thread, bench_threads);
criterion_main!(benches);
