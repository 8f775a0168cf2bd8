use std::hint::black_box;

use criterion::{BenchmarkId, measurement::WallTime};
use fixset::{FixedSet, Value};
use fixset_bench::data::DataGen;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const SEED: u64 = 4242;

/// Half hits drawn from the data, half fresh values (mostly misses)
/// 一半取自数据（命中），一半为新值（多数未命中）
pub fn gen_probes(data: &[Value], count: usize) -> Vec<Value> {
  let mut rng = StdRng::seed_from_u64(SEED);
  let mut fresh = DataGen::new();
  (0..count)
    .map(|i| {
      if i % 2 == 0 && !data.is_empty() {
        data[rng.random_range(0..data.len())]
      } else {
        fresh.probe()
      }
    })
    .collect()
}

/// Benchmark lookups for a given representation
/// 对给定表示的查找进行基准测试
pub fn bench_find_impl<S: FixedSet>(
  group: &mut criterion::BenchmarkGroup<WallTime>,
  data: &[Value],
  probes: &[Value],
  size: usize,
) {
  let set = S::new(data);
  group.bench_with_input(BenchmarkId::new(S::NAME, size), &probes, |b, probes| {
    b.iter(|| {
      for &p in probes.iter() {
        black_box(set.find(p));
      }
    })
  });
}

/// Benchmark construction for a given representation
/// 对给定表示的构建进行基准测试
pub fn bench_build_impl<S: FixedSet>(
  group: &mut criterion::BenchmarkGroup<WallTime>,
  data: &[Value],
  size: usize,
) {
  group.bench_with_input(BenchmarkId::new(S::NAME, size), &data, |b, data| {
    b.iter(|| black_box(S::new(data)))
  });
}
