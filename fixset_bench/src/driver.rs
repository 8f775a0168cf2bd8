//! Membership query benchmark over an exponential size sweep
//! 指数规模扫描上的成员查询基准

use std::hint::black_box;

use fixset::{
  FixedSet, IntrusiveUnorderedSet, SortedVector, StdSet, StdUnorderedSet, UnsortedVector,
};

use crate::{
  data::DataGen,
  engine::{Bench, Runner, State},
};

pub const STEP: usize = 2;
pub const START: usize = 16;

/// Find calls per measured iteration
/// 每次测量迭代中的查找调用次数
pub const QUERIES_PER_ITER: u64 = 100_000;

/// Build one set from the seeded dataset, then time repeated lookups of a fresh probe
/// 由带种子的数据集构建一个集合，再对新探测值计时重复查找
pub fn bm_find<S: FixedSet>(state: &mut State) {
  let mut data_gen = DataGen::new();
  let data = data_gen.dataset(state.range());
  let set = S::new(&data);

  while state.keep_running() {
    let probe = data_gen.probe();
    for _ in 0..QUERIES_PER_ITER {
      black_box(set.find(black_box(probe)));
    }
    state.set_items_processed(state.items_processed() + QUERIES_PER_ITER);
  }
  state.set_complexity_n(state.range());
}

/// Sweep `START..=S::MAX_N` with complexity reporting
/// 扫描 `START..=S::MAX_N` 并报告复杂度
#[must_use]
pub fn find_bench<S: FixedSet>() -> Bench {
  Bench::new(S::NAME, bm_find::<S>)
    .range_multiplier(STEP)
    .range(START, S::MAX_N)
    .complexity()
}

pub fn register(runner: &mut Runner) {
  runner
    .register(find_bench::<SortedVector>())
    .register(find_bench::<UnsortedVector>())
    .register(find_bench::<StdSet>())
    .register(find_bench::<StdUnorderedSet>())
    .register(find_bench::<IntrusiveUnorderedSet>());
}
