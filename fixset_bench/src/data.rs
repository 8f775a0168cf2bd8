//! Deterministic dataset and probe generation
//! 确定性的数据集与探测值生成

use fixset::Value;
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const SEED: u64 = 42;

/// Uniform value stream, reseeded per size point
/// 均匀分布的值流，每个规模点重新播种
pub struct DataGen {
  rng: StdRng,
}

impl Default for DataGen {
  fn default() -> Self {
    Self::new()
  }
}

impl DataGen {
  #[must_use]
  pub fn new() -> Self {
    Self {
      rng: StdRng::seed_from_u64(SEED),
    }
  }

  /// Draw `n` values in `0..=Value::MAX`
  /// 在 `0..=Value::MAX` 内生成 `n` 个值
  pub fn dataset(&mut self, n: usize) -> Vec<Value> {
    (0..n).map(|_| self.value()).collect()
  }

  #[inline]
  fn value(&mut self) -> Value {
    self.rng.random_range(0..=Value::MAX)
  }

  /// Draw the next probe value from the same stream
  /// 从同一数据流中取下一个探测值
  #[inline]
  pub fn probe(&mut self) -> Value {
    self.value()
  }
}

/// Dataset of size `n` from a fresh generator
/// 用新生成器生成规模为 `n` 的数据集
#[must_use]
pub fn gen_data(n: usize) -> Vec<Value> {
  DataGen::new().dataset(n)
}
