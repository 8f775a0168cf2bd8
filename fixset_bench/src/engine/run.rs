//! Completed measurement
//! 已完成的测量

use serde::Serialize;

use super::complexity::BigO;

/// Counter attached when a benchmark reports processed items
/// 基准报告已处理条目时附加的计数器
pub const ITEMS_PER_SECOND: &str = "items_per_second";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RunKind {
  /// One size point of a sweep
  /// 扫描中的一个规模点
  Iteration,
  /// Fitted complexity of a family
  /// 族的拟合复杂度
  BigO,
  /// Normalized fit error of a family
  /// 族的归一化拟合误差
  Rms,
}

#[derive(Clone, Debug, Serialize)]
pub struct Run {
  /// `{family}/{size}` for sweep points
  /// 扫描点的名称为 `{family}/{size}`
  pub name: String,
  pub kind: RunKind,
  pub iterations: u64,
  pub real_time_ns: f64,
  pub complexity_n: usize,
  /// Named counters in insertion order
  /// 按插入顺序排列的命名计数器
  pub counters: Vec<(String, f64)>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub big_o: Option<BigO>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rms: Option<f64>,
}

impl Run {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      kind: RunKind::Iteration,
      iterations: 0,
      real_time_ns: 0.0,
      complexity_n: 0,
      counters: Vec::new(),
      big_o: None,
      rms: None,
    }
  }

  #[must_use]
  pub fn with_counter(mut self, name: impl Into<String>, value: f64) -> Self {
    self.counters.push((name.into(), value));
    self
  }

  #[must_use]
  pub fn counter(&self, name: &str) -> Option<f64> {
    self
      .counters
      .iter()
      .find(|(k, _)| k == name)
      .map(|&(_, v)| v)
  }
}
