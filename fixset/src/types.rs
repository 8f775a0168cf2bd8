//! Type definitions for set representations
//! 集合表示类型定义

use crate::consts::MAX_N;

/// Stored and queried value
/// 存储和查询的值
pub type Value = i32;

/// Set built once from a batch of values, read-only afterwards
/// 由一批值一次构建、此后只读的集合
pub trait FixedSet: Sized {
  /// Family name used in run names
  /// 运行名称中使用的族名
  const NAME: &'static str;

  /// Largest size swept for this representation
  /// 该表示的最大扫描规模
  const MAX_N: usize = MAX_N;

  fn new(data: &[Value]) -> Self;

  /// Membership query, never mutates the set
  /// 成员查询，不修改集合
  fn find(&self, value: Value) -> bool;
}
