//! Vector searched by linear scan
//! 线性扫描的向量
//!
//! Built sorted like [`crate::SortedVector`], but lookup ignores the order.
//! 构建时同样排序，但查找忽略顺序。

use crate::{FixedSet, Value, consts::LINEAR_MAX_N};

#[derive(Clone, Debug, Default)]
pub struct UnsortedVector {
  data: Box<[Value]>,
}

impl FixedSet for UnsortedVector {
  const NAME: &'static str = "UnsortedVector";
  const MAX_N: usize = LINEAR_MAX_N;

  fn new(data: &[Value]) -> Self {
    let mut data: Box<[Value]> = data.into();
    data.sort_unstable();
    Self { data }
  }

  #[inline]
  fn find(&self, value: Value) -> bool {
    self.data.iter().any(|&v| v == value)
  }
}
