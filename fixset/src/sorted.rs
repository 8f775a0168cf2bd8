//! Sorted vector with binary search
//! 有序向量 + 二分查找

use crate::{FixedSet, Value};

#[derive(Clone, Debug, Default)]
pub struct SortedVector {
  data: Box<[Value]>,
}

impl FixedSet for SortedVector {
  const NAME: &'static str = "SortedVector";

  fn new(data: &[Value]) -> Self {
    let mut data: Box<[Value]> = data.into();
    data.sort_unstable();
    Self { data }
  }

  #[inline]
  fn find(&self, value: Value) -> bool {
    self.data.binary_search(&value).is_ok()
  }
}
