//! Reference hash set
//! 参考哈希集合

use std::collections::HashSet;

use crate::{FixedSet, Value};

#[derive(Clone, Debug, Default)]
pub struct StdUnorderedSet {
  set: HashSet<Value>,
}

impl FixedSet for StdUnorderedSet {
  const NAME: &'static str = "StdUnorderedSet";

  fn new(data: &[Value]) -> Self {
    let set = data.iter().copied().collect();
    Self { set }
  }

  #[inline]
  fn find(&self, value: Value) -> bool {
    self.set.contains(&value)
  }
}
