//! Ordered tree set
//! 有序树集合

use std::collections::BTreeSet;

use crate::{FixedSet, Value};

#[derive(Clone, Debug, Default)]
pub struct StdSet {
  set: BTreeSet<Value>,
}

impl FixedSet for StdSet {
  const NAME: &'static str = "StdSet";

  fn new(data: &[Value]) -> Self {
    let set = data.iter().copied().collect();
    Self { set }
  }

  #[inline]
  fn find(&self, value: Value) -> bool {
    self.set.contains(&value)
  }
}
