//! Chained hash set with nodes stored in one contiguous arena
//! 节点连续存储于单一数组的链式哈希集合
//!
//! Nodes are allocated once and never moved; buckets hold arena indices.
//! 节点一次分配且不再移动；桶中保存数组下标。

use crate::{
  FixedSet, Value,
  consts::{BUCKET_LOAD, MIN_BUCKETS},
};

/// End of chain
/// 链尾
const NIL: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Node {
  value: Value,
  next: usize,
}

#[derive(Clone, Debug)]
pub struct IntrusiveUnorderedSet {
  nodes: Box<[Node]>,
  buckets: Box<[usize]>,
}

/// Bucket count for `n` elements
/// `n` 个元素对应的桶数量
#[inline]
#[must_use]
pub fn bucket_count(n: usize) -> usize {
  MIN_BUCKETS.max(n / BUCKET_LOAD)
}

impl IntrusiveUnorderedSet {
  #[inline]
  fn bucket(&self, value: Value) -> usize {
    value as u32 as usize % self.buckets.len()
  }

  /// Number of distinct values linked into buckets
  /// 链入桶中的不同值数量
  #[must_use]
  pub fn len(&self) -> usize {
    self
      .buckets
      .iter()
      .map(|&head| self.chain(head).count())
      .sum()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.buckets.iter().all(|&head| head == NIL)
  }

  #[must_use]
  pub fn bucket_len(&self) -> usize {
    self.buckets.len()
  }

  fn chain(&self, head: usize) -> impl Iterator<Item = &Node> + '_ {
    let mut cur = head;
    std::iter::from_fn(move || {
      let node = self.nodes.get(cur)?;
      cur = node.next;
      Some(node)
    })
  }
}

impl FixedSet for IntrusiveUnorderedSet {
  const NAME: &'static str = "IntrusiveUnorderedSet";

  fn new(data: &[Value]) -> Self {
    let nodes: Box<[Node]> = data
      .iter()
      .map(|&value| Node { value, next: NIL })
      .collect();
    let buckets = vec![NIL; bucket_count(nodes.len())].into_boxed_slice();
    let mut set = Self { nodes, buckets };

    for i in 0..set.nodes.len() {
      let value = set.nodes[i].value;
      let b = set.bucket(value);
      // Duplicates stay in the arena but are not linked
      // 重复值留在数组中但不链接
      if set.chain(set.buckets[b]).any(|n| n.value == value) {
        continue;
      }
      set.nodes[i].next = set.buckets[b];
      set.buckets[b] = i;
    }
    set
  }

  #[inline]
  fn find(&self, value: Value) -> bool {
    self
      .chain(self.buckets[self.bucket(value)])
      .any(|n| n.value == value)
  }
}
