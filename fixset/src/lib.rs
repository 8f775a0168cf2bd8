//! Immutable set representations answering membership queries
//! 回答成员查询的不可变集合表示

pub mod consts;
pub mod hash;
pub mod intrusive;
pub mod sorted;
pub mod tree;
pub mod types;
pub mod unsorted;

pub use self::{
  hash::StdUnorderedSet,
  intrusive::IntrusiveUnorderedSet,
  sorted::SortedVector,
  tree::StdSet,
  types::{FixedSet, Value},
  unsorted::UnsortedVector,
};
