//! Constants for set representations
//! 集合表示常量

/// Default sweep ceiling
/// 默认扫描上限
pub const MAX_N: usize = 1 << 21;

/// Sweep ceiling for linear scan lookups
/// 线性扫描查找的扫描上限
pub const LINEAR_MAX_N: usize = 65_536;

/// Lower bound of the intrusive bucket count
/// 侵入式桶数量下限
pub const MIN_BUCKETS: usize = 100;

/// Elements per bucket before the bucket count grows
/// 桶数量增长前每个桶的元素数
pub const BUCKET_LOAD: usize = 4;
