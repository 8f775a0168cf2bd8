//! Measurement context handed to a benchmark body
//! 传给基准函数体的测量上下文

#![allow(clippy::cast_precision_loss)]

use std::time::{Duration, Instant};

use super::run::{ITEMS_PER_SECOND, Run};

pub struct State {
  arg: usize,
  max_iterations: u64,
  iterations: u64,
  start: Option<Instant>,
  elapsed: Duration,
  items_processed: u64,
  complexity_n: usize,
  counters: Vec<(String, f64)>,
}

impl State {
  pub(crate) fn new(arg: usize, max_iterations: u64) -> Self {
    Self {
      arg,
      max_iterations,
      iterations: 0,
      start: None,
      elapsed: Duration::ZERO,
      items_processed: 0,
      complexity_n: 0,
      counters: Vec::new(),
    }
  }

  /// Swept size of this run
  /// 本次运行的扫描规模
  #[inline]
  #[must_use]
  pub fn range(&self) -> usize {
    self.arg
  }

  /// Iteration protocol: `while state.keep_running() { ... }`
  /// 迭代协议：`while state.keep_running() { ... }`
  ///
  /// The timer starts on the first call and stops once the planned iterations are done.
  /// 计时器在首次调用时启动，计划迭代完成后停止。
  #[inline]
  pub fn keep_running(&mut self) -> bool {
    if self.iterations < self.max_iterations {
      if self.iterations == 0 {
        self.start = Some(Instant::now());
      }
      self.iterations += 1;
      return true;
    }
    self.stop();
    false
  }

  fn stop(&mut self) {
    if let Some(start) = self.start.take() {
      self.elapsed = start.elapsed();
    }
  }

  #[inline]
  #[must_use]
  pub fn items_processed(&self) -> u64 {
    self.items_processed
  }

  #[inline]
  pub fn set_items_processed(&mut self, items: u64) {
    self.items_processed = items;
  }

  /// Input size used for the complexity fit
  /// 复杂度拟合使用的输入规模
  #[inline]
  pub fn set_complexity_n(&mut self, n: usize) {
    self.complexity_n = n;
  }

  pub fn set_counter(&mut self, name: impl Into<String>, value: f64) {
    let name = name.into();
    match self.counters.iter_mut().find(|(k, _)| *k == name) {
      Some((_, v)) => *v = value,
      None => self.counters.push((name, value)),
    }
  }

  #[must_use]
  pub fn iterations(&self) -> u64 {
    self.iterations
  }

  pub(crate) fn into_run(mut self, name: String) -> Run {
    self.stop();
    let secs = self.elapsed.as_secs_f64();
    let mut counters = self.counters;
    if self.items_processed > 0 && secs > 0.0 {
      counters.insert(
        0,
        (ITEMS_PER_SECOND.to_owned(), self.items_processed as f64 / secs),
      );
    }

    let mut run = Run::new(name);
    run.iterations = self.iterations;
    run.real_time_ns = if self.iterations > 0 {
      secs * 1e9 / self.iterations as f64
    } else {
      0.0
    };
    run.complexity_n = self.complexity_n;
    run.counters = counters;
    run
  }
}
