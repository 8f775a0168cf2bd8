//! Minimal timing engine: sweep registration, iteration calibration and batch reporting
//! 精简计时引擎：扫描注册、迭代次数校准与批次报告

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use std::time::Duration;

use log::{debug, info};

pub mod complexity;
pub mod reporter;
pub mod run;
pub mod state;

pub use self::{
  reporter::{ConsoleReporter, Reporter},
  run::{ITEMS_PER_SECOND, Run, RunKind},
  state::State,
};

/// Upper bound of the calibrated iteration count
/// 校准迭代次数上限
pub const MAX_ITERATIONS: u64 = 1_000_000_000;

/// Default minimum measured time per run
/// 每次运行的默认最短测量时间
pub const MIN_TIME: Duration = Duration::from_millis(500);

/// Default growth factor between swept sizes
/// 扫描规模之间的默认增长倍数
pub const RANGE_MULTIPLIER: usize = 8;

pub type BenchFn = fn(&mut State);

/// Registered benchmark family
/// 已注册的基准族
#[derive(Clone, Debug)]
pub struct Bench {
  pub family: String,
  func: BenchFn,
  multiplier: usize,
  range: Option<(usize, usize)>,
  complexity: bool,
}

impl Bench {
  pub fn new(family: impl Into<String>, func: BenchFn) -> Self {
    Self {
      family: family.into(),
      func,
      multiplier: RANGE_MULTIPLIER,
      range: None,
      complexity: false,
    }
  }

  #[must_use]
  pub fn range_multiplier(mut self, multiplier: usize) -> Self {
    self.multiplier = multiplier.max(2);
    self
  }

  #[must_use]
  pub fn range(mut self, lo: usize, hi: usize) -> Self {
    self.range = Some((lo, hi));
    self
  }

  /// Fit and report complexity after the sweep
  /// 扫描结束后拟合并报告复杂度
  #[must_use]
  pub fn complexity(mut self) -> Self {
    self.complexity = true;
    self
  }

  /// Swept sizes: `lo`, powers of the multiplier inside `(lo, hi)`, then `hi`
  /// 扫描规模：`lo`、位于 `(lo, hi)` 内的倍数幂，最后是 `hi`
  #[must_use]
  pub fn args(&self) -> Vec<usize> {
    let Some((lo, hi)) = self.range else {
      return Vec::new();
    };
    let mut out = vec![lo];
    let mut p = 1usize;
    while p < hi {
      if p > lo {
        out.push(p);
      }
      match p.checked_mul(self.multiplier) {
        Some(next) => p = next,
        None => break,
      }
    }
    if hi > lo {
      out.push(hi);
    }
    out
  }
}

/// Engine configuration
/// 引擎配置
#[derive(Clone, Debug)]
pub struct Conf {
  pub min_time: Duration,
  /// Substring a run name must contain
  /// 运行名称必须包含的子串
  pub filter: Option<String>,
  /// Skip sizes above this bound
  /// 跳过超过此上限的规模
  pub max_n: Option<usize>,
}

impl Default for Conf {
  fn default() -> Self {
    Self {
      min_time: MIN_TIME,
      filter: None,
      max_n: None,
    }
  }
}

#[derive(Debug, Default)]
pub struct Runner {
  conf: Conf,
  benches: Vec<Bench>,
}

impl Runner {
  #[must_use]
  pub fn new(conf: Conf) -> Self {
    Self {
      conf,
      benches: Vec::new(),
    }
  }

  pub fn register(&mut self, bench: Bench) -> &mut Self {
    self.benches.push(bench);
    self
  }

  #[must_use]
  pub fn benches(&self) -> &[Bench] {
    &self.benches
  }

  /// Run names and sizes selected for one family
  /// 某个族被选中的运行名称与规模
  fn plan(&self, bench: &Bench) -> Vec<(String, usize)> {
    let args = bench.args();
    let named: Vec<(String, usize)> = if args.is_empty() {
      vec![(bench.family.clone(), 0)]
    } else {
      args
        .into_iter()
        .filter(|&n| self.conf.max_n.is_none_or(|max| n <= max))
        .map(|n| (format!("{}/{n}", bench.family), n))
        .collect()
    };
    named
      .into_iter()
      .filter(|(name, _)| {
        self
          .conf
          .filter
          .as_deref()
          .is_none_or(|f| name.contains(f))
      })
      .collect()
  }

  /// Names of every selected run
  /// 所有被选中运行的名称
  #[must_use]
  pub fn list(&self) -> Vec<String> {
    self
      .benches
      .iter()
      .flat_map(|b| self.plan(b))
      .map(|(name, _)| name)
      .collect()
  }

  /// Run every selected benchmark in registration order
  /// 按注册顺序运行所有被选中的基准
  pub fn run(&self, reporter: &mut dyn Reporter) {
    for bench in &self.benches {
      let plan = self.plan(bench);
      if plan.is_empty() {
        continue;
      }
      info!("{}: {} size points", bench.family, plan.len());

      let mut family_runs = Vec::with_capacity(plan.len());
      for (name, arg) in plan {
        let run = self.measure(bench.func, name, arg);
        reporter.report_runs(std::slice::from_ref(&run));
        family_runs.push(run);
      }

      if bench.complexity {
        let summary = complexity::summary_runs(&bench.family, &family_runs);
        if !summary.is_empty() {
          reporter.report_runs(&summary);
        }
      }
    }
    reporter.finish();
  }

  /// Grow the iteration count until the run lasts at least `min_time`
  /// 增加迭代次数，直到运行时间不少于 `min_time`
  fn measure(&self, func: BenchFn, name: String, arg: usize) -> Run {
    let min_time = self.conf.min_time.as_secs_f64();
    let mut iters = 1u64;
    loop {
      let mut state = State::new(arg, iters);
      func(&mut state);
      let state_iters = state.iterations();
      let run = state.into_run(name.clone());
      let secs = run.real_time_ns * run.iterations as f64 / 1e9;

      if secs >= min_time || iters >= MAX_ITERATIONS || state_iters < iters {
        return run;
      }

      let multiplier = min_time * 1.4 / secs.max(1e-9);
      let multiplier = if secs / min_time > 0.1 {
        multiplier
      } else {
        10.0
      };
      let next = ((iters as f64 * multiplier).ceil() as u64)
        .max(iters + 1)
        .min(MAX_ITERATIONS);
      debug!("{name}: {iters} iterations took {secs:.6}s, retrying with {next}");
      iters = next;
    }
  }
}
