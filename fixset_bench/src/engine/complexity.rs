//! Least-squares fit of run time against input size
//! 运行时间相对输入规模的最小二乘拟合

#![allow(clippy::cast_precision_loss)]

use std::fmt;

use serde::Serialize;

use super::run::{Run, RunKind};

/// Candidate complexity curves
/// 候选复杂度曲线
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BigO {
  O1,
  ON,
  ONSquared,
  ONCubed,
  OLogN,
  ONLogN,
}

impl BigO {
  /// Curves tried after the constant fit
  /// 常数拟合之后尝试的曲线
  pub const CURVES: [BigO; 5] = [
    BigO::OLogN,
    BigO::ON,
    BigO::ONSquared,
    BigO::ONCubed,
    BigO::ONLogN,
  ];

  #[must_use]
  pub fn eval(self, n: f64) -> f64 {
    match self {
      BigO::O1 => 1.0,
      BigO::ON => n,
      BigO::ONSquared => n * n,
      BigO::ONCubed => n * n * n,
      BigO::OLogN => n.log2(),
      BigO::ONLogN => n * n.log2(),
    }
  }
}

impl fmt::Display for BigO {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      BigO::O1 => "(1)",
      BigO::ON => "N",
      BigO::ONSquared => "N^2",
      BigO::ONCubed => "N^3",
      BigO::OLogN => "lgN",
      BigO::ONLogN => "NlgN",
    })
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeastSq {
  pub complexity: BigO,
  pub coef: f64,
  /// Root mean square error divided by the mean time
  /// 均方根误差除以平均时间
  pub rms: f64,
}

/// Fit one curve to `(n, time)` points
/// 将一条曲线拟合到 `(n, time)` 点
#[must_use]
pub fn fit_curve(points: &[(usize, f64)], complexity: BigO) -> Option<LeastSq> {
  let mut sigma_gn2 = 0.0;
  let mut sigma_time_gn = 0.0;
  let mut sigma_time = 0.0;
  for &(n, t) in points {
    let g = complexity.eval(n as f64);
    sigma_gn2 += g * g;
    sigma_time_gn += t * g;
    sigma_time += t;
  }
  if points.is_empty() || sigma_gn2 == 0.0 {
    return None;
  }

  let coef = sigma_time_gn / sigma_gn2;
  let count = points.len() as f64;
  let sq: f64 = points
    .iter()
    .map(|&(n, t)| {
      let d = t - coef * complexity.eval(n as f64);
      d * d
    })
    .sum();
  let mean = sigma_time / count;
  let rms = (sq / count).sqrt();
  let rms = if mean > 0.0 { rms / mean } else { rms };
  Some(LeastSq {
    complexity,
    coef,
    rms,
  })
}

/// Best fitting curve, None for fewer than two points
/// 最佳拟合曲线，少于两个点时返回 None
#[must_use]
pub fn minimal_least_sq(points: &[(usize, f64)]) -> Option<LeastSq> {
  if points.len() < 2 {
    return None;
  }
  let mut best = fit_curve(points, BigO::O1)?;
  for curve in BigO::CURVES {
    if let Some(fit) = fit_curve(points, curve)
      && fit.rms < best.rms
    {
      best = fit;
    }
  }
  Some(best)
}

/// `{family}_BigO` and `{family}_RMS` runs for a finished sweep
/// 扫描结束后生成 `{family}_BigO` 与 `{family}_RMS` 运行
#[must_use]
pub fn summary_runs(family: &str, runs: &[Run]) -> Vec<Run> {
  let points: Vec<(usize, f64)> = runs
    .iter()
    .filter(|r| r.kind == RunKind::Iteration)
    .map(|r| (r.complexity_n, r.real_time_ns))
    .collect();
  let Some(fit) = minimal_least_sq(&points) else {
    return Vec::new();
  };

  let mut big_o = Run::new(format!("{family}_BigO"));
  big_o.kind = RunKind::BigO;
  big_o.real_time_ns = fit.coef;
  big_o.big_o = Some(fit.complexity);
  big_o.counters = mean_counters(runs);

  let mut rms = Run::new(format!("{family}_RMS"));
  rms.kind = RunKind::Rms;
  rms.rms = Some(fit.rms);
  rms.big_o = Some(fit.complexity);

  vec![big_o, rms]
}

/// Mean of each counter, keyed by first appearance
/// 各计数器的均值，按首次出现排序
fn mean_counters(runs: &[Run]) -> Vec<(String, f64)> {
  let mut sums: Vec<(String, f64, usize)> = Vec::new();
  for (name, value) in runs.iter().flat_map(|r| r.counters.iter()) {
    match sums.iter_mut().find(|(k, _, _)| k == name) {
      Some((_, sum, count)) => {
        *sum += value;
        *count += 1;
      }
      None => sums.push((name.clone(), *value, 1)),
    }
  }
  sums
    .into_iter()
    .map(|(name, sum, count)| (name, sum / count as f64))
    .collect()
}
