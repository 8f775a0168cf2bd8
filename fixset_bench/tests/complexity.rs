//! Complexity fit tests
//! 复杂度拟合测试

use aok::{OK, Void};
use fixset_bench::{
  Run, RunKind,
  engine::{
    ITEMS_PER_SECOND,
    complexity::{BigO, fit_curve, minimal_least_sq, summary_runs},
  },
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn sizes() -> Vec<usize> {
  (4..=16).map(|p| 1usize << p).collect()
}

fn points(f: impl Fn(f64) -> f64) -> Vec<(usize, f64)> {
  sizes().into_iter().map(|n| (n, f(n as f64))).collect()
}

#[test]
fn test_linear() -> Void {
  let fit = minimal_least_sq(&points(|n| 3.0 * n)).unwrap();
  assert_eq!(fit.complexity, BigO::ON);
  assert!((fit.coef - 3.0).abs() < 1e-9);
  assert!(fit.rms < 1e-9);
  OK
}

#[test]
fn test_log() -> Void {
  let fit = minimal_least_sq(&points(|n| 5.0 * n.log2())).unwrap();
  assert_eq!(fit.complexity, BigO::OLogN);
  assert!((fit.coef - 5.0).abs() < 1e-9);
  OK
}

#[test]
fn test_constant() -> Void {
  let fit = minimal_least_sq(&points(|_| 42.0)).unwrap();
  assert_eq!(fit.complexity, BigO::O1);
  assert!((fit.coef - 42.0).abs() < 1e-9);
  OK
}

#[test]
fn test_n_log_n_and_square() -> Void {
  let fit = minimal_least_sq(&points(|n| n * n.log2())).unwrap();
  assert_eq!(fit.complexity, BigO::ONLogN);
  let fit = minimal_least_sq(&points(|n| 0.5 * n * n)).unwrap();
  assert_eq!(fit.complexity, BigO::ONSquared);
  OK
}

#[test]
fn test_too_few_points() -> Void {
  assert!(minimal_least_sq(&[]).is_none());
  assert!(minimal_least_sq(&[(16, 1.0)]).is_none());
  assert!(fit_curve(&[(1, 1.0)], BigO::OLogN).is_none());
  OK
}

#[test]
fn test_display() -> Void {
  assert_eq!(BigO::O1.to_string(), "(1)");
  assert_eq!(BigO::OLogN.to_string(), "lgN");
  assert_eq!(BigO::ONLogN.to_string(), "NlgN");
  assert_eq!(BigO::ONSquared.to_string(), "N^2");
  OK
}

#[test]
fn test_summary_runs() -> Void {
  let runs: Vec<Run> = [(16usize, 160.0, 2.0), (32, 320.0, 4.0), (64, 640.0, 6.0)]
    .into_iter()
    .map(|(n, t, ips)| {
      let mut run = Run::new(format!("Foo/{n}")).with_counter(ITEMS_PER_SECOND, ips);
      run.complexity_n = n;
      run.real_time_ns = t;
      run
    })
    .collect();

  let summary = summary_runs("Foo", &runs);
  assert_eq!(summary.len(), 2);
  assert_eq!(summary[0].name, "Foo_BigO");
  assert_eq!(summary[0].kind, RunKind::BigO);
  assert_eq!(summary[0].big_o, Some(BigO::ON));
  assert!((summary[0].real_time_ns - 10.0).abs() < 1e-9);
  assert_eq!(summary[0].counter(ITEMS_PER_SECOND), Some(4.0));
  assert_eq!(summary[1].name, "Foo_RMS");
  assert!(summary[1].rms.is_some_and(|r| r < 1e-9));

  assert!(summary_runs("Foo", &runs[..1]).is_empty());
  OK
}
