//! Run batch callbacks
//! 运行批次回调

use super::run::{Run, RunKind};

/// Invoked once per completed batch, in registration order
/// 每个完成的批次调用一次，按注册顺序
pub trait Reporter {
  fn report_runs(&mut self, runs: &[Run]);

  /// Called after the last batch
  /// 最后一个批次之后调用
  fn finish(&mut self) {}
}

/// Prints a table to stdout
/// 向标准输出打印表格
#[derive(Debug, Default)]
pub struct ConsoleReporter {
  header: bool,
}

const NAME_WIDTH: usize = 36;

impl Reporter for ConsoleReporter {
  fn report_runs(&mut self, runs: &[Run]) {
    if !self.header {
      self.header = true;
      println!(
        "{:<NAME_WIDTH$} {:>16} {:>12}  Counters",
        "Benchmark", "Time", "Iterations"
      );
      println!("{}", "-".repeat(NAME_WIDTH + 48));
    }
    for run in runs {
      println!("{}", fmt_run(run));
    }
  }
}

/// One console row
/// 控制台中的一行
#[must_use]
pub fn fmt_run(run: &Run) -> String {
  match run.kind {
    RunKind::Iteration => {
      let counters: Vec<String> = run
        .counters
        .iter()
        .map(|(k, v)| format!("{k}={}/s", fmt_si(*v)))
        .collect();
      format!(
        "{:<NAME_WIDTH$} {:>13.1} ns {:>12}  {}",
        run.name,
        run.real_time_ns,
        run.iterations,
        counters.join(" ")
      )
    }
    RunKind::BigO => {
      let big_o = run.big_o.map(|b| b.to_string()).unwrap_or_default();
      format!("{:<NAME_WIDTH$} {:>13.2} {}", run.name, run.real_time_ns, big_o)
    }
    RunKind::Rms => format!(
      "{:<NAME_WIDTH$} {:>13.0} %",
      run.name,
      run.rms.unwrap_or_default() * 100.0
    ),
  }
}

/// Scale a value with k/M/G/T suffixes
/// 用 k/M/G/T 后缀缩放数值
#[must_use]
pub fn fmt_si(v: f64) -> String {
  const UNITS: [&str; 5] = ["", "k", "M", "G", "T"];
  let mut v = v;
  let mut unit = 0;
  while v.abs() >= 1000.0 && unit + 1 < UNITS.len() {
    v /= 1000.0;
    unit += 1;
  }
  format!("{v:.3}{}", UNITS[unit])
}
