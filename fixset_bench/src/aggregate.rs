//! Groups completed runs into one series per family
//! 将已完成的运行按族分组为序列

use rapidhash::RapidHashMap;
use serde::Serialize;

use crate::engine::Run;

/// Separator between family and size in a run name
/// 运行名称中族与规模之间的分隔符
pub const SEPARATOR: char = '/';

/// Ordered `(size, metric)` points of one family
/// 某个族的有序 `(规模, 指标)` 数据点
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
  pub name: String,
  pub data: Vec<(String, f64)>,
}

/// Split `{family}/{size}`, None unless there are exactly two parts
/// 拆分 `{family}/{size}`，不恰好为两段时返回 None
#[must_use]
pub fn split_name(name: &str) -> Option<(&str, &str)> {
  let mut parts = name.split(SEPARATOR);
  let family = parts.next()?;
  let size = parts.next()?;
  if parts.next().is_some() {
    return None;
  }
  Some((family, size))
}

/// Every run of the session
/// 会话中的全部运行
#[derive(Debug, Default)]
pub struct Aggregator {
  runs: Vec<Run>,
}

impl Aggregator {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&mut self, run: Run) {
    self.runs.push(run);
  }

  pub fn record_batch(&mut self, runs: &[Run]) {
    self.runs.extend_from_slice(runs);
  }

  #[must_use]
  pub fn runs(&self) -> &[Run] {
    &self.runs
  }

  /// Series in first-emission order of their family, points in emission order.
  /// Runs without counters or without a `{family}/{size}` name are skipped.
  ///
  /// 序列按族首次出现的顺序排列，数据点按产生顺序排列。
  /// 没有计数器或名称不是 `{family}/{size}` 的运行将被跳过。
  #[must_use]
  pub fn grouped_series(&self) -> Vec<Series> {
    let mut index: RapidHashMap<&str, usize> = RapidHashMap::default();
    let mut series: Vec<Series> = Vec::new();

    for run in &self.runs {
      let Some(&(_, metric)) = run.counters.first() else {
        continue;
      };
      let Some((family, size)) = split_name(&run.name) else {
        continue;
      };
      let i = *index.entry(family).or_insert_with(|| {
        series.push(Series {
          name: family.to_owned(),
          data: Vec::new(),
        });
        series.len() - 1
      });
      series[i].data.push((size.to_owned(), metric));
    }
    series
  }
}
