//! Reporter that collects every run for the HTML report
//! 收集所有运行以生成 HTML 报告的报告器

use std::{fs, path::Path};

use log::debug;

use crate::{
  Result,
  aggregate::Aggregator,
  engine::{Reporter, Run},
  render::{render_report, render_series},
};

/// Records each batch, then hands it to the inner reporter
/// 记录每个批次，再交给内部报告器
#[derive(Debug, Default)]
pub struct HtmlReporter<R: Reporter> {
  inner: R,
  agg: Aggregator,
}

impl<R: Reporter> HtmlReporter<R> {
  pub fn new(inner: R) -> Self {
    Self {
      inner,
      agg: Aggregator::new(),
    }
  }

  #[must_use]
  pub fn aggregator(&self) -> &Aggregator {
    &self.agg
  }

  /// Escaped chart records of all recorded series
  /// 所有已记录序列转义后的图表记录
  #[must_use]
  pub fn series_block(&self) -> String {
    render_series(&self.agg.grouped_series())
  }

  /// Render all recorded series into `template`
  /// 将所有已记录的序列渲染进 `template`
  pub fn generate_report(&self, template: &str) -> Result<String> {
    let block = self.series_block();
    debug!("series:\n{block}");
    render_report(template, &block)
  }

  /// Dump every recorded run as JSON
  /// 以 JSON 导出全部已记录的运行
  pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(self.agg.runs())?;
    fs::write(path, json)?;
    Ok(())
  }
}

impl<R: Reporter> Reporter for HtmlReporter<R> {
  fn report_runs(&mut self, runs: &[Run]) {
    self.agg.record_batch(runs);
    self.inner.report_runs(runs);
  }

  fn finish(&mut self) {
    self.inner.finish();
  }
}
