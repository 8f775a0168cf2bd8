//! Chart report rendering
//! 图表报告渲染

use std::{fmt::Write, fs, path::Path};

use crate::{Error, Result, aggregate::Series};

/// Token replaced by the rendered series
/// 被渲染后序列替换的标记
pub const PLACEHOLDER: &str = "%SERIES%";

/// Bundled report page
/// 内置报告页面
pub const TEMPLATE: &str = include_str!("../assets/report.html");

/// Default output file
/// 默认输出文件
pub const REPORT_PATH: &str = "report.html";

/// Escape `<` and `>` for embedding into markup
/// 转义 `<` 与 `>` 以便嵌入标记
#[must_use]
pub fn escape(s: &str) -> String {
  s.replace('<', "&lt;").replace('>', "&gt;")
}

/// Serialize series as chart records, escaped as one block
/// 将序列序列化为图表记录，并整体转义
#[must_use]
pub fn render_series(series: &[Series]) -> String {
  let mut out = String::new();
  for s in series {
    let _ = write!(out, "{{\n\tname: \"{}\",\n\tdata: [", s.name);
    for (size, metric) in &s.data {
      let _ = write!(out, "[{size},{metric}],");
    }
    out.push_str("],\n},\n");
  }
  escape(&out)
}

/// Substitute the block into the template
/// 将数据块代入模板
pub fn render_report(template: &str, block: &str) -> Result<String> {
  if !template.contains(PLACEHOLDER) {
    return Err(Error::MissingPlaceholder(PLACEHOLDER));
  }
  Ok(template.replace(PLACEHOLDER, block))
}

/// Write the document, overwriting any existing file
/// 写出文档，覆盖已有文件
pub fn write_report(path: impl AsRef<Path>, doc: &str) -> Result<()> {
  fs::write(path, doc)?;
  Ok(())
}
