use thiserror::Error;

/// Report Result type.
/// 报告专用的 Result 类型。
pub type Result<T> = std::result::Result<T, Error>;

/// Report Error Enum.
/// 报告错误枚举。
#[derive(Error, Debug)]
pub enum Error {
  /// Template has no placeholder, the asset is corrupt.
  /// 模板缺少占位符，资源已损坏。
  #[error("Template is missing placeholder {0}")]
  MissingPlaceholder(&'static str),
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
  #[error("Serialization error: {0}")]
  Json(#[from] serde_json::Error),
}
