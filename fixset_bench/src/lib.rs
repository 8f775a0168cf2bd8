//! Membership query benchmark driver, run aggregation and report rendering
//! 成员查询基准驱动、运行结果聚合与报告渲染

pub mod aggregate;
pub mod data;
pub mod driver;
pub mod engine;
pub mod error;
pub mod html;
pub mod render;

pub use self::{
  aggregate::{Aggregator, Series},
  engine::{Bench, Conf, ConsoleReporter, Reporter, Run, RunKind, Runner, State},
  error::{Error, Result},
  html::HtmlReporter,
};
