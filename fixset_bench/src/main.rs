use std::{path::PathBuf, time::Duration};

use clap::Parser;
use fixset_bench::{
  ConsoleReporter, HtmlReporter, Runner, driver,
  engine::{Conf, MIN_TIME},
  render::{REPORT_PATH, TEMPLATE, render_report, write_report},
};
use log::info;

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// Only run benchmarks whose name contains this string
  /// 只运行名称包含该字符串的基准
  #[arg(short, long)]
  filter: Option<String>,

  /// Minimum measured seconds per run
  /// 每次运行的最短测量秒数
  #[arg(long, default_value_t = MIN_TIME.as_secs_f64())]
  min_time: f64,

  /// Skip sizes above this bound
  /// 跳过超过此上限的规模
  #[arg(long)]
  max_n: Option<usize>,

  /// Report output path
  /// 报告输出路径
  #[arg(short, long, default_value = REPORT_PATH)]
  out: PathBuf,

  /// Also dump raw runs as JSON
  /// 同时以 JSON 导出原始运行
  #[arg(long)]
  json: Option<PathBuf>,

  /// List selected benchmarks and exit
  /// 列出被选中的基准后退出
  #[arg(long)]
  list: bool,
}

fn main() -> anyhow::Result<()> {
  log_init::init();
  let args = Args::parse();

  let conf = Conf {
    min_time: Duration::from_secs_f64(args.min_time.max(0.0)),
    filter: args.filter,
    max_n: args.max_n,
  };
  let mut runner = Runner::new(conf);
  driver::register(&mut runner);

  if args.list {
    for name in runner.list() {
      println!("{name}");
    }
    return Ok(());
  }

  let mut reporter = HtmlReporter::new(ConsoleReporter::default());
  runner.run(&mut reporter);

  let block = reporter.series_block();
  println!("{block}");
  let doc = render_report(TEMPLATE, &block)?;
  write_report(&args.out, &doc)?;
  info!("report written to {}", args.out.display());

  if let Some(path) = args.json {
    reporter.write_json(&path)?;
    info!("runs written to {}", path.display());
  }
  Ok(())
}
