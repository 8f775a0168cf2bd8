//! Run aggregation tests
//! 运行聚合测试

use aok::{OK, Void};
use fixset_bench::{
  Aggregator, Run, Series,
  aggregate::split_name,
  engine::{ITEMS_PER_SECOND, RunKind},
};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

#[test]
fn test_single_run() -> Void {
  let mut agg = Aggregator::new();
  agg.record(Run::new("Foo/16").with_counter(ITEMS_PER_SECOND, 123.0));
  assert_eq!(
    agg.grouped_series(),
    vec![Series {
      name: "Foo".into(),
      data: vec![("16".into(), 123.0)],
    }]
  );
  OK
}

#[test]
fn test_skipped_runs() -> Void {
  let mut agg = Aggregator::new();
  agg.record(Run::new("Foo_BigO").with_counter(ITEMS_PER_SECOND, 1.0));
  agg.record(Run::new("Foo/16/extra").with_counter(ITEMS_PER_SECOND, 1.0));
  agg.record(Run::new("Foo/32"));
  agg.record(Run::new("").with_counter(ITEMS_PER_SECOND, 1.0));
  assert!(agg.grouped_series().is_empty());
  assert_eq!(agg.runs().len(), 4);
  OK
}

#[test]
fn test_first_counter() -> Void {
  let mut agg = Aggregator::new();
  agg.record(
    Run::new("Foo/16")
      .with_counter("bytes_per_second", 7.0)
      .with_counter(ITEMS_PER_SECOND, 9.0),
  );
  assert_eq!(agg.grouped_series()[0].data, vec![(String::from("16"), 7.0)]);
  OK
}

#[test]
fn test_emission_order() -> Void {
  let mut agg = Aggregator::new();
  let runs = [
    Run::new("A/64").with_counter(ITEMS_PER_SECOND, 3.0),
    Run::new("B/16").with_counter(ITEMS_PER_SECOND, 10.0),
    Run::new("A/16").with_counter(ITEMS_PER_SECOND, 1.0),
    Run::new("A/32").with_counter(ITEMS_PER_SECOND, 2.0),
  ];
  agg.record_batch(&runs);

  let series = agg.grouped_series();
  assert_eq!(series.len(), 2);
  assert_eq!(series[0].name, "A");
  let sizes: Vec<&str> = series[0].data.iter().map(|(s, _)| s.as_str()).collect();
  assert_eq!(sizes, ["64", "16", "32"]);
  assert_eq!(series[1].name, "B");
  assert_eq!(series[1].data, vec![(String::from("16"), 10.0)]);

  // Recomputed on demand
  // 按需重新计算
  assert_eq!(agg.grouped_series(), series);
  OK
}

#[test]
fn test_summary_kind_ignored() -> Void {
  let mut agg = Aggregator::new();
  let mut big_o = Run::new("Foo_BigO").with_counter(ITEMS_PER_SECOND, 5.0);
  big_o.kind = RunKind::BigO;
  agg.record(big_o);
  agg.record(Run::new("Foo/16").with_counter(ITEMS_PER_SECOND, 5.0));
  assert_eq!(agg.grouped_series().len(), 1);
  OK
}

#[test]
fn test_split_name() -> Void {
  assert_eq!(split_name("Foo/16"), Some(("Foo", "16")));
  assert_eq!(split_name("Foo/"), Some(("Foo", "")));
  assert_eq!(split_name("Foo"), None);
  assert_eq!(split_name("a/b/c"), None);
  OK
}
