//! Tests for `labels`.

use crate::labels::{
  format_pending, format_rates, group_thousands, sink_edge_label, source_edge_label, step_label,
};
use crate::rate::TotalRate;
use crate::types::{ConnectorStatus, Metrics, ReplicaMetrics};

fn metrics(entries: &[(&str, f64)]) -> Metrics {
  entries
    .iter()
    .map(|(k, r)| (k.to_string(), ReplicaMetrics::new(*r)))
    .collect()
}

#[test]
fn step_label_single_replica_is_bare_name() {
  assert_eq!(step_label("main", 1), "main");
}

#[test]
fn step_label_other_counts_are_suffixed() {
  assert_eq!(step_label("main", 0), "main (x0)");
  assert_eq!(step_label("main", 3), "main (x3)");
}

#[test]
fn group_thousands_inserts_commas() {
  assert_eq!(group_thousands(0), "0");
  assert_eq!(group_thousands(999), "999");
  assert_eq!(group_thousands(1500), "1,500");
  assert_eq!(group_thousands(1_234_567), "1,234,567");
  assert_eq!(group_thousands(100_000), "100,000");
}

#[test]
fn format_pending_zero_is_empty() {
  assert_eq!(format_pending(0), "");
}

#[test]
fn format_pending_nonzero() {
  assert_eq!(format_pending(1500), " ◷1,500 ");
  assert_eq!(format_pending(7), " ◷7 ");
}

#[test]
fn format_rates_empty_without_live_replicas() {
  assert_eq!(format_rates(&Metrics::new(), 3, &TotalRate), "");
  assert_eq!(format_rates(&metrics(&[("2", 5.0)]), 2, &TotalRate), "");
}

#[test]
fn format_rates_excludes_stale_replicas() {
  let m = metrics(&[("0", 1.0), ("1", 2.0), ("2", 40.0)]);
  assert_eq!(format_rates(&m, 2, &TotalRate), "Δ3");
}

#[test]
fn format_rates_hands_only_live_metrics_to_aggregator() {
  let m = metrics(&[("0", 1.0), ("1", 2.0), ("2", 40.0)]);
  let keys = |m: &Metrics, _: u32| m.keys().cloned().collect::<Vec<_>>().join("+");
  assert_eq!(format_rates(&m, 2, &keys), "Δ0+1");
}

#[test]
fn source_label_combines_pending_and_rate() {
  let status = ConnectorStatus {
    pending: Some(1500),
    metrics: metrics(&[("0", 2.5)]),
  };
  assert_eq!(source_edge_label(&status, 1, &TotalRate), " ◷1,500 Δ2.5");
}

#[test]
fn sink_label_ignores_pending() {
  let status = ConnectorStatus {
    pending: Some(1500),
    metrics: metrics(&[("0", 2.5)]),
  };
  assert_eq!(sink_edge_label(&status, 1, &TotalRate), "Δ2.5");
}

#[test]
fn empty_status_has_empty_labels() {
  let status = ConnectorStatus::default();
  assert_eq!(source_edge_label(&status, 1, &TotalRate), "");
  assert_eq!(sink_edge_label(&status, 1, &TotalRate), "");
}
