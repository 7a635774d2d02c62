//! Tests for `ConnectorStatus`.

use super::{ConnectorStatus, Metrics, ReplicaMetrics};

fn metrics(entries: &[(&str, f64)]) -> Metrics {
  entries
    .iter()
    .map(|(k, r)| (k.to_string(), ReplicaMetrics::new(*r)))
    .collect()
}

#[test]
fn pending_defaults_to_zero() {
  assert_eq!(ConnectorStatus::default().pending(), 0);
  let s = ConnectorStatus {
    pending: Some(42),
    ..Default::default()
  };
  assert_eq!(s.pending(), 42);
}

#[test]
fn live_metrics_drops_scaled_down_replicas() {
  let s = ConnectorStatus {
    pending: None,
    metrics: metrics(&[("0", 1.0), ("1", 2.0), ("2", 4.0)]),
  };
  let live = s.live_metrics(2);
  assert_eq!(live.len(), 2);
  assert!(live.contains_key("0"));
  assert!(live.contains_key("1"));
  assert!(!live.contains_key("2"));
}

#[test]
fn live_metrics_empty_when_no_replicas() {
  let s = ConnectorStatus {
    pending: None,
    metrics: metrics(&[("0", 1.0)]),
  };
  assert!(s.live_metrics(0).is_empty());
}

#[test]
fn live_metrics_ignores_non_numeric_keys() {
  let s = ConnectorStatus {
    pending: None,
    metrics: metrics(&[("x", 1.0), ("0", 3.0)]),
  };
  let live = s.live_metrics(5);
  assert_eq!(live.len(), 1);
  assert_eq!(live["0"].rate, 3.0);
}

#[test]
fn deserialize_status() {
  let s: ConnectorStatus =
    serde_json::from_str(r#"{"pending":1500,"metrics":{"0":{"rate":2.5},"1":{}}}"#).unwrap();
  assert_eq!(s.pending(), 1500);
  assert_eq!(s.metrics["0"].rate, 2.5);
  assert_eq!(s.metrics["1"].rate, 0.0);
}

#[test]
fn is_live_replica_bounds() {
  assert!(super::is_live_replica("0", 1));
  assert!(!super::is_live_replica("1", 1));
  assert!(!super::is_live_replica("", 3));
  assert!(!super::is_live_replica("one", 3));
}
