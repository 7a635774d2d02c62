//! Live status reported for a source or sink.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Recent throughput of one replica.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReplicaMetrics {
  /// Messages per second.
  pub rate: f64,
}

impl ReplicaMetrics {
  pub fn new(rate: f64) -> Self {
    Self { rate }
  }
}

/// Per-replica metrics keyed by the string-encoded replica index.
pub type Metrics = BTreeMap<String, ReplicaMetrics>;

/// Status of one connector, looked up by connector name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConnectorStatus {
  /// Messages queued but not yet consumed. Only sources report it.
  pub pending: Option<u64>,
  pub metrics: Metrics,
}

impl ConnectorStatus {
  pub fn pending(&self) -> u64 {
    self.pending.unwrap_or(0)
  }

  /// Metrics of replicas with an index strictly below `replicas`.
  pub fn live_metrics(&self, replicas: u32) -> Metrics {
    live_metrics(&self.metrics, replicas)
  }
}

/// True when `replica` parses as an index strictly below `replicas`.
///
/// Rates of replicas removed by a scale-down linger in the status and would
/// overstate throughput. Keys that are not integers never match.
pub fn is_live_replica(replica: &str, replicas: u32) -> bool {
  replica
    .parse::<i64>()
    .is_ok_and(|i| i < i64::from(replicas))
}

/// Entries of `metrics` whose replica is live for `replicas`.
pub fn live_metrics(metrics: &Metrics, replicas: u32) -> Metrics {
  metrics
    .iter()
    .filter(|(replica, _)| is_live_replica(replica, replicas))
    .map(|(k, v)| (k.clone(), *v))
    .collect()
}
