//! Aggregation of per-replica rates into the figure shown on an edge.

use crate::types::{Metrics, live_metrics};

/// Turns per-replica metrics into a rendered aggregate rate.
///
/// The builder hands over metrics already restricted to live replicas, along with
/// the current replica count.
pub trait RateAggregator: Send + Sync {
  fn total_rate(&self, metrics: &Metrics, replicas: u32) -> String;
}

impl<F> RateAggregator for F
where
  F: Fn(&Metrics, u32) -> String + Send + Sync,
{
  fn total_rate(&self, metrics: &Metrics, replicas: u32) -> String {
    self(metrics, replicas)
  }
}

/// Sum of the rates of live replicas, rounded to two decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalRate;

impl RateAggregator for TotalRate {
  fn total_rate(&self, metrics: &Metrics, replicas: u32) -> String {
    let total: f64 = live_metrics(metrics, replicas)
      .values()
      .map(|m| m.rate)
      .sum();
    format_rate(total)
  }
}

/// Renders a rate with at most two decimals and no trailing zeros (`3`, `1.5`, `0.33`).
pub fn format_rate(rate: f64) -> String {
  let rounded = (rate * 100.0).round() / 100.0;
  // -0.0 would render as "-0"
  if rounded == 0.0 {
    return "0".to_string();
  }
  format!("{rounded}")
}
