//! Node and edge label formatting.

use crate::rate::RateAggregator;
use crate::types::{ConnectorStatus, Metrics, live_metrics};

/// Prefix of the pending-message count on source edges.
pub const PENDING_SYMBOL: char = '◷';
/// Prefix of the aggregate rate on edges.
pub const RATE_SYMBOL: char = 'Δ';

/// Step name, suffixed with ` (x<replicas>)` unless exactly one replica runs.
pub fn step_label(name: &str, replicas: u32) -> String {
  if replicas == 1 {
    name.to_string()
  } else {
    format!("{name} (x{replicas})")
  }
}

/// Renders `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, c) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(c);
  }
  out
}

/// ` ◷1,500 ` for a nonzero count, otherwise empty.
pub fn format_pending(pending: u64) -> String {
  if pending == 0 {
    return String::new();
  }
  format!(" {PENDING_SYMBOL}{} ", group_thousands(pending))
}

/// `Δ<aggregate>` over live replicas, or empty when none report metrics.
pub fn format_rates(metrics: &Metrics, replicas: u32, aggregator: &dyn RateAggregator) -> String {
  let live = live_metrics(metrics, replicas);
  if live.is_empty() {
    return String::new();
  }
  format!("{RATE_SYMBOL}{}", aggregator.total_rate(&live, replicas))
}

/// Pending segment followed by rate segment.
pub fn source_edge_label(
  status: &ConnectorStatus,
  replicas: u32,
  aggregator: &dyn RateAggregator,
) -> String {
  let mut label = format_pending(status.pending());
  label.push_str(&format_rates(&status.metrics, replicas, aggregator));
  label
}

/// Sinks report no pending count, so only the rate segment.
pub fn sink_edge_label(
  status: &ConnectorStatus,
  replicas: u32,
  aggregator: &dyn RateAggregator,
) -> String {
  format_rates(&status.metrics, replicas, aggregator)
}
