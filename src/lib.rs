//! # dataflow-topology
//!
//! Turns a dataflow pipeline (steps with their sources, sinks and live status)
//! into a node/edge graph for a renderer to lay out.
//!
//! ## Graph shape
//!
//! - One node per step, keyed `step/<name>`.
//! - One node per source and sink. Kafka topics, STAN subjects, HTTP endpoints and
//!   S3 buckets are keyed by the resource, so steps sharing one meet at a single
//!   node. Cron, database, log and unknown connectors are keyed per step.
//! - Edges run connector → step for sources and step → connector for sinks,
//!   labelled with pending counts and throughput from the step status.
//!
//! ```
//! use dataflow_topology::{Pipeline, Step, build};
//!
//! let steps: Vec<Step> = serde_json::from_str(
//!   r#"[{"spec": {"name": "main", "cat": {}, "sinks": [{"name": "out", "s3": {"bucket": "b1"}}]}}]"#,
//! )?;
//! let graph = build(&Pipeline::new("demo"), &steps)?;
//! assert!(graph.has_node("step/main"));
//! assert!(graph.edge("step/main", "s3/b1").is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod document_io;
pub mod error;
pub mod labels;
#[cfg(test)]
mod labels_test;
pub mod rate;
pub mod types;

pub use builder::{TopologyBuilder, build};
pub use document_io::PipelineDocument;
pub use error::TopologyError;
pub use rate::{RateAggregator, TotalRate};
pub use types::{Pipeline, Step, TopologyGraph};
