//! Pipeline input model and the topology graph produced from it.
//!
//! Input types deserialize from the camelCase JSON the dataflow controller
//! publishes; every field is optional and defaults when absent.

mod connector;
mod connector_status;
#[cfg(test)]
mod connector_status_test;
mod genre;
mod node_id;
#[cfg(test)]
mod node_id_test;
mod pipeline;
pub mod step;
mod step_kind;
mod topology_graph;
#[cfg(test)]
mod topology_graph_test;

pub use connector::{
  Cron, DEFAULT_CLUSTER, Database, HttpSink, HttpSource, Kafka, Log, S3, Sink, SinkConnector,
  Source, SourceConnector, Stan,
};
pub use connector_status::{
  ConnectorStatus, Metrics, ReplicaMetrics, is_live_replica, live_metrics,
};
pub use genre::{Genre, Icon};
pub use node_id::{Direction, NodeId};
pub use pipeline::{Pipeline, PipelineMetadata};
pub use step::{PHASE_RUNNING, Step, StepSpec, StepStatus};
pub use step_kind::StepKind;
pub use topology_graph::{EdgeKey, FLOW_CLASS, GraphEdge, GraphFragment, GraphNode, TopologyGraph};
