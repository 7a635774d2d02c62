//! Builds the topology graph of a pipeline from its steps.
//!
//! Each step is lowered to a [`GraphFragment`] holding its own node, one node per
//! source and sink, and the edges joining them. Fragments are merged in step order,
//! so when two steps reference the same shared resource the later step's
//! attributes win.

use std::fmt;

use tracing::{debug, info, instrument};
use url::Url;

use crate::error::TopologyError;
use crate::labels::{sink_edge_label, source_edge_label, step_label};
use crate::rate::{RateAggregator, TotalRate};
use crate::types::{
  Direction, EdgeKey, FLOW_CLASS, Genre, GraphEdge, GraphFragment, GraphNode, NodeId, Pipeline,
  Sink, SinkConnector, Source, SourceConnector, Step, TopologyGraph,
};

/// Label of every log sink node.
pub const LOG_LABEL: &str = "log";

/// Builds topology graphs. Holds the rate aggregator used for edge labels.
pub struct TopologyBuilder {
  aggregator: Box<dyn RateAggregator>,
}

impl Default for TopologyBuilder {
  fn default() -> Self {
    Self {
      aggregator: Box::new(TotalRate),
    }
  }
}

impl fmt::Debug for TopologyBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TopologyBuilder").finish_non_exhaustive()
  }
}

impl TopologyBuilder {
  /// Builder using [`TotalRate`].
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_rate_aggregator(mut self, aggregator: impl RateAggregator + 'static) -> Self {
    self.aggregator = Box::new(aggregator);
    self
  }

  /// Builds the full graph for `pipeline`.
  ///
  /// Fails only when an HTTP connector resolves to an unparsable URL.
  #[instrument(level = "trace", skip_all, fields(pipeline = %pipeline.name(), steps = steps.len()))]
  pub fn build(&self, pipeline: &Pipeline, steps: &[Step]) -> Result<TopologyGraph, TopologyError> {
    let mut graph = TopologyGraph::new();
    for step in steps {
      graph.merge(self.step_fragment(pipeline, step)?);
    }
    info!(
      node_count = graph.node_count(),
      edge_count = graph.edge_count(),
      "topology built"
    );
    Ok(graph)
  }

  /// Nodes and edges contributed by a single step.
  #[instrument(level = "trace", skip_all, fields(step = %step.name()))]
  pub fn step_fragment(
    &self,
    pipeline: &Pipeline,
    step: &Step,
  ) -> Result<GraphFragment, TopologyError> {
    let kind = step.spec.kind();
    let replicas = step.replicas();
    let step_id = NodeId::step(step.name());
    debug!(
      kind = %kind,
      replicas,
      phase = step.phase(),
      sources = step.spec.sources.len(),
      sinks = step.spec.sinks.len(),
      "lowering step"
    );

    let mut fragment = GraphFragment::default();
    fragment.nodes.push((
      step_id.clone(),
      GraphNode::new(Genre::Step(kind), step_label(step.name(), replicas))
        .with_class_names(step.phase()),
    ));

    let class_names = if step.is_running() { FLOW_CLASS } else { "" };

    for source in &step.spec.sources {
      let (id, label) = source_node(pipeline, step, source)?;
      let edge = GraphEdge {
        class_names: class_names.to_string(),
        label: source_edge_label(
          step.source_status(&source.name),
          replicas,
          self.aggregator.as_ref(),
        ),
      };
      fragment.edges.push((EdgeKey::new(&id, &step_id), edge));
      fragment.nodes.push((id.clone(), connector_node(&id, label)));
    }

    for sink in &step.spec.sinks {
      let (id, label) = sink_node(step, sink)?;
      let edge = GraphEdge {
        class_names: class_names.to_string(),
        label: sink_edge_label(
          step.sink_status(&sink.name),
          replicas,
          self.aggregator.as_ref(),
        ),
      };
      fragment.edges.push((EdgeKey::new(&step_id, &id), edge));
      fragment.nodes.push((id.clone(), connector_node(&id, label)));
    }

    Ok(fragment)
  }
}

/// Builds the graph with the default [`TotalRate`] aggregator.
pub fn build(pipeline: &Pipeline, steps: &[Step]) -> Result<TopologyGraph, TopologyError> {
  TopologyBuilder::new().build(pipeline, steps)
}

fn connector_node(id: &NodeId, label: String) -> GraphNode {
  GraphNode::new(id.connector_genre().unwrap_or(Genre::Unknown), label)
}

/// Id and label of the node a source reads from.
pub(crate) fn source_node(
  pipeline: &Pipeline,
  step: &Step,
  source: &Source,
) -> Result<(NodeId, String), TopologyError> {
  let step_name = step.name().to_string();
  Ok(match source.connector() {
    SourceConnector::Cron(cron) => (
      NodeId::Cron {
        step: step_name,
        schedule: cron.schedule.clone(),
      },
      cron.schedule.clone(),
    ),
    SourceConnector::Db(_) => (
      NodeId::Db {
        step: step_name,
        direction: Direction::Sources,
        name: source.name.clone(),
      },
      source.name.clone(),
    ),
    SourceConnector::Kafka(kafka) => (
      NodeId::Kafka {
        cluster: kafka.cluster_id().to_string(),
        topic: kafka.topic.clone(),
      },
      kafka.topic.clone(),
    ),
    SourceConnector::Stan(stan) => (
      NodeId::Stan {
        cluster: stan.cluster_id().to_string(),
        subject: stan.subject.clone(),
      },
      stan.subject.clone(),
    ),
    SourceConnector::Http(http) => {
      let host = if http.service_name.is_empty() {
        format!("{}-{}", pipeline.name(), step.name())
      } else {
        http.service_name.clone()
      };
      let raw = format!("http://{host}/sources/{}", source.name);
      http_node(step, &source.name, &raw)?
    }
    SourceConnector::S3(s3) => (
      NodeId::S3 {
        bucket: s3.bucket.clone(),
      },
      s3.bucket.clone(),
    ),
    SourceConnector::Unknown => (
      NodeId::Unknown {
        step: step_name,
        direction: Direction::Sources,
        name: source.name.clone(),
      },
      source.name.clone(),
    ),
  })
}

/// Id and label of the node a sink writes to.
pub(crate) fn sink_node(step: &Step, sink: &Sink) -> Result<(NodeId, String), TopologyError> {
  let step_name = step.name().to_string();
  Ok(match sink.connector() {
    SinkConnector::Db(_) => (
      NodeId::Db {
        step: step_name,
        direction: Direction::Sinks,
        name: sink.name.clone(),
      },
      sink.name.clone(),
    ),
    SinkConnector::Kafka(kafka) => (
      NodeId::Kafka {
        cluster: kafka.cluster_id().to_string(),
        topic: kafka.topic.clone(),
      },
      kafka.topic.clone(),
    ),
    SinkConnector::Log(_) => (
      NodeId::Log {
        step: step_name,
        name: sink.name.clone(),
      },
      LOG_LABEL.to_string(),
    ),
    SinkConnector::Stan(stan) => (
      NodeId::Stan {
        cluster: stan.cluster_id().to_string(),
        subject: stan.subject.clone(),
      },
      stan.subject.clone(),
    ),
    SinkConnector::Http(http) => http_node(step, &sink.name, &http.url)?,
    SinkConnector::S3(s3) => (
      NodeId::S3 {
        bucket: s3.bucket.clone(),
      },
      s3.bucket.clone(),
    ),
    SinkConnector::Unknown => (
      NodeId::Unknown {
        step: step_name,
        direction: Direction::Sinks,
        name: sink.name.clone(),
      },
      sink.name.clone(),
    ),
  })
}

/// Parses `raw`; the node is keyed by the normalized URL and labelled with its host.
fn http_node(step: &Step, connector: &str, raw: &str) -> Result<(NodeId, String), TopologyError> {
  let url = Url::parse(raw).map_err(|source| TopologyError::InvalidHttpUrl {
    step: step.name().to_string(),
    connector: connector.to_string(),
    url: raw.to_string(),
    source,
  })?;
  let host = url.host_str().unwrap_or_default().to_string();
  Ok((
    NodeId::Http {
      url: url.to_string(),
    },
    host,
  ))
}
