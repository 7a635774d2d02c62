//! Pipeline document load and graph write (JSON).

use std::path::Path;

use serde::Deserialize;
use tracing::instrument;

use crate::error::TopologyError;
use crate::types::{Pipeline, Step, TopologyGraph};

/// A pipeline together with its steps, as fetched by the hosting UI.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineDocument {
  pub pipeline: Pipeline,
  pub steps: Vec<Step>,
}

/// Parses a pipeline document from JSON text.
pub fn parse_document(json: &str) -> Result<PipelineDocument, TopologyError> {
  Ok(serde_json::from_str(json)?)
}

/// Loads a pipeline document from `path`.
#[instrument(level = "trace", skip(path), fields(path = %path.display()))]
pub fn load_document(path: &Path) -> Result<PipelineDocument, TopologyError> {
  let bytes = std::fs::read(path)?;
  Ok(serde_json::from_slice(&bytes)?)
}

/// Renders a graph as JSON.
pub fn render_graph(graph: &TopologyGraph, pretty: bool) -> Result<String, TopologyError> {
  let json = if pretty {
    serde_json::to_string_pretty(graph)?
  } else {
    serde_json::to_string(graph)?
  };
  Ok(json)
}

/// Writes a graph to `path` as JSON, creating the parent directory if needed.
#[instrument(level = "trace", skip(path, graph), fields(path = %path.display()))]
pub fn write_graph(path: &Path, graph: &TopologyGraph, pretty: bool) -> Result<(), TopologyError> {
  let json = render_graph(graph, pretty)?;
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  std::fs::write(path, json)?;
  Ok(())
}
