//! Pipeline document (only the metadata the topology needs).

use serde::Deserialize;

/// Object metadata of a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineMetadata {
  pub name: String,
  pub namespace: String,
}

/// A dataflow pipeline. Its steps are supplied separately to the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pipeline {
  pub metadata: PipelineMetadata,
}

impl Pipeline {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      metadata: PipelineMetadata {
        name: name.into(),
        namespace: String::new(),
      },
    }
  }

  pub fn name(&self) -> &str {
    &self.metadata.name
  }
}
