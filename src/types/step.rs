//! Pipeline step: static spec plus optional live status.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{ConnectorStatus, Sink, Source, StepKind};

/// Phase reported by a step whose replicas are processing messages.
pub const PHASE_RUNNING: &str = "Running";

static EMPTY_STATUS: ConnectorStatus = ConnectorStatus {
  pending: None,
  metrics: BTreeMap::new(),
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cat {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Code {
  pub runtime: String,
  pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Container {
  pub image: String,
  pub command: Vec<String>,
  pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dedupe {
  pub uid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expand {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Filter {
  pub expression: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flatten {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Git {
  pub url: String,
  pub branch: String,
  pub path: String,
  pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
  pub key: String,
  pub format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Map {
  pub expression: String,
}

/// Static definition of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepSpec {
  pub name: String,
  pub cat: Option<Cat>,
  pub code: Option<Code>,
  pub container: Option<Container>,
  pub dedupe: Option<Dedupe>,
  pub expand: Option<Expand>,
  pub filter: Option<Filter>,
  pub flatten: Option<Flatten>,
  pub git: Option<Git>,
  pub group: Option<Group>,
  pub map: Option<Map>,
  pub sources: Vec<Source>,
  pub sinks: Vec<Sink>,
  /// Desired replica count.
  pub replicas: u32,
}

impl StepSpec {
  /// Resolves the primary kind. Checked in the order cat, code, container, dedupe,
  /// expand, filter, git, flatten, group, map; `git` deliberately precedes `flatten`.
  pub fn kind(&self) -> StepKind {
    if self.cat.is_some() {
      StepKind::Cat
    } else if self.code.is_some() {
      StepKind::Code
    } else if self.container.is_some() {
      StepKind::Container
    } else if self.dedupe.is_some() {
      StepKind::Dedupe
    } else if self.expand.is_some() {
      StepKind::Expand
    } else if self.filter.is_some() {
      StepKind::Filter
    } else if self.git.is_some() {
      StepKind::Git
    } else if self.flatten.is_some() {
      StepKind::Flatten
    } else if self.group.is_some() {
      StepKind::Group
    } else if self.map.is_some() {
      StepKind::Map
    } else {
      StepKind::Default
    }
  }
}

/// Live status of a step.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepStatus {
  pub phase: String,
  pub message: String,
  /// Current replica count.
  pub replicas: u32,
  pub source_statuses: BTreeMap<String, ConnectorStatus>,
  pub sink_statuses: BTreeMap<String, ConnectorStatus>,
}

/// One step of a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Step {
  pub spec: StepSpec,
  pub status: Option<StepStatus>,
}

impl Step {
  pub fn name(&self) -> &str {
    &self.spec.name
  }

  /// Current replica count; 0 when no status has been reported.
  pub fn replicas(&self) -> u32 {
    self.status.as_ref().map_or(0, |s| s.replicas)
  }

  /// Current phase; empty when no status has been reported.
  pub fn phase(&self) -> &str {
    self.status.as_ref().map_or("", |s| s.phase.as_str())
  }

  pub fn is_running(&self) -> bool {
    self.phase() == PHASE_RUNNING
  }

  /// Status of the named source, or an empty status.
  pub fn source_status(&self, name: &str) -> &ConnectorStatus {
    self
      .status
      .as_ref()
      .and_then(|s| s.source_statuses.get(name))
      .unwrap_or(&EMPTY_STATUS)
  }

  /// Status of the named sink, or an empty status.
  pub fn sink_status(&self, name: &str) -> &ConnectorStatus {
    self
      .status
      .as_ref()
      .and_then(|s| s.sink_statuses.get(name))
      .unwrap_or(&EMPTY_STATUS)
  }
}
