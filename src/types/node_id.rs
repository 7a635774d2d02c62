//! Structured node identity.
//!
//! Shared external resources (Kafka topics, STAN subjects, HTTP endpoints, S3
//! buckets) are identified by the resource alone, so every step that references
//! one lands on the same node. Everything else is scoped to the owning step.
//! The `Display` form is the canonical key stored in the graph.

use std::fmt;

use super::Genre;

/// Which side of a step a connector sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
  Sources,
  Sinks,
}

impl Direction {
  pub fn as_str(&self) -> &'static str {
    match self {
      Direction::Sources => "sources",
      Direction::Sinks => "sinks",
    }
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
  Step { name: String },
  Cron { step: String, schedule: String },
  Db { step: String, direction: Direction, name: String },
  Kafka { cluster: String, topic: String },
  Stan { cluster: String, subject: String },
  Http { url: String },
  S3 { bucket: String },
  Log { step: String, name: String },
  Unknown { step: String, direction: Direction, name: String },
}

impl NodeId {
  pub fn step(name: impl Into<String>) -> Self {
    NodeId::Step { name: name.into() }
  }

  /// Genre of the node this id names. Step nodes take their genre from the step kind,
  /// which the id does not carry, so they report `None`.
  pub fn connector_genre(&self) -> Option<Genre> {
    match self {
      NodeId::Step { .. } => None,
      NodeId::Cron { .. } => Some(Genre::Cron),
      NodeId::Db { .. } => Some(Genre::Db),
      NodeId::Kafka { .. } => Some(Genre::Kafka),
      NodeId::Stan { .. } => Some(Genre::Stan),
      NodeId::Http { .. } => Some(Genre::Http),
      NodeId::S3 { .. } => Some(Genre::S3),
      NodeId::Log { .. } => Some(Genre::Log),
      NodeId::Unknown { .. } => Some(Genre::Unknown),
    }
  }

  /// True when the id does not depend on the step that referenced it.
  pub fn is_shared(&self) -> bool {
    matches!(
      self,
      NodeId::Kafka { .. } | NodeId::Stan { .. } | NodeId::Http { .. } | NodeId::S3 { .. }
    )
  }

  /// Canonical string key.
  pub fn key(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for NodeId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NodeId::Step { name } => write!(f, "step/{name}"),
      NodeId::Cron { step, schedule } => write!(f, "cron/step/{step}/sources/{schedule}"),
      NodeId::Db {
        step,
        direction,
        name,
      } => write!(f, "db/step/{step}/{direction}/{name}"),
      NodeId::Kafka { cluster, topic } => write!(f, "kafka/{cluster}/{topic}"),
      NodeId::Stan { cluster, subject } => write!(f, "stan/{cluster}/{subject}"),
      NodeId::Http { url } => write!(f, "http/{url}"),
      NodeId::S3 { bucket } => write!(f, "s3/{bucket}"),
      NodeId::Log { step, name } => write!(f, "log/step/{step}/sinks/{name}"),
      NodeId::Unknown {
        step,
        direction,
        name,
      } => write!(f, "unknown/step/{step}/{direction}/{name}"),
    }
  }
}

impl From<NodeId> for String {
  fn from(id: NodeId) -> Self {
    id.to_string()
  }
}
