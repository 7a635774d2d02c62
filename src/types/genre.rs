//! Node genre and the symbolic icon it maps to.

use std::fmt;

use serde::{Serialize, Serializer};

use super::StepKind;

/// Symbolic icon name. Asset resolution happens in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
  ChevronRight,
  Code,
  Cube,
  Filter,
  Expand,
  Compress,
  GitLogo,
  ObjectGroup,
  ObjectUngroup,
  Clock,
  Database,
  Stream,
  Cloud,
  Disk,
  File,
  Square,
}

impl Icon {
  pub fn as_str(&self) -> &'static str {
    match self {
      Icon::ChevronRight => "chevron-right",
      Icon::Code => "code",
      Icon::Cube => "cube",
      Icon::Filter => "filter",
      Icon::Expand => "expand",
      Icon::Compress => "compress",
      Icon::GitLogo => "git-logo",
      Icon::ObjectGroup => "object-group",
      Icon::ObjectUngroup => "object-ungroup",
      Icon::Clock => "clock",
      Icon::Database => "database",
      Icon::Stream => "stream",
      Icon::Cloud => "cloud",
      Icon::Disk => "disk",
      Icon::File => "file",
      Icon::Square => "square",
    }
  }
}

impl fmt::Display for Icon {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Role of a node in the topology: a step kind or a connector technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
  Step(StepKind),
  Cron,
  Db,
  Kafka,
  Stan,
  Http,
  S3,
  Log,
  Unknown,
}

impl Genre {
  pub fn as_str(&self) -> &'static str {
    match self {
      Genre::Step(kind) => kind.as_str(),
      Genre::Cron => "cron",
      Genre::Db => "db",
      Genre::Kafka => "kafka",
      Genre::Stan => "stan",
      Genre::Http => "http",
      Genre::S3 => "s3",
      Genre::Log => "log",
      Genre::Unknown => "unknown",
    }
  }

  pub fn icon(&self) -> Icon {
    match self {
      Genre::Step(kind) => kind.icon(),
      Genre::Cron => Icon::Clock,
      Genre::Db => Icon::Database,
      Genre::Kafka | Genre::Stan => Icon::Stream,
      Genre::Http => Icon::Cloud,
      Genre::S3 => Icon::Disk,
      Genre::Log => Icon::File,
      Genre::Unknown => Icon::Square,
    }
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for Genre {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}
