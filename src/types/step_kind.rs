//! Primary kind of a step, resolved from which kind field its spec populates.

use std::fmt;

use super::Icon;

/// Primary kind of a step.
///
/// `Split` has an icon but no spec field, so [`StepSpec::kind`](super::StepSpec::kind)
/// never yields it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepKind {
  #[default]
  Default,
  Cat,
  Code,
  Container,
  Dedupe,
  Expand,
  Filter,
  Flatten,
  Git,
  Group,
  Map,
  Split,
}

impl StepKind {
  /// Tag used as the node genre. The default kind renders as an empty string.
  pub fn as_str(&self) -> &'static str {
    match self {
      StepKind::Default => "",
      StepKind::Cat => "cat",
      StepKind::Code => "code",
      StepKind::Container => "container",
      StepKind::Dedupe => "dedupe",
      StepKind::Expand => "expand",
      StepKind::Filter => "filter",
      StepKind::Flatten => "flatten",
      StepKind::Git => "git",
      StepKind::Group => "group",
      StepKind::Map => "map",
      StepKind::Split => "split",
    }
  }

  pub fn icon(&self) -> Icon {
    match self {
      StepKind::Cat | StepKind::Map => Icon::ChevronRight,
      StepKind::Code => Icon::Code,
      StepKind::Container => Icon::Cube,
      StepKind::Dedupe | StepKind::Filter => Icon::Filter,
      StepKind::Expand => Icon::Expand,
      StepKind::Flatten => Icon::Compress,
      StepKind::Git => Icon::GitLogo,
      StepKind::Group => Icon::ObjectGroup,
      StepKind::Split => Icon::ObjectUngroup,
      StepKind::Default => Icon::Square,
    }
  }
}

impl fmt::Display for StepKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
