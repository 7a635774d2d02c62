//! Graph snapshot handed to the layout/rendering stage.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};
use tracing::trace;

use super::{Genre, Icon, NodeId};

/// Class applied to edges of a running step.
pub const FLOW_CLASS: &str = "flow";

/// Attributes of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
  pub genre: Genre,
  pub label: String,
  pub icon: Icon,
  pub class_names: String,
}

impl GraphNode {
  /// Node with the icon of its genre and no classes.
  pub fn new(genre: Genre, label: impl Into<String>) -> Self {
    Self {
      genre,
      label: label.into(),
      icon: genre.icon(),
      class_names: String::new(),
    }
  }

  pub fn with_class_names(mut self, class_names: impl Into<String>) -> Self {
    self.class_names = class_names.into();
    self
  }
}

/// Attributes of an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
  pub class_names: String,
  pub label: String,
}

/// Ordered pair of node keys: `v` is upstream, `w` downstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
  pub v: String,
  pub w: String,
}

impl EdgeKey {
  pub fn new(v: &NodeId, w: &NodeId) -> Self {
    Self {
      v: v.key(),
      w: w.key(),
    }
  }
}

/// Nodes and edges produced for one step, before they are merged into the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphFragment {
  pub nodes: Vec<(NodeId, GraphNode)>,
  pub edges: Vec<(EdgeKey, GraphEdge)>,
}

/// Directed graph keyed by canonical node ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopologyGraph {
  nodes: BTreeMap<String, GraphNode>,
  #[serde(serialize_with = "serialize_edges")]
  edges: BTreeMap<EdgeKey, GraphEdge>,
}

impl TopologyGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or replaces a node. Returns the attributes it replaced.
  pub fn set_node(&mut self, id: impl Into<String>, node: GraphNode) -> Option<GraphNode> {
    self.nodes.insert(id.into(), node)
  }

  /// Inserts or replaces an edge. Returns the attributes it replaced.
  pub fn set_edge(&mut self, key: EdgeKey, edge: GraphEdge) -> Option<GraphEdge> {
    self.edges.insert(key, edge)
  }

  /// Merges a fragment. Later writes win for both nodes and edges.
  pub fn merge(&mut self, fragment: GraphFragment) {
    for (id, node) in fragment.nodes {
      let key = id.key();
      let replaced = self.nodes.get(&key).is_some_and(|previous| previous != &node);
      if replaced {
        trace!(node = %key, "node attributes replaced by later reference");
      }
      self.set_node(key, node);
    }
    for (key, edge) in fragment.edges {
      let replaced = self.edges.get(&key).is_some_and(|previous| previous != &edge);
      if replaced {
        trace!(v = %key.v, w = %key.w, "edge attributes replaced by later reference");
      }
      self.set_edge(key, edge);
    }
  }

  pub fn node(&self, id: &str) -> Option<&GraphNode> {
    self.nodes.get(id)
  }

  pub fn edge(&self, v: &str, w: &str) -> Option<&GraphEdge> {
    self.edges.get(&EdgeKey {
      v: v.to_string(),
      w: w.to_string(),
    })
  }

  pub fn has_node(&self, id: &str) -> bool {
    self.nodes.contains_key(id)
  }

  pub fn nodes(&self) -> impl Iterator<Item = (&str, &GraphNode)> {
    self.nodes.iter().map(|(k, n)| (k.as_str(), n))
  }

  pub fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &GraphEdge)> {
    self.edges.iter()
  }

  /// Edges whose downstream end is `id`.
  pub fn in_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a EdgeKey, &'a GraphEdge)> {
    self.edges.iter().filter(move |(k, _)| k.w == id)
  }

  /// Edges whose upstream end is `id`.
  pub fn out_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'a EdgeKey, &'a GraphEdge)> {
    self.edges.iter().filter(move |(k, _)| k.v == id)
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn edge_count(&self) -> usize {
    self.edges.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeEntry<'a> {
  v: &'a str,
  w: &'a str,
  class_names: &'a str,
  label: &'a str,
}

/// Edges serialize as a list because ordered pairs are not valid JSON object keys.
fn serialize_edges<S: Serializer>(
  edges: &BTreeMap<EdgeKey, GraphEdge>,
  serializer: S,
) -> Result<S::Ok, S::Error> {
  serializer.collect_seq(edges.iter().map(|(k, e)| EdgeEntry {
    v: &k.v,
    w: &k.w,
    class_names: &e.class_names,
    label: &e.label,
  }))
}
