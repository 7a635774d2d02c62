//! Tests for `TopologyGraph`.

use super::{
  EdgeKey, Genre, GraphEdge, GraphFragment, GraphNode, Icon, NodeId, StepKind, TopologyGraph,
};

fn s3(bucket: &str) -> NodeId {
  NodeId::S3 {
    bucket: bucket.to_string(),
  }
}

#[test]
fn new_graph_is_empty() {
  let g = TopologyGraph::new();
  assert!(g.is_empty());
  assert_eq!(g.node_count(), 0);
  assert_eq!(g.edge_count(), 0);
}

#[test]
fn graph_node_takes_icon_from_genre() {
  let n = GraphNode::new(Genre::S3, "b1");
  assert_eq!(n.icon, Icon::Disk);
  assert!(n.class_names.is_empty());
  let n = GraphNode::new(Genre::Step(StepKind::Code), "a").with_class_names("Running");
  assert_eq!(n.icon, Icon::Code);
  assert_eq!(n.class_names, "Running");
}

#[test]
fn merge_inserts_nodes_and_edges() {
  let step = NodeId::step("a");
  let bucket = s3("b1");
  let mut g = TopologyGraph::new();
  g.merge(GraphFragment {
    nodes: vec![
      (step.clone(), GraphNode::new(Genre::Step(StepKind::Cat), "a")),
      (bucket.clone(), GraphNode::new(Genre::S3, "b1")),
    ],
    edges: vec![(EdgeKey::new(&step, &bucket), GraphEdge::default())],
  });
  assert_eq!(g.node_count(), 2);
  assert!(g.has_node("step/a"));
  assert!(g.has_node("s3/b1"));
  assert!(g.edge("step/a", "s3/b1").is_some());
  assert!(g.edge("s3/b1", "step/a").is_none());
}

#[test]
fn merge_is_last_writer_wins() {
  let bucket = s3("b1");
  let mut g = TopologyGraph::new();
  g.merge(GraphFragment {
    nodes: vec![(bucket.clone(), GraphNode::new(Genre::S3, "first"))],
    edges: vec![],
  });
  g.merge(GraphFragment {
    nodes: vec![(bucket.clone(), GraphNode::new(Genre::S3, "second"))],
    edges: vec![],
  });
  assert_eq!(g.node_count(), 1);
  assert_eq!(g.node("s3/b1").unwrap().label, "second");
}

#[test]
fn merge_same_node_twice_is_noop() {
  let bucket = s3("b1");
  let fragment = GraphFragment {
    nodes: vec![(bucket, GraphNode::new(Genre::S3, "b1"))],
    edges: vec![],
  };
  let mut once = TopologyGraph::new();
  once.merge(fragment.clone());
  let mut twice = once.clone();
  twice.merge(fragment);
  assert_eq!(once, twice);
}

#[test]
fn in_and_out_edges() {
  let a = NodeId::step("a");
  let b = NodeId::step("b");
  let bucket = s3("b1");
  let mut g = TopologyGraph::new();
  g.set_edge(EdgeKey::new(&a, &bucket), GraphEdge::default());
  g.set_edge(EdgeKey::new(&b, &bucket), GraphEdge::default());
  assert_eq!(g.in_edges("s3/b1").count(), 2);
  assert_eq!(g.out_edges("step/a").count(), 1);
  assert_eq!(g.out_edges("s3/b1").count(), 0);
}

#[test]
fn serializes_nodes_as_map_and_edges_as_list() {
  let a = NodeId::step("a");
  let bucket = s3("b1");
  let mut g = TopologyGraph::new();
  g.set_node(a.key(), GraphNode::new(Genre::Step(StepKind::Map), "a"));
  g.set_node(bucket.key(), GraphNode::new(Genre::S3, "b1"));
  g.set_edge(
    EdgeKey::new(&a, &bucket),
    GraphEdge {
      class_names: "flow".to_string(),
      label: "Δ2".to_string(),
    },
  );
  let v = serde_json::to_value(&g).unwrap();
  assert_eq!(v["nodes"]["step/a"]["genre"], "map");
  assert_eq!(v["nodes"]["step/a"]["icon"], "chevron-right");
  assert_eq!(v["nodes"]["s3/b1"]["classNames"], "");
  assert_eq!(
    v["edges"],
    serde_json::json!([{"v": "step/a", "w": "s3/b1", "classNames": "flow", "label": "Δ2"}])
  );
}
