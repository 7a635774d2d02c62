//! Tests for `NodeId`.

use super::{Direction, Genre, NodeId};

#[test]
fn step_key() {
  assert_eq!(NodeId::step("a").key(), "step/a");
}

#[test]
fn step_scoped_keys() {
  let cron = NodeId::Cron {
    step: "a".to_string(),
    schedule: "@hourly".to_string(),
  };
  assert_eq!(cron.key(), "cron/step/a/sources/@hourly");

  let db = NodeId::Db {
    step: "a".to_string(),
    direction: Direction::Sources,
    name: "orders".to_string(),
  };
  assert_eq!(db.key(), "db/step/a/sources/orders");

  let log = NodeId::Log {
    step: "a".to_string(),
    name: "out".to_string(),
  };
  assert_eq!(log.key(), "log/step/a/sinks/out");

  let unknown = NodeId::Unknown {
    step: "b".to_string(),
    direction: Direction::Sinks,
    name: "x".to_string(),
  };
  assert_eq!(unknown.key(), "unknown/step/b/sinks/x");
}

#[test]
fn shared_keys() {
  let kafka = NodeId::Kafka {
    cluster: "default".to_string(),
    topic: "t".to_string(),
  };
  assert_eq!(kafka.key(), "kafka/default/t");
  assert!(kafka.is_shared());

  let s3 = NodeId::S3 {
    bucket: "b1".to_string(),
  };
  assert_eq!(s3.key(), "s3/b1");
  assert!(s3.is_shared());

  let http = NodeId::Http {
    url: "http://svc/sources/in".to_string(),
  };
  assert_eq!(http.key(), "http/http://svc/sources/in");
}

#[test]
fn db_ids_differ_per_step() {
  let a = NodeId::Db {
    step: "a".to_string(),
    direction: Direction::Sources,
    name: "orders".to_string(),
  };
  let b = NodeId::Db {
    step: "b".to_string(),
    direction: Direction::Sources,
    name: "orders".to_string(),
  };
  assert_ne!(a.key(), b.key());
  assert!(!a.is_shared());
}

#[test]
fn connector_genres() {
  assert_eq!(NodeId::step("a").connector_genre(), None);
  let stan = NodeId::Stan {
    cluster: "c".to_string(),
    subject: "s".to_string(),
  };
  assert_eq!(stan.connector_genre(), Some(Genre::Stan));
}

#[test]
fn into_string() {
  let s: String = NodeId::step("x").into();
  assert_eq!(s, "step/x");
}
