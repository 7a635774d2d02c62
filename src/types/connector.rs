//! Sources and sinks attached to a step, and the technology each one resolves to.
//!
//! A connector populates at most one technology field. When several are set the
//! first one in dispatch order wins (see [`Source::connector`] and [`Sink::connector`]).

use serde::Deserialize;

/// Cluster name fallback used when a Kafka/STAN connector names neither a cluster nor a URL.
pub const DEFAULT_CLUSTER: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cron {
  pub schedule: String,
  pub layout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Database {
  pub driver: String,
  pub data_source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Kafka {
  /// Named cluster configuration.
  pub name: String,
  pub url: String,
  pub topic: String,
}

impl Kafka {
  pub fn cluster_id(&self) -> &str {
    cluster_id(&self.name, &self.url)
  }
}

/// NATS streaming subject.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stan {
  pub name: String,
  pub url: String,
  pub subject: String,
}

impl Stan {
  pub fn cluster_id(&self) -> &str {
    cluster_id(&self.name, &self.url)
  }
}

/// HTTP endpoint served by the step itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpSource {
  /// Kubernetes service fronting the endpoint. Empty means `<pipeline>-<step>`.
  pub service_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpSink {
  pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct S3 {
  pub name: String,
  pub bucket: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Log {
  pub truncate: Option<u64>,
}

/// Inbound connector of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
  pub name: String,
  pub cron: Option<Cron>,
  pub db: Option<Database>,
  pub kafka: Option<Kafka>,
  pub stan: Option<Stan>,
  pub http: Option<HttpSource>,
  pub s3: Option<S3>,
}

/// Technology a [`Source`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceConnector<'a> {
  Cron(&'a Cron),
  Db(&'a Database),
  Kafka(&'a Kafka),
  Stan(&'a Stan),
  Http(&'a HttpSource),
  S3(&'a S3),
  Unknown,
}

impl Source {
  /// Resolves the technology in the order cron, db, kafka, stan, http, s3.
  pub fn connector(&self) -> SourceConnector<'_> {
    if let Some(x) = &self.cron {
      SourceConnector::Cron(x)
    } else if let Some(x) = &self.db {
      SourceConnector::Db(x)
    } else if let Some(x) = &self.kafka {
      SourceConnector::Kafka(x)
    } else if let Some(x) = &self.stan {
      SourceConnector::Stan(x)
    } else if let Some(x) = &self.http {
      SourceConnector::Http(x)
    } else if let Some(x) = &self.s3 {
      SourceConnector::S3(x)
    } else {
      SourceConnector::Unknown
    }
  }
}

/// Outbound connector of a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sink {
  pub name: String,
  pub db: Option<Database>,
  pub kafka: Option<Kafka>,
  pub log: Option<Log>,
  pub stan: Option<Stan>,
  pub http: Option<HttpSink>,
  pub s3: Option<S3>,
}

/// Technology a [`Sink`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkConnector<'a> {
  Db(&'a Database),
  Kafka(&'a Kafka),
  Log(&'a Log),
  Stan(&'a Stan),
  Http(&'a HttpSink),
  S3(&'a S3),
  Unknown,
}

impl Sink {
  /// Resolves the technology in the order db, kafka, log, stan, http, s3.
  pub fn connector(&self) -> SinkConnector<'_> {
    if let Some(x) = &self.db {
      SinkConnector::Db(x)
    } else if let Some(x) = &self.kafka {
      SinkConnector::Kafka(x)
    } else if let Some(x) = &self.log {
      SinkConnector::Log(x)
    } else if let Some(x) = &self.stan {
      SinkConnector::Stan(x)
    } else if let Some(x) = &self.http {
      SinkConnector::Http(x)
    } else if let Some(x) = &self.s3 {
      SinkConnector::S3(x)
    } else {
      SinkConnector::Unknown
    }
  }
}

/// First non-empty of `name`, `url`, else [`DEFAULT_CLUSTER`].
pub(crate) fn cluster_id<'a>(name: &'a str, url: &'a str) -> &'a str {
  if !name.is_empty() {
    name
  } else if !url.is_empty() {
    url
  } else {
    DEFAULT_CLUSTER
  }
}
