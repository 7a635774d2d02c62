//! Errors surfaced by topology construction and document I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError {
  /// An HTTP connector resolved to a URL that does not parse. The pipeline
  /// definition is malformed; the caller decides how to surface it.
  #[error("step '{step}' connector '{connector}': invalid HTTP URL '{url}': {source}")]
  InvalidHttpUrl {
    step: String,
    connector: String,
    url: String,
    #[source]
    source: url::ParseError,
  },

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid pipeline document JSON: {0}")]
  Json(#[from] serde_json::Error),
}
