//! CLI: Render the topology graph of a pipeline document as JSON.
//!
//! Usage: `render_topology [OPTIONS] <path-to-document>`
//! Example: render_topology --pretty tests/fixtures/fan_in.json
//!
//! The document is a JSON object `{"pipeline": {...}, "steps": [...]}`. The graph
//! goes to stdout unless an output file is given. Logs go to stderr.
//!
//! Set RUST_LOG=dataflow_topology=trace for TRACE-level span enter/exit and events.

use clap::Parser;
use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use dataflow_topology::document_io::{load_document, render_graph, write_graph};
use dataflow_topology::build;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Render the topology graph of a pipeline document as JSON.
#[derive(Parser, Debug)]
#[command(name = "render_topology")]
#[command(
  after_help = r#"Environment variables (override flags when set):
  TOPOLOGY_OUTPUT   File to write the graph JSON to instead of stdout.

Examples:
  render_topology pipeline.json
  render_topology --pretty --output graph.json pipeline.json"#
)]
struct Args {
  /// File to write the graph to. Overridden by TOPOLOGY_OUTPUT if set. Default: stdout
  #[arg(long, short, value_name = "FILE")]
  output: Option<PathBuf>,

  /// Pretty-print the JSON
  #[arg(long)]
  pretty: bool,

  /// Path to the pipeline document
  #[arg(value_name = "path-to-document")]
  document: PathBuf,
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .with_writer(io::stderr)
    .init();

  let args = Args::parse();
  let output = env::var("TOPOLOGY_OUTPUT")
    .ok()
    .map(PathBuf::from)
    .or_else(|| args.output.clone());
  info!(document = %args.document.display(), output = ?output, "render_topology starting");

  let doc = match load_document(&args.document) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error reading {}: {}", args.document.display(), e);
      process::exit(1);
    }
  };

  let graph = match build(&doc.pipeline, &doc.steps) {
    Ok(g) => g,
    Err(e) => {
      eprintln!("Error building topology: {}", e);
      process::exit(1);
    }
  };

  let result = match &output {
    Some(path) => write_graph(path, &graph, args.pretty),
    None => render_graph(&graph, args.pretty).map(|json| println!("{json}")),
  };
  if let Err(e) = result {
    eprintln!("Error writing graph: {}", e);
    process::exit(1);
  }
  info!(
    nodes = graph.node_count(),
    edges = graph.edge_count(),
    "graph rendered"
  );
}
