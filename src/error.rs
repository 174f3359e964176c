use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid comparison plan in '{file}'")]
#[diagnostic(
    code(cycle_census::plan_parse_error),
    help("Check the TOML syntax and field names near the highlighted position")
)]
pub struct PlanParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("problem here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum CensusError {
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    #[diagnostic(
        code(cycle_census::invalid_vertex),
        help("Vertex ids must lie in [0, vertex_count)")
    )]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Self-loop on vertex {vertex} rejected")]
    #[diagnostic(
        code(cycle_census::self_loop),
        help("Graphs are simple: an edge must join two distinct vertices")
    )]
    SelfLoopRejected { vertex: usize },

    #[error(
        "Cannot place {requested} edges in a simple graph with {vertex_count} vertices (maximum \
         {max_edges})"
    )]
    #[diagnostic(
        code(cycle_census::unsatisfiable_edge_count),
        help("Lower the edge count or raise the vertex count")
    )]
    UnsatisfiableEdgeCount {
        requested: usize,
        vertex_count: usize,
        max_edges: usize,
    },

    #[error("Edge probability {probability} is outside [0, 1]")]
    #[diagnostic(
        code(cycle_census::invalid_probability),
        help("Pass a probability between 0.0 and 1.0 inclusive")
    )]
    InvalidProbability { probability: f64 },

    #[error("A cycle needs at least 3 distinct vertices, got {distinct}")]
    #[diagnostic(code(cycle_census::degenerate_cycle))]
    DegenerateCycle { distinct: usize },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(cycle_census::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    PlanParse(Box<PlanParseError>),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_census::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_census::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_census::config_error),
        help("Check your command arguments and plan file")
    )]
    ConfigurationError { message: String },
}
