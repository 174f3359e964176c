//! # Cycle Census - Count and Time Cycle Detection on Random Graphs
//!
//! Cycle Census generates seeded random undirected graphs and finds their
//! cycles two ways: an exhaustive search over vertex permutations that serves
//! as a slow but obviously complete oracle, and depth-first search. It times
//! the two against each other, cross-checks their results, and counts cyclic
//! components on graphs far too large to enumerate.
//!
//! ## Main Components
//!
//! - **Graph**: Undirected simple graph with list or bit-matrix adjacency, and
//!   a seeded random generator (fixed edge count or edge probability)
//! - **Cycles**: The permutation oracle and the DFS finder (existence count per
//!   component, and full simple-cycle enumeration)
//! - **Harness**: Timing comparison over graph sizes, parallel verification,
//!   and single-graph counts
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Counting Cycles on One Graph
//!
//! ```
//! use cycle_census::cycles::{DfsCycleFinder, PermutationCycleFinder};
//! use cycle_census::graph::{EdgeSpec, RandomGraphGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! // Same seed, same graph
//! let graph = RandomGraphGenerator::new().generate_seeded(7, 8, EdgeSpec::Count(10))?;
//! assert_eq!(graph.edge_count(), 10);
//!
//! let mut dfs = DfsCycleFinder::new();
//! let cyclic_components = dfs.exists_cycle_count(&graph);
//! let cycles = dfs.find_all(&graph);
//!
//! // Eight vertices and ten edges cannot form a forest
//! assert!(cyclic_components >= 1);
//! assert_eq!(cycles, PermutationCycleFinder::new().find_all(&graph));
//!
//! for cycle in &cycles {
//!     println!("{cycle}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Timing the Finders
//!
//! ```
//! use cycle_census::graph::EdgeSpec;
//! use cycle_census::harness::{ComparisonHarness, ComparisonPlan};
//! use cycle_census::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let plan = ComparisonPlan {
//!     sizes: vec![5, 6, 7],
//!     edges: EdgeSpec::Count(8),
//!     seed: 42,
//!     permutation_limit: 7,
//!     enumerate_limit: None,
//!     storage: None,
//! };
//!
//! let report = ComparisonHarness::new().run(&plan, None)?;
//! assert_eq!(report.rows.len(), 3);
//! assert_eq!(report.mismatches().count(), 0);
//!
//! // Human-readable table for the console
//! println!("{}", HumanReportGenerator::default().generate_report(&report)?);
//!
//! // JSON for programmatic processing
//! let json = JsonReportGenerator::new().generate_report(&report)?;
//! assert!(json.contains("\"rows\""));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Cross-Checking on Many Graphs
//!
//! ```no_run
//! use cycle_census::harness::{VerificationPlan, run_verification};
//!
//! # fn main() -> miette::Result<()> {
//! let plan = VerificationPlan {
//!     trials: 10_000,
//!     max_vertices: 8,
//!     probability: 0.4,
//!     seed: 0,
//! };
//!
//! // Trials run in parallel on the rayon pool
//! let report = run_verification(&plan, None)?;
//! for failure in &report.failures {
//!     println!("seed {}: {:?}", failure.seed, failure.problems);
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod plan;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod cycles;
pub mod error;
pub mod executors;
pub mod graph;
pub mod harness;
pub mod reports;

pub use plan::PlanFile;
pub use progress::ProgressReporter;

/// Install the tracing subscriber: filter from `CYCLE_CENSUS_LOG`, JSON lines
/// when `CYCLE_CENSUS_LOG_FORMAT=json`, always on stderr.
pub fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::{EnvFilter, fmt};

    use crate::constants::logging::{DEBUG_FILTER, DEFAULT_FILTER, FILTER_ENV, FORMAT_ENV};

    let filter = EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if std::env::var("DEBUG").is_ok() {
            DEBUG_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let format = std::env::var(FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
