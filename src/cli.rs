use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{CycleDisplayArgs, FormatArgs, GraphArgs, MismatchArgs};
use crate::constants::harness::{
    DEFAULT_COUNT_VERTICES, DEFAULT_PERMUTATION_LIMIT, DEFAULT_TRIALS,
    DEFAULT_VERIFY_MAX_VERTICES,
};

#[derive(Parser)]
#[command(
    name = "cycle-census",
    about = "Count and time cycle detection on random undirected graphs",
    long_about = "cycle-census generates seeded random undirected graphs and finds their cycles \
                  two ways: an exhaustive permutation search used as an oracle, and depth-first \
                  search. It times both against each other, cross-checks their results, and \
                  counts cyclic components on graphs far too large to enumerate.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time the permutation oracle against both DFS operations
    ///
    /// Generates one graph per size and reports how long each finder takes
    /// on it, together with the number of cycles each one found.
    #[command(
        long_about = "Generate one random graph per configured vertex count and time the \
                      permutation search, the DFS enumeration and the DFS existence check on \
                      it. The permutation search is factorial in the vertex count and is only \
                      run up to --permutation-limit vertices. Sizes can come from the command \
                      line or from a TOML plan file; flags override the plan."
    )]
    Compare {
        /// Vertex counts to compare (comma separated)
        #[arg(
            long,
            value_delimiter = ',',
            value_name = "N,N,...",
            env = "CYCLE_CENSUS_SIZES"
        )]
        sizes: Vec<usize>,

        /// TOML plan file with sizes, graph shape and limits
        #[arg(long, value_name = "FILE", env = "CYCLE_CENSUS_PLAN")]
        plan: Option<PathBuf>,

        /// Largest vertex count the permutation search is run on
        #[arg(long, env = "CYCLE_CENSUS_PERMUTATION_LIMIT")]
        permutation_limit: Option<usize>,

        /// Largest vertex count the DFS enumeration is run on
        #[arg(long, env = "CYCLE_CENSUS_ENUMERATE_LIMIT")]
        enumerate_limit: Option<usize>,

        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        mismatch: MismatchArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Cross-check the finders on many small random graphs
    ///
    /// Runs both enumerations and the existence check on every trial graph
    /// in parallel and reports each seed where they disagree.
    #[command(
        long_about = "Generate many small random graphs, each from its own seed, and check that \
                      the DFS enumeration returns exactly the permutation oracle's cycles, that \
                      the existence count agrees with the graph's forest structure, and that no \
                      cycles are reported on graphs with fewer than three vertices. Trials run \
                      in parallel."
    )]
    Verify {
        /// Number of random graphs to check
        #[arg(long, default_value_t = DEFAULT_TRIALS, env = "CYCLE_CENSUS_TRIALS")]
        trials: usize,

        /// Largest vertex count of a trial graph
        #[arg(
            long,
            default_value_t = DEFAULT_VERIFY_MAX_VERTICES,
            env = "CYCLE_CENSUS_MAX_VERTICES"
        )]
        max_vertices: usize,

        /// Edge probability of the trial graphs
        #[arg(long, env = "CYCLE_CENSUS_PROBABILITY")]
        probability: Option<f64>,

        /// Largest --max-vertices accepted, since every trial runs the
        /// permutation search
        #[arg(
            long,
            default_value_t = DEFAULT_PERMUTATION_LIMIT,
            env = "CYCLE_CENSUS_PERMUTATION_LIMIT"
        )]
        permutation_limit: usize,

        /// Seed of the first trial; trial i uses seed + i
        #[arg(long, env = "CYCLE_CENSUS_SEED")]
        seed: Option<u64>,

        #[command(flatten)]
        mismatch: MismatchArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Count cyclic components of a single random graph
    ///
    /// The existence check always runs; the enumerations are opt-in since
    /// they are exponential.
    #[command(
        long_about = "Generate one random graph and count its connected components that contain \
                      a cycle with a linear-time DFS. Optionally enumerate every simple cycle \
                      with DFS (--enumerate) or with the permutation search (--permutation, \
                      which also counts Hamiltonian cycles and is refused above the permutation \
                      limit)."
    )]
    Count {
        /// Number of vertices
        #[arg(
            long,
            default_value_t = DEFAULT_COUNT_VERTICES,
            env = "CYCLE_CENSUS_VERTICES"
        )]
        vertices: usize,

        /// Also enumerate every simple cycle with DFS
        #[arg(long, env = "CYCLE_CENSUS_ENUMERATE")]
        enumerate: bool,

        /// Also run the permutation search and count Hamiltonian cycles
        #[arg(long, env = "CYCLE_CENSUS_PERMUTATION")]
        permutation: bool,

        /// Largest vertex count the permutation search is run on
        #[arg(long, env = "CYCLE_CENSUS_PERMUTATION_LIMIT")]
        permutation_limit: Option<usize>,

        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        cycle_display: CycleDisplayArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::graph::Storage;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "cycle-census",
            "compare",
            "--sizes",
            "5,6,7",
            "--probability",
            "0.3",
            "--storage",
            "matrix",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Compare {
                sizes,
                graph,
                format,
                ..
            } => {
                assert_eq!(sizes, vec![5, 6, 7]);
                assert_eq!(graph.probability, Some(0.3));
                assert_eq!(graph.edges, None);
                assert_eq!(graph.storage, Some(Storage::Matrix));
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_edges_conflict_with_probability() {
        let result = Cli::try_parse_from([
            "cycle-census",
            "count",
            "--edges",
            "10",
            "--probability",
            "0.5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_defaults() {
        let cli = Cli::try_parse_from(["cycle-census", "verify"]).unwrap();
        match cli.command {
            Commands::Verify {
                trials,
                max_vertices,
                permutation_limit,
                mismatch,
                ..
            } => {
                assert_eq!(trials, DEFAULT_TRIALS);
                assert_eq!(max_vertices, DEFAULT_VERIFY_MAX_VERTICES);
                assert_eq!(permutation_limit, DEFAULT_PERMUTATION_LIMIT);
                assert!(!mismatch.error_on_mismatch);
            }
            _ => panic!("expected verify"),
        }
    }
}
