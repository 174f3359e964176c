//! Compare command implementation

use miette::{Result, WrapErr};
use tracing::info;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, time_seed};
use crate::config::CompareConfig;
use crate::constants::harness::{DEFAULT_EDGES, DEFAULT_PERMUTATION_LIMIT, DEFAULT_SIZES};
use crate::error::CensusError;
use crate::graph::EdgeSpec;
use crate::plan::PlanFile;

impl FromCommand for CompareConfig {
    fn from_command(command: Commands) -> Result<Self, CensusError> {
        match command {
            Commands::Compare {
                sizes,
                plan,
                permutation_limit,
                enumerate_limit,
                graph,
                mismatch,
                format,
            } => {
                let file = match &plan {
                    Some(path) => {
                        info!(path = %path.display(), "loading comparison plan");
                        PlanFile::parse_file(path)?
                    }
                    None => PlanFile::default(),
                };

                let sizes = if sizes.is_empty() {
                    file.sizes.clone().unwrap_or_else(|| DEFAULT_SIZES.to_vec())
                } else {
                    sizes
                };
                let edges = match graph.edge_spec() {
                    Some(spec) => spec,
                    None => file
                        .edge_spec()?
                        .unwrap_or(EdgeSpec::Count(DEFAULT_EDGES)),
                };

                CompareConfig::builder()
                    .with_sizes(sizes)
                    .with_edges(edges)
                    .with_seed(graph.seed.or(file.seed).unwrap_or_else(time_seed))
                    .with_permutation_limit(
                        permutation_limit
                            .or(file.permutation_limit)
                            .unwrap_or(DEFAULT_PERMUTATION_LIMIT),
                    )
                    .with_enumerate_limit(enumerate_limit.or(file.enumerate_limit))
                    .with_storage(graph.storage.or(file.storage))
                    .with_format(format.format)
                    .with_error_on_mismatch(mismatch.error_on_mismatch)
                    .build()
            }
            _ => Err(CensusError::ConfigurationError {
                message: "Invalid command type for CompareConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CompareConfig);

/// Execute the compare command for timing the finders against each other
pub fn execute_compare_command(command: Commands) -> Result<()> {
    let config = CompareConfig::from_command(command)
        .wrap_err("Failed to parse compare command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::compare::CompareExecutor;
    CompareExecutor::execute(config)
}
