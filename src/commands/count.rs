//! Count command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, time_seed};
use crate::config::CountConfig;
use crate::constants::harness::{DEFAULT_PERMUTATION_LIMIT, DEFAULT_PROBABILITY};
use crate::error::CensusError;
use crate::graph::EdgeSpec;

impl FromCommand for CountConfig {
    fn from_command(command: Commands) -> Result<Self, CensusError> {
        match command {
            Commands::Count {
                vertices,
                enumerate,
                permutation,
                permutation_limit,
                graph,
                format,
                cycle_display,
            } => CountConfig::builder()
                .with_vertices(vertices)
                .with_edges(
                    graph
                        .edge_spec()
                        .unwrap_or(EdgeSpec::Probability(DEFAULT_PROBABILITY)),
                )
                .with_seed(graph.seed.unwrap_or_else(time_seed))
                .with_enumerate(enumerate)
                .with_permutation(permutation)
                .with_permutation_limit(permutation_limit.unwrap_or(DEFAULT_PERMUTATION_LIMIT))
                .with_storage(graph.storage)
                .with_format(format.format)
                .with_max_cycles(cycle_display.max_cycles)
                .build(),
            _ => Err(CensusError::ConfigurationError {
                message: "Invalid command type for CountConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CountConfig);

/// Execute the count command on a single random graph
pub fn execute_count_command(command: Commands) -> Result<()> {
    let config = CountConfig::from_command(command)
        .wrap_err("Failed to parse count command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::count::CountExecutor;
    CountExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn test_wrong_command_rejected() {
        let command = Cli::try_parse_from(["cycle-census", "verify"]).unwrap().command;
        assert!(CountConfig::try_from(command).is_err());
    }

    #[test]
    fn test_probability_default() {
        let command = Cli::try_parse_from(["cycle-census", "count", "--vertices", "50", "--seed", "2"])
            .unwrap()
            .command;
        let config = CountConfig::try_from(command).unwrap();

        assert_eq!(config.edges, EdgeSpec::Probability(DEFAULT_PROBABILITY));
        assert_eq!(config.seed, 2);
    }
}
