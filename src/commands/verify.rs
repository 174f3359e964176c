//! Verify command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand, time_seed};
use crate::config::VerifyConfig;
use crate::constants::harness::DEFAULT_PROBABILITY;
use crate::error::CensusError;

impl FromCommand for VerifyConfig {
    fn from_command(command: Commands) -> Result<Self, CensusError> {
        match command {
            Commands::Verify {
                trials,
                max_vertices,
                probability,
                permutation_limit,
                seed,
                mismatch,
                format,
            } => VerifyConfig::builder()
                .with_trials(trials)
                .with_max_vertices(max_vertices)
                .with_probability(probability.unwrap_or(DEFAULT_PROBABILITY))
                .with_permutation_limit(permutation_limit)
                .with_seed(seed.unwrap_or_else(time_seed))
                .with_format(format.format)
                .with_error_on_mismatch(mismatch.error_on_mismatch)
                .build(),
            _ => Err(CensusError::ConfigurationError {
                message: "Invalid command type for VerifyConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(VerifyConfig);

/// Execute the verify command for cross-checking the finders
pub fn execute_verify_command(command: Commands) -> Result<()> {
    let config = VerifyConfig::from_command(command)
        .wrap_err("Failed to parse verify command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::verify::VerifyExecutor;
    VerifyExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;

    fn parse(args: &[&str]) -> Commands {
        let mut argv = vec!["cycle-census", "verify"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_large_max_vertices_refused_by_default() {
        let err = VerifyConfig::try_from(parse(&["--max-vertices", "40", "--seed", "1"]))
            .unwrap_err();

        assert!(matches!(err, CensusError::ConfigurationError { .. }));
    }

    #[test]
    fn test_permutation_limit_flag_raises_the_cap() {
        let config = VerifyConfig::try_from(parse(&[
            "--max-vertices",
            "14",
            "--permutation-limit",
            "14",
            "--seed",
            "1",
        ]))
        .unwrap();

        assert_eq!(config.max_vertices, 14);
        assert_eq!(config.permutation_limit, 14);
        assert_eq!(config.probability, DEFAULT_PROBABILITY);
    }
}
