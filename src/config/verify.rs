//! Verify command configuration

use crate::cli::OutputFormat;
use crate::common::{ConfigBuilder, required};
use crate::constants::harness::DEFAULT_PERMUTATION_LIMIT;
use crate::error::CensusError;
use crate::harness::VerificationPlan;

/// Configuration for the verify command
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Number of random graphs to check
    pub trials: usize,
    /// Largest vertex count of a trial graph
    pub max_vertices: usize,
    /// Edge probability of the trial graphs
    pub probability: f64,
    /// Largest vertex count the permutation search is run on
    pub permutation_limit: usize,
    /// Seed of the first trial
    pub seed: u64,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any trial fails
    pub error_on_mismatch: bool,
}

impl VerifyConfig {
    pub fn builder() -> VerifyConfigBuilder {
        VerifyConfigBuilder::new()
    }

    pub fn plan(&self) -> VerificationPlan {
        VerificationPlan {
            trials: self.trials,
            max_vertices: self.max_vertices,
            probability: self.probability,
            seed: self.seed,
        }
    }
}

crate::impl_builder!(VerifyConfigBuilder {
    trials: usize => with_trials,
    max_vertices: usize => with_max_vertices,
    probability: f64 => with_probability,
    permutation_limit: usize => with_permutation_limit,
    seed: u64 => with_seed,
    format: OutputFormat => with_format,
    error_on_mismatch: bool => with_error_on_mismatch,
});

impl ConfigBuilder for VerifyConfigBuilder {
    type Config = VerifyConfig;

    fn build(self) -> Result<Self::Config, CensusError> {
        let probability = required(self.probability, "probability")?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(CensusError::InvalidProbability { probability });
        }

        // Every trial runs the permutation search
        let max_vertices = required(self.max_vertices, "max_vertices")?;
        let permutation_limit = self.permutation_limit.unwrap_or(DEFAULT_PERMUTATION_LIMIT);
        if max_vertices > permutation_limit {
            return Err(CensusError::ConfigurationError {
                message: format!(
                    "--max-vertices {max_vertices} exceeds the permutation limit of \
                     {permutation_limit}; raise --permutation-limit to force it"
                ),
            });
        }

        Ok(VerifyConfig {
            trials: required(self.trials, "trials")?,
            max_vertices,
            probability,
            permutation_limit,
            seed: required(self.seed, "seed")?,
            format: required(self.format, "format")?,
            error_on_mismatch: self.error_on_mismatch.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_rejected() {
        let err = VerifyConfig::builder()
            .with_trials(1)
            .with_max_vertices(4)
            .with_probability(1.5)
            .with_seed(0)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert!(matches!(err, CensusError::InvalidProbability { .. }));
    }

    #[test]
    fn test_max_vertices_above_permutation_limit_rejected() {
        let err = VerifyConfig::builder()
            .with_trials(1)
            .with_max_vertices(40)
            .with_probability(0.5)
            .with_seed(1)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert!(matches!(err, CensusError::ConfigurationError { .. }));
        assert!(err.to_string().contains("permutation limit"));
    }

    #[test]
    fn test_raised_permutation_limit_allows_larger_trials() {
        let config = VerifyConfig::builder()
            .with_trials(1)
            .with_max_vertices(DEFAULT_PERMUTATION_LIMIT + 1)
            .with_permutation_limit(DEFAULT_PERMUTATION_LIMIT + 1)
            .with_probability(0.5)
            .with_seed(1)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert_eq!(config.max_vertices, DEFAULT_PERMUTATION_LIMIT + 1);
        assert_eq!(config.permutation_limit, DEFAULT_PERMUTATION_LIMIT + 1);
    }

    #[test]
    fn test_missing_trials() {
        let err = VerifyConfig::builder()
            .with_max_vertices(4)
            .with_probability(0.5)
            .with_seed(0)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert!(matches!(err, CensusError::ConfigurationError { .. }));
    }
}
