//! Compare command configuration

use crate::cli::OutputFormat;
use crate::common::{ConfigBuilder, required};
use crate::error::CensusError;
use crate::graph::{EdgeSpec, Storage};
use crate::harness::ComparisonPlan;

/// Configuration for the compare command
///
/// Every value has already been resolved from flags, environment, plan file
/// and defaults, in that order of precedence.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Vertex counts to generate, one graph each
    pub sizes: Vec<usize>,
    /// Shape of every generated graph
    pub edges: EdgeSpec,
    /// Seed of the first size
    pub seed: u64,
    /// Largest vertex count the permutation search runs on
    pub permutation_limit: usize,
    /// Largest vertex count the DFS enumeration runs on (None = all)
    pub enumerate_limit: Option<usize>,
    /// Forced adjacency storage (None = by vertex count)
    pub storage: Option<Storage>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if the enumerations disagree
    pub error_on_mismatch: bool,
}

impl CompareConfig {
    pub fn builder() -> CompareConfigBuilder {
        CompareConfigBuilder::new()
    }

    pub fn plan(&self) -> ComparisonPlan {
        ComparisonPlan {
            sizes: self.sizes.clone(),
            edges: self.edges,
            seed: self.seed,
            permutation_limit: self.permutation_limit,
            enumerate_limit: self.enumerate_limit,
            storage: self.storage,
        }
    }
}

crate::impl_builder!(CompareConfigBuilder {
    sizes: Vec<usize> => with_sizes,
    edges: EdgeSpec => with_edges,
    seed: u64 => with_seed,
    permutation_limit: usize => with_permutation_limit,
    enumerate_limit: Option<usize> => with_enumerate_limit,
    storage: Option<Storage> => with_storage,
    format: OutputFormat => with_format,
    error_on_mismatch: bool => with_error_on_mismatch,
});

impl ConfigBuilder for CompareConfigBuilder {
    type Config = CompareConfig;

    fn build(self) -> Result<Self::Config, CensusError> {
        let sizes = required(self.sizes, "sizes")?;
        if sizes.is_empty() {
            return Err(CensusError::ConfigurationError {
                message: "At least one size is required".to_string(),
            });
        }

        let edges = required(self.edges, "edges")?;
        if let EdgeSpec::Probability(probability) = edges {
            if !(0.0..=1.0).contains(&probability) {
                return Err(CensusError::InvalidProbability { probability });
            }
        }

        Ok(CompareConfig {
            sizes,
            edges,
            seed: required(self.seed, "seed")?,
            permutation_limit: required(self.permutation_limit, "permutation_limit")?,
            enumerate_limit: self.enumerate_limit.flatten(),
            storage: self.storage.flatten(),
            format: required(self.format, "format")?,
            error_on_mismatch: self.error_on_mismatch.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn builder() -> CompareConfigBuilder {
        CompareConfig::builder()
            .with_sizes(vec![5, 6])
            .with_edges(EdgeSpec::Count(6))
            .with_seed(3)
            .with_permutation_limit(8)
            .with_format(OutputFormat::Human)
    }

    #[test]
    fn test_build_fills_optional_fields() {
        let config = builder().build().unwrap();

        assert_eq!(config.enumerate_limit, None);
        assert_eq!(config.storage, None);
        assert!(!config.error_on_mismatch);

        let plan = config.plan();
        assert_eq!(plan.sizes, vec![5, 6]);
        assert_eq!(plan.seed, 3);
    }

    #[test]
    fn test_missing_seed_is_an_error() {
        let err = CompareConfig::builder()
            .with_sizes(vec![5])
            .with_edges(EdgeSpec::Count(6))
            .with_permutation_limit(8)
            .with_format(OutputFormat::Human)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("seed"));
    }

    #[test]
    fn test_invalid_probability_rejected() {
        let err = builder()
            .with_edges(EdgeSpec::Probability(-0.1))
            .build()
            .unwrap_err();
        assert!(matches!(err, CensusError::InvalidProbability { .. }));

        let err = builder()
            .with_edges(EdgeSpec::Probability(f64::NAN))
            .build()
            .unwrap_err();
        assert!(matches!(err, CensusError::InvalidProbability { .. }));
    }

    #[test]
    fn test_empty_sizes_rejected() {
        assert!(builder().with_sizes(vec![]).build().is_err());
    }
}
