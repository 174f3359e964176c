//! Count command configuration

use crate::cli::OutputFormat;
use crate::common::{ConfigBuilder, required};
use crate::error::CensusError;
use crate::graph::{EdgeSpec, Storage};
use crate::harness::CountPlan;

/// Configuration for the count command
#[derive(Debug, Clone)]
pub struct CountConfig {
    pub vertices: usize,
    pub edges: EdgeSpec,
    pub seed: u64,
    /// Run the DFS enumeration as well as the existence check
    pub enumerate: bool,
    /// Run the permutation search and Hamiltonian count
    pub permutation: bool,
    pub permutation_limit: usize,
    pub storage: Option<Storage>,
    pub format: OutputFormat,
    /// Maximum number of enumerated cycles to list (None = all)
    pub max_cycles: Option<usize>,
}

impl CountConfig {
    pub fn builder() -> CountConfigBuilder {
        CountConfigBuilder::new()
    }

    pub fn plan(&self) -> CountPlan {
        CountPlan {
            vertices: self.vertices,
            edges: self.edges,
            seed: self.seed,
            enumerate: self.enumerate,
            permutation: self.permutation,
            permutation_limit: self.permutation_limit,
            storage: self.storage,
        }
    }
}

crate::impl_builder!(CountConfigBuilder {
    vertices: usize => with_vertices,
    edges: EdgeSpec => with_edges,
    seed: u64 => with_seed,
    enumerate: bool => with_enumerate,
    permutation: bool => with_permutation,
    permutation_limit: usize => with_permutation_limit,
    storage: Option<Storage> => with_storage,
    format: OutputFormat => with_format,
    max_cycles: Option<usize> => with_max_cycles,
});

impl ConfigBuilder for CountConfigBuilder {
    type Config = CountConfig;

    fn build(self) -> Result<Self::Config, CensusError> {
        let vertices = required(self.vertices, "vertices")?;
        let permutation = self.permutation.unwrap_or(false);
        let permutation_limit = required(self.permutation_limit, "permutation_limit")?;
        if permutation && vertices > permutation_limit {
            return Err(CensusError::ConfigurationError {
                message: format!(
                    "--permutation on {vertices} vertices exceeds the limit of \
                     {permutation_limit}; raise --permutation-limit to force it"
                ),
            });
        }

        Ok(CountConfig {
            vertices,
            edges: required(self.edges, "edges")?,
            seed: required(self.seed, "seed")?,
            enumerate: self.enumerate.unwrap_or(false),
            permutation,
            permutation_limit,
            storage: self.storage.flatten(),
            format: required(self.format, "format")?,
            max_cycles: self.max_cycles.flatten(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(vertices: usize) -> CountConfigBuilder {
        CountConfig::builder()
            .with_vertices(vertices)
            .with_edges(EdgeSpec::Probability(0.4))
            .with_seed(1)
            .with_permutation_limit(10)
            .with_format(OutputFormat::Human)
    }

    #[test]
    fn test_defaults_to_existence_only() {
        let config = builder(10_000).build().unwrap();
        assert!(!config.enumerate);
        assert!(!config.permutation);
        assert_eq!(config.plan().vertices, 10_000);
    }

    #[test]
    fn test_permutation_refused_above_limit() {
        let err = builder(11).with_permutation(true).build().unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
        assert!(builder(10).with_permutation(true).build().is_ok());
    }
}
