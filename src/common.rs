//! Common functionality shared across commands

use clap::Args;

use crate::graph::{EdgeSpec, Storage};

/// Graph shape arguments shared by commands that generate graphs
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Exact number of edges per generated graph
    #[arg(long, conflicts_with = "probability", env = "CYCLE_CENSUS_EDGES")]
    pub edges: Option<usize>,

    /// Probability with which each vertex pair is joined
    #[arg(long, env = "CYCLE_CENSUS_PROBABILITY")]
    pub probability: Option<f64>,

    /// Seed for the random graphs (a time-based seed is used and reported if
    /// omitted)
    #[arg(long, env = "CYCLE_CENSUS_SEED")]
    pub seed: Option<u64>,

    /// Force an adjacency storage instead of picking one by vertex count
    #[arg(long, value_enum, env = "CYCLE_CENSUS_STORAGE")]
    pub storage: Option<Storage>,
}

impl GraphArgs {
    /// The edge specification the flags ask for, if any.
    pub fn edge_spec(&self) -> Option<EdgeSpec> {
        match (self.edges, self.probability) {
            (Some(edges), _) => Some(EdgeSpec::Count(edges)),
            (None, Some(p)) => Some(EdgeSpec::Probability(p)),
            (None, None) => None,
        }
    }
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "CYCLE_CENSUS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone, Default)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "CYCLE_CENSUS_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

/// Exit-status arguments for commands that compare finders
#[derive(Args, Debug, Clone, Default)]
pub struct MismatchArgs {
    /// Exit with error code if the finders disagree anywhere
    #[arg(long, env = "CYCLE_CENSUS_ERROR_ON_MISMATCH")]
    pub error_on_mismatch: bool,
}

/// A seed derived from the wall clock, for runs that were not given one.
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::CensusError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::CensusError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::CensusError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro to generate a config builder: an `Option` field and a `with_*`
/// setter per config field. `ConfigBuilder::build` is written by hand.
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident { $($field:ident : $ty:ty => $setter:ident),* $(,)? }) => {
        #[derive(Debug, Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

/// Take a builder field, or fail with a configuration error naming it.
pub(crate) fn required<T>(value: Option<T>, field: &str) -> Result<T, crate::error::CensusError> {
    value.ok_or_else(|| crate::error::CensusError::ConfigurationError {
        message: format!("{field} is required"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_args_edge_spec() {
        let mut args = GraphArgs::default();
        assert_eq!(args.edge_spec(), None);

        args.probability = Some(0.5);
        assert_eq!(args.edge_spec(), Some(EdgeSpec::Probability(0.5)));

        args.edges = Some(7);
        args.probability = None;
        assert_eq!(args.edge_spec(), Some(EdgeSpec::Count(7)));
    }

    #[test]
    fn test_required_names_missing_field() {
        assert_eq!(required(Some(3), "seed").unwrap(), 3);

        let err = required::<u64>(None, "seed").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: seed is required");
    }

    #[test]
    fn test_time_seeds_vary() {
        let a = time_seed();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert_ne!(a, time_seed());
    }
}
