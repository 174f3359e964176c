//! # Configuration Module
//!
//! This module provides configuration structures for all cycle-census
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **CompareConfig**: Configuration for the `compare` command that times
//!   the finders against each other
//! - **VerifyConfig**: Configuration for the `verify` command that
//!   cross-checks the finders
//! - **CountConfig**: Configuration for the `count` command on a single graph
//!
//! ## Example
//!
//! ```
//! use cycle_census::cli::OutputFormat;
//! use cycle_census::common::ConfigBuilder;
//! use cycle_census::config::VerifyConfig;
//!
//! // The builders are generated with the impl_builder! macro and provide
//! // with_* methods for each field
//! let config = VerifyConfig::builder()
//!     .with_trials(16)
//!     .with_max_vertices(6)
//!     .with_probability(0.5)
//!     .with_seed(7)
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_mismatch(true)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.plan().trials, 16);
//! ```

pub mod compare;
pub mod count;
pub mod verify;

pub use compare::CompareConfig;
pub use count::CountConfig;
pub use verify::VerifyConfig;
