//! TOML plan files for the `compare` command.
//!
//! ```toml
//! sizes = [5, 6, 7, 8, 10, 12]
//! edges = 10            # or: probability = 0.4
//! seed = 42
//! permutation_limit = 10
//! enumerate_limit = 14
//! storage = "matrix"
//! ```
//!
//! Every field is optional; command-line flags override whatever the plan
//! sets.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::error::{CensusError, PlanParseError};
use crate::graph::{EdgeSpec, Storage};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanFile {
    pub sizes: Option<Vec<usize>>,
    pub edges: Option<usize>,
    pub probability: Option<f64>,
    pub seed: Option<u64>,
    pub permutation_limit: Option<usize>,
    pub enumerate_limit: Option<usize>,
    pub storage: Option<Storage>,
}

impl PlanFile {
    pub fn parse_file(path: &Path) -> Result<Self, CensusError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| CensusError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    /// Parse plan text, attributing errors to `name`.
    pub fn parse_str(name: &str, content: &str) -> Result<Self, CensusError> {
        let plan: PlanFile = toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            CensusError::PlanParse(Box::new(PlanParseError {
                file: name.to_string(),
                source_code: NamedSource::new(name, content.to_string()),
                span,
                source: e,
            }))
        })?;

        plan.edge_spec()?;
        Ok(plan)
    }

    /// The graph shape the plan asks for, if it names one.
    pub fn edge_spec(&self) -> Result<Option<EdgeSpec>, CensusError> {
        match (self.edges, self.probability) {
            (Some(_), Some(_)) => Err(CensusError::ConfigurationError {
                message: "A plan sets either `edges` or `probability`, not both".to_string(),
            }),
            (Some(edges), None) => Ok(Some(EdgeSpec::Count(edges))),
            (None, Some(p)) => Ok(Some(EdgeSpec::Probability(p))),
            (None, None) => Ok(None),
        }
    }
}
