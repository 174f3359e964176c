//! # Harness Module
//!
//! Drivers that build random graphs, run the cycle finders over them and
//! record what happened. Finder results are plain return values; the harness
//! measures wall time around each call.
//!
//! - **ComparisonHarness**: one graph per configured size, timing the
//!   permutation oracle against both DFS operations
//! - **verify**: parallel cross-check of the two enumerations over many
//!   seeded graphs
//! - **count**: one (possibly large) graph, existence check plus optional
//!   enumerations

pub mod count;
pub mod verify;

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::cycles::{DfsCycleFinder, PermutationCycleFinder};
use crate::error::CensusError;
use crate::graph::{EdgeSpec, RandomGraphGenerator, Storage};
use crate::progress::ProgressReporter;

pub use count::{CountPlan, CountReport, run_count};
pub use verify::{TrialOutcome, VerificationPlan, VerificationReport, run_verification};

/// Elapsed time and result size of one finder call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MethodTiming {
    pub seconds: f64,
    /// Distinct cycles for enumerations, cyclic components for the
    /// existence check.
    pub cycles: usize,
}

impl MethodTiming {
    fn new(elapsed: Duration, cycles: usize) -> Self {
        Self {
            seconds: elapsed.as_secs_f64(),
            cycles,
        }
    }
}

/// Run `f` and measure its wall time.
pub(crate) fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// The sizes and graph shape a comparison run covers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPlan {
    pub sizes: Vec<usize>,
    pub edges: EdgeSpec,
    /// Size `i` is generated from `seed + i`.
    pub seed: u64,
    /// Largest vertex count the permutation oracle is run on.
    pub permutation_limit: usize,
    /// Largest vertex count the DFS enumeration is run on (`None` = all).
    pub enumerate_limit: Option<usize>,
    pub storage: Option<Storage>,
}

/// Measurements for one configured size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRow {
    pub vertices: usize,
    pub seed: u64,
    /// Edge count of the generated graph, `None` when generation failed.
    pub edges: Option<usize>,
    pub permutation: Option<MethodTiming>,
    pub dfs_enumeration: Option<MethodTiming>,
    pub dfs_existence: Option<MethodTiming>,
    /// Whether both enumerations returned the same cycle set, when both ran.
    pub enumerations_agree: Option<bool>,
    /// Why the size produced no measurements.
    pub skipped: Option<String>,
}

impl TimingRow {
    fn skipped(vertices: usize, seed: u64, reason: String) -> Self {
        Self {
            vertices,
            seed,
            edges: None,
            permutation: None,
            dfs_enumeration: None,
            dfs_existence: None,
            enumerations_agree: None,
            skipped: Some(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub plan: ComparisonPlan,
    pub rows: Vec<TimingRow>,
}

impl ComparisonReport {
    /// Rows where the two enumerations disagreed.
    pub fn mismatches(&self) -> impl Iterator<Item = &TimingRow> {
        self.rows
            .iter()
            .filter(|row| row.enumerations_agree == Some(false))
    }
}

/// Times the permutation oracle against the DFS finders over a sequence of
/// graph sizes.
pub struct ComparisonHarness {
    generator: RandomGraphGenerator,
    permutation: PermutationCycleFinder,
    dfs: DfsCycleFinder,
}

impl Default for ComparisonHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonHarness {
    pub fn new() -> Self {
        Self {
            generator: RandomGraphGenerator::new(),
            permutation: PermutationCycleFinder::new(),
            dfs: DfsCycleFinder::new(),
        }
    }

    /// Run every size of `plan` in order.
    ///
    /// A size whose graph cannot be generated (too many edges requested) is
    /// recorded as a skipped row; an invalid probability fails the run.
    #[instrument(skip_all, fields(sizes = plan.sizes.len(), edges = %plan.edges, seed = plan.seed))]
    pub fn run(
        &mut self,
        plan: &ComparisonPlan,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<ComparisonReport, CensusError> {
        self.generator = RandomGraphGenerator::new().with_storage(plan.storage);
        let mut rows = Vec::with_capacity(plan.sizes.len());

        for (index, &vertices) in plan.sizes.iter().enumerate() {
            let seed = plan.seed.wrapping_add(index as u64);
            if let Some(p) = progress.as_mut() {
                p.comparison_size_started(vertices);
            }

            let row = self.run_size(plan, vertices, seed)?;
            if let Some(p) = progress.as_mut() {
                p.comparison_size_finished(&row);
            }
            rows.push(row);
        }

        info!(rows = rows.len(), "comparison complete");
        Ok(ComparisonReport {
            plan: plan.clone(),
            rows,
        })
    }

    fn run_size(
        &mut self,
        plan: &ComparisonPlan,
        vertices: usize,
        seed: u64,
    ) -> Result<TimingRow, CensusError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = match self.generator.generate(&mut rng, vertices, plan.edges) {
            Ok(graph) => graph,
            Err(err @ CensusError::UnsatisfiableEdgeCount { .. }) => {
                warn!(vertices, %err, "skipping size");
                return Ok(TimingRow::skipped(vertices, seed, err.to_string()));
            }
            Err(err) => return Err(err),
        };

        let permutation = if vertices <= plan.permutation_limit {
            let (cycles, elapsed) = timed(|| self.permutation.find_all(&graph));
            Some((cycles, elapsed))
        } else {
            warn!(
                vertices,
                limit = plan.permutation_limit,
                "permutation search skipped above limit"
            );
            None
        };

        let enumerate = plan.enumerate_limit.is_none_or(|limit| vertices <= limit);
        let dfs_enumeration = if enumerate {
            Some(timed(|| self.dfs.find_all(&graph)))
        } else {
            None
        };

        let (cyclic_components, existence_elapsed) =
            timed(|| self.dfs.exists_cycle_count(&graph));

        let enumerations_agree = match (&permutation, &dfs_enumeration) {
            (Some((oracle, _)), Some((dfs, _))) => Some(oracle == dfs),
            _ => None,
        };
        if enumerations_agree == Some(false) {
            warn!(vertices, seed, "permutation and dfs enumerations disagree");
        }

        Ok(TimingRow {
            vertices,
            seed,
            edges: Some(graph.edge_count()),
            permutation: permutation
                .map(|(cycles, elapsed)| MethodTiming::new(elapsed, cycles.len())),
            dfs_enumeration: dfs_enumeration
                .map(|(cycles, elapsed)| MethodTiming::new(elapsed, cycles.len())),
            dfs_existence: Some(MethodTiming::new(existence_elapsed, cyclic_components)),
            enumerations_agree,
            skipped: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(sizes: Vec<usize>, edges: EdgeSpec) -> ComparisonPlan {
        ComparisonPlan {
            sizes,
            edges,
            seed: 11,
            permutation_limit: 7,
            enumerate_limit: None,
            storage: None,
        }
    }

    #[test]
    fn test_one_row_per_size() {
        let plan = plan(vec![5, 6, 7], EdgeSpec::Count(8));
        let report = ComparisonHarness::new().run(&plan, None).unwrap();

        assert_eq!(report.rows.len(), 3);
        for (row, expected) in report.rows.iter().zip([5, 6, 7]) {
            assert_eq!(row.vertices, expected);
            assert_eq!(row.edges, Some(8));
            assert_eq!(row.enumerations_agree, Some(true));
            assert_eq!(
                row.permutation.map(|t| t.cycles),
                row.dfs_enumeration.map(|t| t.cycles)
            );
        }
        assert_eq!(report.mismatches().count(), 0);
    }

    #[test]
    fn test_rows_use_consecutive_seeds() {
        let plan = plan(vec![4, 4], EdgeSpec::Probability(0.5));
        let report = ComparisonHarness::new().run(&plan, None).unwrap();

        assert_eq!(report.rows[0].seed, 11);
        assert_eq!(report.rows[1].seed, 12);
    }

    #[test]
    fn test_permutation_skipped_above_limit() {
        let plan = plan(vec![9], EdgeSpec::Count(10));
        let report = ComparisonHarness::new().run(&plan, None).unwrap();
        let row = &report.rows[0];

        assert!(row.permutation.is_none());
        assert!(row.dfs_enumeration.is_some());
        assert!(row.dfs_existence.is_some());
        assert_eq!(row.enumerations_agree, None);
    }

    #[test]
    fn test_enumerate_limit_skips_dfs_enumeration() {
        let mut plan = plan(vec![6], EdgeSpec::Count(6));
        plan.enumerate_limit = Some(5);
        let report = ComparisonHarness::new().run(&plan, None).unwrap();

        assert!(report.rows[0].dfs_enumeration.is_none());
        assert!(report.rows[0].dfs_existence.is_some());
    }

    #[test]
    fn test_unsatisfiable_size_is_skipped_not_fatal() {
        let plan = plan(vec![4, 6], EdgeSpec::Count(10));
        let report = ComparisonHarness::new().run(&plan, None).unwrap();

        assert!(report.rows[0].skipped.is_some());
        assert_eq!(report.rows[0].edges, None);
        assert!(report.rows[1].skipped.is_none());
        assert_eq!(report.rows[1].edges, Some(10));
    }

    #[test]
    fn test_invalid_probability_fails_run() {
        let plan = plan(vec![4], EdgeSpec::Probability(2.0));
        assert!(ComparisonHarness::new().run(&plan, None).is_err());
    }
}
