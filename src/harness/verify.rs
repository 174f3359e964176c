//! Parallel cross-check of the permutation oracle against the DFS finders.

use indicatif::ParallelProgressIterator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::cycles::{DfsCycleFinder, PermutationCycleFinder};
use crate::error::CensusError;
use crate::graph::{EdgeSpec, RandomGraphGenerator};
use crate::progress::ProgressReporter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationPlan {
    pub trials: usize,
    /// Each trial draws its vertex count from `0..=max_vertices`.
    pub max_vertices: usize,
    pub probability: f64,
    /// Trial `i` is generated from `seed + i`.
    pub seed: u64,
}

/// What one trial observed, and which properties it broke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialOutcome {
    pub seed: u64,
    pub vertices: usize,
    pub edges: usize,
    pub permutation_cycles: usize,
    pub dfs_cycles: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub is_forest: bool,
    pub problems: Vec<String>,
}

impl TrialOutcome {
    pub fn passed(&self) -> bool {
        self.problems.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub plan: VerificationPlan,
    pub passed: usize,
    /// Failing trials, ordered by seed.
    pub failures: Vec<TrialOutcome>,
}

impl VerificationReport {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every trial of `plan`, spreading trials over the rayon pool.
///
/// Each trial owns its generator, graph and finders; nothing is shared
/// between threads.
#[instrument(skip_all, fields(trials = plan.trials, max_vertices = plan.max_vertices, seed = plan.seed))]
pub fn run_verification(
    plan: &VerificationPlan,
    progress: Option<&mut ProgressReporter>,
) -> Result<VerificationReport, CensusError> {
    if !(0.0..=1.0).contains(&plan.probability) {
        return Err(CensusError::InvalidProbability {
            probability: plan.probability,
        });
    }

    let trials = (0..plan.trials).into_par_iter();
    let outcomes: Result<Vec<TrialOutcome>, CensusError> = match progress {
        Some(p) => {
            let bar = p.start_verification(plan.trials);
            let outcomes = trials
                .progress_with(bar)
                .map(|index| run_trial(plan, plan.seed.wrapping_add(index as u64)))
                .collect();
            p.finish_verification();
            outcomes
        }
        None => trials
            .map(|index| run_trial(plan, plan.seed.wrapping_add(index as u64)))
            .collect(),
    };

    let mut failures: Vec<TrialOutcome> = outcomes?
        .into_iter()
        .filter(|outcome| !outcome.passed())
        .collect();
    failures.sort_by_key(|outcome| outcome.seed);

    for failure in &failures {
        warn!(seed = failure.seed, problems = ?failure.problems, "verification trial failed");
    }
    let passed = plan.trials - failures.len();
    info!(passed, failed = failures.len(), "verification complete");

    Ok(VerificationReport {
        plan: plan.clone(),
        passed,
        failures,
    })
}

/// Generate one graph from `seed` and check every cross-finder property on
/// it.
pub fn run_trial(plan: &VerificationPlan, seed: u64) -> Result<TrialOutcome, CensusError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let vertices = rng.gen_range(0..=plan.max_vertices);
    let graph = RandomGraphGenerator::new().generate(
        &mut rng,
        vertices,
        EdgeSpec::Probability(plan.probability),
    )?;

    let oracle = PermutationCycleFinder::new().find_all(&graph);
    let mut dfs = DfsCycleFinder::new();
    let enumerated = dfs.find_all(&graph);
    let cyclic_components = dfs.exists_cycle_count(&graph);
    let components = graph.component_count();
    let is_forest = graph.is_forest();

    let mut problems = Vec::new();
    if oracle != enumerated {
        let missing = oracle.difference(&enumerated).count();
        let extra = enumerated.difference(&oracle).count();
        problems.push(format!(
            "dfs enumeration differs from permutation oracle ({missing} missing, {extra} extra)"
        ));
    }
    if cyclic_components > components {
        problems.push(format!(
            "{cyclic_components} cyclic components reported for {components} components"
        ));
    }
    if (cyclic_components == 0) != is_forest {
        problems.push(format!(
            "existence count {cyclic_components} contradicts forest = {is_forest}"
        ));
    }
    if (cyclic_components == 0) != enumerated.is_empty() {
        problems.push(format!(
            "existence count {cyclic_components} contradicts {} enumerated cycles",
            enumerated.len()
        ));
    }
    if vertices < 3 && (!oracle.is_empty() || cyclic_components != 0) {
        problems.push(format!("cycles reported on a {vertices}-vertex graph"));
    }

    Ok(TrialOutcome {
        seed,
        vertices,
        edges: graph.edge_count(),
        permutation_cycles: oracle.len(),
        dfs_cycles: enumerated.len(),
        components,
        cyclic_components,
        is_forest,
        problems,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(trials: usize) -> VerificationPlan {
        VerificationPlan {
            trials,
            max_vertices: 6,
            probability: 0.5,
            seed: 1_000,
        }
    }

    #[test]
    fn test_all_trials_pass() {
        let report = run_verification(&plan(40), None).unwrap();

        assert!(report.all_passed(), "failures: {:?}", report.failures);
        assert_eq!(report.passed, 40);
    }

    #[test]
    fn test_trial_is_reproducible() {
        let plan = plan(1);
        let a = run_trial(&plan, 77).unwrap();
        let b = run_trial(&plan, 77).unwrap();

        assert_eq!(a, b);
        assert!(a.passed());
        assert_eq!(a.permutation_cycles, a.dfs_cycles);
    }

    #[test]
    fn test_zero_trials() {
        let report = run_verification(&plan(0), None).unwrap();
        assert_eq!(report.passed, 0);
        assert!(report.all_passed());
    }

    #[test]
    fn test_invalid_probability_rejected_up_front() {
        let mut plan = plan(3);
        plan.probability = -1.0;
        assert!(matches!(
            run_verification(&plan, None),
            Err(CensusError::InvalidProbability { .. })
        ));
    }
}
