//! One graph, counted every way that is affordable for its size.

use serde::Serialize;
use tracing::{info, instrument};

use super::{MethodTiming, timed};
use crate::cycles::{Cycle, DfsCycleFinder, PermutationCycleFinder};
use crate::error::CensusError;
use crate::graph::{EdgeSpec, RandomGraphGenerator, Storage};
use crate::progress::ProgressReporter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountPlan {
    pub vertices: usize,
    pub edges: EdgeSpec,
    pub seed: u64,
    /// Run the DFS enumeration and keep the cycle list.
    pub enumerate: bool,
    /// Run the permutation enumeration and the Hamiltonian count.
    pub permutation: bool,
    pub permutation_limit: usize,
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountReport {
    pub seed: u64,
    pub vertices: usize,
    pub edges: usize,
    pub storage: Storage,
    pub components: usize,
    pub is_forest: bool,
    pub dfs_existence: MethodTiming,
    pub dfs_enumeration: Option<MethodTiming>,
    pub permutation: Option<MethodTiming>,
    pub hamiltonian_cycles: Option<u64>,
    /// Enumerated cycles in canonical order, when an enumeration ran.
    pub cycles: Option<Vec<Cycle>>,
}

/// Generate the graph described by `plan` and run the requested finders on
/// it. The existence check always runs.
#[instrument(skip_all, fields(vertices = plan.vertices, edges = %plan.edges, seed = plan.seed))]
pub fn run_count(
    plan: &CountPlan,
    mut progress: Option<&mut ProgressReporter>,
) -> Result<CountReport, CensusError> {
    if plan.permutation && plan.vertices > plan.permutation_limit {
        return Err(CensusError::ConfigurationError {
            message: format!(
                "Permutation search on {} vertices exceeds the limit of {}",
                plan.vertices, plan.permutation_limit
            ),
        });
    }

    if let Some(p) = progress.as_mut() {
        p.count_step("Generating graph");
    }
    let graph = RandomGraphGenerator::new()
        .with_storage(plan.storage)
        .generate_seeded(plan.seed, plan.vertices, plan.edges)?;

    let mut dfs = DfsCycleFinder::new();
    if let Some(p) = progress.as_mut() {
        p.count_step("Checking components for cycles");
    }
    let (cyclic_components, elapsed) = timed(|| dfs.exists_cycle_count(&graph));
    let dfs_existence = MethodTiming::new(elapsed, cyclic_components);

    let mut cycles = None;
    let dfs_enumeration = if plan.enumerate {
        if let Some(p) = progress.as_mut() {
            p.count_step("Enumerating cycles (dfs)");
        }
        let (found, elapsed) = timed(|| dfs.find_all(&graph));
        let timing = MethodTiming::new(elapsed, found.len());
        cycles = Some(found.into_iter().collect());
        Some(timing)
    } else {
        None
    };

    let (permutation, hamiltonian_cycles) = if plan.permutation {
        if let Some(p) = progress.as_mut() {
            p.count_step("Enumerating cycles (permutation)");
        }
        let mut oracle = PermutationCycleFinder::new();
        let (found, elapsed) = timed(|| oracle.find_all(&graph));
        let timing = MethodTiming::new(elapsed, found.len());
        if cycles.is_none() {
            cycles = Some(found.into_iter().collect());
        }
        (Some(timing), Some(oracle.hamiltonian_cycles(&graph)))
    } else {
        (None, None)
    };

    if let Some(p) = progress.as_mut() {
        p.finish_count();
    }
    info!(cyclic_components, "count complete");

    Ok(CountReport {
        seed: plan.seed,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        storage: graph.storage(),
        components: graph.component_count(),
        is_forest: graph.is_forest(),
        dfs_existence,
        dfs_enumeration,
        permutation,
        hamiltonian_cycles,
        cycles,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan(vertices: usize, edges: EdgeSpec) -> CountPlan {
        CountPlan {
            vertices,
            edges,
            seed: 5,
            enumerate: false,
            permutation: false,
            permutation_limit: 8,
            storage: None,
        }
    }

    #[test]
    fn test_existence_only_by_default() {
        let report = run_count(&plan(50, EdgeSpec::Count(49)), None).unwrap();

        assert_eq!(report.vertices, 50);
        assert_eq!(report.edges, 49);
        assert!(report.dfs_enumeration.is_none());
        assert!(report.permutation.is_none());
        assert!(report.cycles.is_none());
        assert_eq!(report.is_forest, report.dfs_existence.cycles == 0);
    }

    #[test]
    fn test_both_enumerations_agree() {
        let mut plan = plan(6, EdgeSpec::Count(9));
        plan.enumerate = true;
        plan.permutation = true;
        let report = run_count(&plan, None).unwrap();

        let dfs = report.dfs_enumeration.unwrap();
        let oracle = report.permutation.unwrap();
        assert_eq!(dfs.cycles, oracle.cycles);
        assert_eq!(report.cycles.as_ref().map(Vec::len), Some(dfs.cycles));
        assert!(report.hamiltonian_cycles.is_some());
    }

    #[test]
    fn test_permutation_refused_above_limit() {
        let mut plan = plan(9, EdgeSpec::Count(10));
        plan.permutation = true;

        assert!(matches!(
            run_count(&plan, None),
            Err(CensusError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_unsatisfiable_edge_count_is_an_error() {
        assert!(matches!(
            run_count(&plan(4, EdgeSpec::Count(7)), None),
            Err(CensusError::UnsatisfiableEdgeCount { .. })
        ));
    }

    #[test]
    fn test_storage_override_is_reported() {
        let mut plan = plan(10, EdgeSpec::Probability(0.3));
        plan.storage = Some(Storage::Matrix);
        let report = run_count(&plan, None).unwrap();

        assert_eq!(report.storage, Storage::Matrix);
    }
}
