//! Random graph generation with a target edge count or edge probability.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::types::{Graph, Storage};
use crate::error::CensusError;

/// How many edges a generated graph receives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSpec {
    /// Exactly this many distinct edges, placed by rejection sampling.
    Count(usize),
    /// Every unordered pair independently with this probability.
    Probability(f64),
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeSpec::Count(edges) => write!(f, "{edges} edges"),
            EdgeSpec::Probability(p) => write!(f, "p = {p}"),
        }
    }
}

/// Builds random simple graphs from an explicitly seeded source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGraphGenerator {
    storage: Option<Storage>,
}

impl RandomGraphGenerator {
    pub fn new() -> Self {
        Self { storage: None }
    }

    /// Force a storage strategy instead of the vertex-count default.
    pub fn with_storage(mut self, storage: Option<Storage>) -> Self {
        self.storage = storage;
        self
    }

    /// Generate a graph on `vertex_count` vertices drawing from `rng`.
    ///
    /// Invalid requests fail before any randomness is consumed.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        vertex_count: usize,
        spec: EdgeSpec,
    ) -> Result<Graph, CensusError> {
        let mut graph = match self.storage {
            Some(storage) => Graph::with_storage(vertex_count, storage),
            None => Graph::new(vertex_count),
        };

        match spec {
            EdgeSpec::Count(edges) => fill_to_edge_count(&mut graph, rng, edges)?,
            EdgeSpec::Probability(p) => fill_with_probability(&mut graph, rng, p)?,
        }

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            storage = %graph.storage(),
            "generated random graph"
        );
        Ok(graph)
    }

    /// Same as [`RandomGraphGenerator::generate`] with a fresh [`StdRng`]
    /// seeded from `seed`.
    pub fn generate_seeded(
        &self,
        seed: u64,
        vertex_count: usize,
        spec: EdgeSpec,
    ) -> Result<Graph, CensusError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(&mut rng, vertex_count, spec)
    }
}

/// Generate a graph with exactly `edges` distinct edges.
pub fn generate_with_edge_count<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    edges: usize,
) -> Result<Graph, CensusError> {
    RandomGraphGenerator::new().generate(rng, vertex_count, EdgeSpec::Count(edges))
}

/// Generate a graph where each pair is joined with probability `p`.
pub fn generate_with_probability<R: Rng + ?Sized>(
    rng: &mut R,
    vertex_count: usize,
    p: f64,
) -> Result<Graph, CensusError> {
    RandomGraphGenerator::new().generate(rng, vertex_count, EdgeSpec::Probability(p))
}

fn fill_to_edge_count<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    edges: usize,
) -> Result<(), CensusError> {
    let vertex_count = graph.vertex_count();
    let max_edges = Graph::max_edges(vertex_count);
    if edges > max_edges {
        return Err(CensusError::UnsatisfiableEdgeCount {
            requested: edges,
            vertex_count,
            max_edges,
        });
    }

    while graph.edge_count() < edges {
        let u = rng.gen_range(0..vertex_count);
        let v = rng.gen_range(0..vertex_count);
        if u != v {
            // Both ids are in range and distinct, so this only reports
            // whether the pair was new.
            graph.add_edge(u, v)?;
        }
    }
    Ok(())
}

fn fill_with_probability<R: Rng + ?Sized>(
    graph: &mut Graph,
    rng: &mut R,
    p: f64,
) -> Result<(), CensusError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(CensusError::InvalidProbability { probability: p });
    }

    let vertex_count = graph.vertex_count();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(p) {
                graph.add_edge(i, j)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_edge_count_mode_is_exact() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = generate_with_edge_count(&mut rng, 8, 10).unwrap();

        assert_eq!(graph.vertex_count(), 8);
        assert_eq!(graph.edge_count(), 10);
        assert_eq!(graph.edges().count(), 10);
        assert!(graph.edges().all(|(u, v)| u != v));
    }

    #[test]
    fn test_edge_count_mode_can_fill_complete_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_with_edge_count(&mut rng, 5, 10).unwrap();

        assert_eq!(graph.edge_count(), Graph::max_edges(5));
    }

    #[test]
    fn test_unsatisfiable_edge_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_with_edge_count(&mut rng, 4, 7).unwrap_err();

        assert!(matches!(
            err,
            CensusError::UnsatisfiableEdgeCount {
                requested: 7,
                vertex_count: 4,
                max_edges: 6
            }
        ));
    }

    #[test]
    fn test_zero_edges_on_tiny_graphs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_with_edge_count(&mut rng, 0, 0).unwrap().edge_count(), 0);
        assert_eq!(generate_with_edge_count(&mut rng, 1, 0).unwrap().edge_count(), 0);
        assert!(generate_with_edge_count(&mut rng, 1, 1).is_err());
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = generate_with_probability(&mut rng, 9, 0.0).unwrap();
        let complete = generate_with_probability(&mut rng, 9, 1.0).unwrap();

        assert_eq!(empty.edge_count(), 0);
        assert_eq!(complete.edge_count(), Graph::max_edges(9));
    }

    #[test]
    fn test_invalid_probability() {
        let mut rng = StdRng::seed_from_u64(3);
        for p in [-0.1, 1.5, f64::NAN] {
            let err = generate_with_probability(&mut rng, 4, p).unwrap_err();
            assert!(matches!(err, CensusError::InvalidProbability { .. }));
        }
    }

    #[test]
    fn test_same_seed_same_graph() {
        let generator = RandomGraphGenerator::new();
        let a = generator.generate_seeded(99, 12, EdgeSpec::Count(20)).unwrap();
        let b = generator.generate_seeded(99, 12, EdgeSpec::Count(20)).unwrap();

        let mut edges_a: Vec<_> = a.edges().collect();
        let mut edges_b: Vec<_> = b.edges().collect();
        edges_a.sort_unstable();
        edges_b.sort_unstable();
        assert_eq!(edges_a, edges_b);
    }

    #[test]
    fn test_forced_storage() {
        let generator = RandomGraphGenerator::new().with_storage(Some(Storage::Matrix));
        let graph = generator
            .generate_seeded(5, 6, EdgeSpec::Probability(0.5))
            .unwrap();

        assert_eq!(graph.storage(), Storage::Matrix);
    }
}
