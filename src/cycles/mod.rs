//! # Cycle Finding Module
//!
//! Two structurally different ways of finding cycles in an undirected
//! [`Graph`](crate::graph::Graph):
//!
//! - **PermutationCycleFinder**: walks every ordering of the vertex set and
//!   records every contiguous run that closes into a cycle. Factorial time;
//!   serves as the slow oracle.
//! - **DfsCycleFinder**: depth-first search. `exists_cycle_count` reports
//!   how many connected components contain a cycle; `find_all` enumerates
//!   every distinct simple cycle with the same semantics as the permutation
//!   oracle.
//!
//! Enumerated cycles are canonical: a [`Cycle`] is the sorted set of the
//! vertices it visits, so the same cycle found from a different start,
//! rotation or direction collapses into one entry of a [`CycleSet`].
//!
//! ## Example
//!
//! ```
//! use cycle_census::cycles::{Cycle, CycleFinder, DfsCycleFinder, PermutationCycleFinder};
//! use cycle_census::graph::Graph;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)])?;
//!
//! let mut dfs = DfsCycleFinder::new();
//! let mut oracle = PermutationCycleFinder::new();
//!
//! let cycles = dfs.find_all(&graph);
//! assert_eq!(cycles, oracle.find_all(&graph));
//! assert!(cycles.contains(&Cycle::new([2, 1, 0])?));
//! assert_eq!(dfs.exists_cycle_count(&graph), 1);
//! # Ok(())
//! # }
//! ```

mod dfs;
mod permutation;

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

pub use dfs::DfsCycleFinder;
pub use permutation::PermutationCycleFinder;
use serde::Serialize;

use crate::error::CensusError;
use crate::graph::Graph;

/// A simple cycle in canonical form: its vertex set, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle {
    vertices: Vec<usize>,
}

/// Distinct canonical cycles, ordered for deterministic output.
pub type CycleSet = BTreeSet<Cycle>;

impl Cycle {
    /// Canonicalise a vertex collection. Order and repetition are ignored;
    /// fewer than 3 distinct vertices is an error.
    pub fn new(vertices: impl IntoIterator<Item = usize>) -> Result<Self, CensusError> {
        let mut vertices: Vec<usize> = vertices.into_iter().collect();
        vertices.sort_unstable();
        vertices.dedup();
        if vertices.len() < 3 {
            return Err(CensusError::DegenerateCycle {
                distinct: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.vertices.binary_search(&vertex).is_ok()
    }
}

// `Vec<usize>` and `[usize]` order identically, which keeps lookups by
// sorted slice consistent with the set order.
impl Borrow<[usize]> for Cycle {
    fn borrow(&self) -> &[usize] {
        &self.vertices
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "}}")
    }
}

/// A finder that enumerates every distinct simple cycle of a graph.
///
/// Finders own their scratch buffers, so a single value can be reused across
/// runs; every run starts from an empty result set.
pub trait CycleFinder {
    /// Short name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Enumerate the distinct simple cycles of `graph`.
    fn find_all(&mut self, graph: &Graph) -> CycleSet;
}

/// Insert the canonical form of a closed `path` into `cycles`.
///
/// The path is sorted into `scratch` first, so rediscovering a known cycle
/// costs no allocation. Returns whether the cycle was new.
pub(crate) fn insert_canonical(
    cycles: &mut CycleSet,
    path: &[usize],
    scratch: &mut Vec<usize>,
) -> bool {
    debug_assert!(path.len() >= 3, "a closed path needs at least 3 vertices");
    scratch.clear();
    scratch.extend_from_slice(path);
    scratch.sort_unstable();
    if cycles.contains(scratch.as_slice()) {
        return false;
    }
    cycles.insert(Cycle {
        vertices: scratch.clone(),
    })
}
