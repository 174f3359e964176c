use tracing::{debug, instrument};

use super::{CycleFinder, CycleSet, insert_canonical};
use crate::graph::Graph;

/// Exhaustive cycle search over every ordering of the vertex set.
///
/// For each permutation and each start index, the finder extends a path
/// along the permutation while consecutive vertices stay adjacent, and
/// records the path whenever it has more than two vertices and closes back
/// onto its first vertex. Every simple cycle is a contiguous run of some
/// permutation, so the result is complete.
///
/// Runs in `O(n! · n²)`. Keep `n` small.
#[derive(Debug, Default)]
pub struct PermutationCycleFinder {
    order: Vec<usize>,
    path: Vec<usize>,
    scratch: Vec<usize>,
}

impl PermutationCycleFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerate every distinct simple cycle of `graph`.
    #[instrument(
        level = "debug",
        name = "permutation_find_all",
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count())
    )]
    pub fn find_all(&mut self, graph: &Graph) -> CycleSet {
        let mut cycles = CycleSet::new();
        let vertex_count = graph.vertex_count();
        if vertex_count < 3 {
            return cycles;
        }

        self.order.clear();
        self.order.extend(0..vertex_count);

        let mut permutations: u64 = 0;
        loop {
            permutations += 1;
            for start in 0..vertex_count {
                let first = self.order[start];
                let mut last = first;
                self.path.clear();
                self.path.push(first);

                for &next in &self.order[start + 1..] {
                    if !graph.adjacent(last, next) {
                        break;
                    }
                    self.path.push(next);
                    last = next;

                    if self.path.len() > 2 && graph.adjacent(last, first) {
                        insert_canonical(&mut cycles, &self.path, &mut self.scratch);
                    }
                }
            }

            if !next_permutation(&mut self.order) {
                break;
            }
        }

        debug!(permutations, cycles = cycles.len(), "permutation search complete");
        cycles
    }

    /// Count the vertex orderings that close into a Hamiltonian cycle: every
    /// consecutive pair and the last-to-first pair adjacent.
    ///
    /// Each Hamiltonian cycle is counted once per rotation and direction,
    /// `2n` times in total.
    #[instrument(
        level = "debug",
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count())
    )]
    pub fn hamiltonian_orderings(&mut self, graph: &Graph) -> u64 {
        let vertex_count = graph.vertex_count();
        if vertex_count < 3 {
            return 0;
        }

        self.order.clear();
        self.order.extend(0..vertex_count);

        let mut closed = 0;
        loop {
            let is_path = self
                .order
                .windows(2)
                .all(|pair| graph.adjacent(pair[0], pair[1]));
            if is_path && graph.adjacent(self.order[vertex_count - 1], self.order[0]) {
                closed += 1;
            }

            if !next_permutation(&mut self.order) {
                break;
            }
        }

        debug!(closed, "hamiltonian ordering count complete");
        closed
    }

    /// Number of distinct Hamiltonian cycles of `graph`.
    pub fn hamiltonian_cycles(&mut self, graph: &Graph) -> u64 {
        let orderings = self.hamiltonian_orderings(graph);
        if orderings == 0 {
            return 0;
        }
        orderings / (2 * graph.vertex_count() as u64)
    }
}

impl CycleFinder for PermutationCycleFinder {
    fn name(&self) -> &'static str {
        "permutation"
    }

    fn find_all(&mut self, graph: &Graph) -> CycleSet {
        PermutationCycleFinder::find_all(self, graph)
    }
}

/// Advance `order` to the next lexicographic permutation.
///
/// Returns `false` and leaves `order` sorted ascending once the last
/// permutation has been passed.
fn next_permutation(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    let mut pivot = order.len() - 1;
    while pivot > 0 && order[pivot - 1] >= order[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        order.reverse();
        return false;
    }

    let mut successor = order.len() - 1;
    while order[successor] <= order[pivot - 1] {
        successor -= 1;
    }
    order.swap(pivot - 1, successor);
    order[pivot..].reverse();
    true
}
