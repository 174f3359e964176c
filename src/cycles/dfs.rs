use tracing::{debug, instrument};

use super::{CycleFinder, CycleSet, insert_canonical};
use crate::graph::{Graph, Neighbors};

/// Depth-first cycle finder with two independent operations.
///
/// - [`DfsCycleFinder::exists_cycle_count`]: one DFS per connected component
///   with parent tracking; a component counts once if any back-edge is seen.
/// - [`DfsCycleFinder::find_all`]: a DFS from every vertex that keeps the
///   current path and clears visited marks on backtrack, recording every
///   path that closes onto its start vertex.
///
/// Both traversals are iterative over an explicit frame stack, so deep
/// graphs cannot overflow the call stack. The visit buffers are owned by the
/// finder and reset at the start of every call.
#[derive(Debug, Default)]
pub struct DfsCycleFinder {
    visited: Vec<bool>,
    parent: Vec<Option<usize>>,
    path: Vec<usize>,
    scratch: Vec<usize>,
}

impl DfsCycleFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of connected components that contain at least one cycle.
    ///
    /// This is an existence signal per component, not a cycle count: a
    /// component with many independent cycles still contributes 1.
    #[instrument(
        level = "debug",
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count())
    )]
    pub fn exists_cycle_count(&mut self, graph: &Graph) -> usize {
        let vertex_count = graph.vertex_count();
        reset(&mut self.visited, vertex_count, false);
        reset(&mut self.parent, vertex_count, None);

        let mut frames: Vec<(usize, Neighbors<'_>)> = Vec::new();
        let mut cyclic_components = 0;
        let mut components = 0;

        for root in 0..vertex_count {
            if self.visited[root] {
                continue;
            }
            components += 1;

            // The whole component is traversed even after a back-edge is
            // found, so its vertices cannot seed another signal later.
            let mut has_cycle = false;
            self.visited[root] = true;
            frames.push((root, graph.neighbors_of(root)));

            while let Some((vertex, neighbors)) = frames.last_mut() {
                let vertex = *vertex;
                match neighbors.next() {
                    Some(next) if !self.visited[next] => {
                        self.visited[next] = true;
                        self.parent[next] = Some(vertex);
                        frames.push((next, graph.neighbors_of(next)));
                    }
                    Some(next) => {
                        // The tree edge back to the parent is not a cycle.
                        if self.parent[vertex] != Some(next) {
                            has_cycle = true;
                        }
                    }
                    None => {
                        frames.pop();
                    }
                }
            }

            if has_cycle {
                cyclic_components += 1;
            }
        }

        debug!(components, cyclic_components, "existence check complete");
        cyclic_components
    }

    /// Enumerate every distinct simple cycle of `graph`.
    ///
    /// Matches [`PermutationCycleFinder::find_all`](super::PermutationCycleFinder::find_all)
    /// exactly. Exponential on dense graphs, but prunes on adjacency instead
    /// of trying every ordering.
    #[instrument(
        level = "debug",
        name = "dfs_find_all",
        skip_all,
        fields(vertices = graph.vertex_count(), edges = graph.edge_count())
    )]
    pub fn find_all(&mut self, graph: &Graph) -> CycleSet {
        let mut cycles = CycleSet::new();
        let vertex_count = graph.vertex_count();
        if vertex_count < 3 {
            return cycles;
        }

        reset(&mut self.visited, vertex_count, false);
        let mut frames: Vec<Neighbors<'_>> = Vec::new();
        let mut closures: u64 = 0;

        for start in 0..vertex_count {
            self.path.clear();
            self.visited[start] = true;
            self.path.push(start);
            frames.push(graph.neighbors_of(start));

            while let Some(neighbors) = frames.last_mut() {
                match neighbors.next() {
                    Some(next) if next == start => {
                        if self.path.len() > 2 {
                            closures += 1;
                            insert_canonical(&mut cycles, &self.path, &mut self.scratch);
                        }
                    }
                    Some(next) if !self.visited[next] => {
                        self.visited[next] = true;
                        self.path.push(next);
                        frames.push(graph.neighbors_of(next));
                    }
                    Some(_) => {}
                    None => {
                        frames.pop();
                        if let Some(done) = self.path.pop() {
                            self.visited[done] = false;
                        }
                    }
                }
            }
        }

        debug!(closures, cycles = cycles.len(), "dfs enumeration complete");
        cycles
    }
}

impl CycleFinder for DfsCycleFinder {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn find_all(&mut self, graph: &Graph) -> CycleSet {
        DfsCycleFinder::find_all(self, graph)
    }
}

fn reset<T: Clone>(buffer: &mut Vec<T>, len: usize, value: T) {
    buffer.clear();
    buffer.resize(len, value);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cycles::Cycle;
    use crate::graph::Storage;

    fn cycle(vertices: &[usize]) -> Cycle {
        Cycle::new(vertices.iter().copied()).unwrap()
    }

    #[test]
    fn test_triangle() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let mut finder = DfsCycleFinder::new();

        assert_eq!(finder.exists_cycle_count(&graph), 1);
        let cycles = finder.find_all(&graph);
        assert_eq!(cycles.into_iter().collect::<Vec<_>>(), vec![cycle(&[0, 1, 2])]);
    }

    #[test]
    fn test_path_has_no_cycles() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut finder = DfsCycleFinder::new();

        assert_eq!(finder.exists_cycle_count(&graph), 0);
        assert!(finder.find_all(&graph).is_empty());
    }

    #[test]
    fn test_two_disjoint_triangles() {
        let graph = Graph::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
        )
        .unwrap();
        let mut finder = DfsCycleFinder::new();

        assert_eq!(finder.exists_cycle_count(&graph), 2);
        let cycles: Vec<_> = finder.find_all(&graph).into_iter().collect();
        assert_eq!(cycles, vec![cycle(&[0, 1, 2]), cycle(&[3, 4, 5])]);
    }

    #[test]
    fn test_component_with_many_cycles_counts_once() {
        // Two triangles sharing vertex 2, plus a tree hanging off vertex 4.
        let graph = Graph::from_edges(
            7,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2), (4, 5), (5, 6)],
        )
        .unwrap();
        let mut finder = DfsCycleFinder::new();

        assert_eq!(finder.exists_cycle_count(&graph), 1);
        assert_eq!(finder.find_all(&graph).len(), 2);
    }

    #[test]
    fn test_cycle_found_late_in_component_is_not_double_counted() {
        // Vertex 0 leads into the cycle 1-2-3; the traversal from 0 must mark
        // the whole component even after it has seen the back-edge.
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)]).unwrap();
        let mut finder = DfsCycleFinder::new();

        assert_eq!(finder.exists_cycle_count(&graph), 1);
    }

    #[test]
    fn test_tiny_graphs() {
        let mut finder = DfsCycleFinder::new();
        for n in 0..3 {
            let mut graph = Graph::new(n);
            if n == 2 {
                graph.add_edge(0, 1).unwrap();
            }
            assert_eq!(finder.exists_cycle_count(&graph), 0);
            assert!(finder.find_all(&graph).is_empty());
        }
    }

    #[test]
    fn test_square_with_diagonal() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();
        let cycles: Vec<_> = DfsCycleFinder::new().find_all(&graph).into_iter().collect();

        assert_eq!(
            cycles,
            vec![cycle(&[0, 1, 2]), cycle(&[0, 1, 2, 3]), cycle(&[0, 2, 3])]
        );
    }

    #[test]
    fn test_matrix_and_list_storage_agree() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (3, 4), (4, 5), (5, 3)];
        let mut list = Graph::with_storage(6, Storage::List);
        let mut matrix = Graph::with_storage(6, Storage::Matrix);
        for &(u, v) in &edges {
            list.add_edge(u, v).unwrap();
            matrix.add_edge(u, v).unwrap();
        }

        let mut finder = DfsCycleFinder::new();
        assert_eq!(finder.find_all(&list), finder.find_all(&matrix));
        assert_eq!(
            finder.exists_cycle_count(&list),
            finder.exists_cycle_count(&matrix)
        );
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let n = 200_000;
        let mut graph = Graph::with_storage(n, Storage::List);
        for v in 1..n {
            graph.add_edge(v - 1, v).unwrap();
        }
        let mut finder = DfsCycleFinder::new();
        assert_eq!(finder.exists_cycle_count(&graph), 0);

        graph.add_edge(0, n - 1).unwrap();
        assert_eq!(finder.exists_cycle_count(&graph), 1);
    }
}
