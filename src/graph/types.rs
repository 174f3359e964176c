//! Undirected simple graph with internally chosen adjacency storage.

use std::fmt;

use fixedbitset::FixedBitSet;
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};

use crate::constants::graph::{LIST_MAX_VERTICES, MATRIX_MAX_VERTICES};
use crate::error::CensusError;

/// How a [`Graph`] stores its adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Storage {
    /// One neighbor vector per vertex, in insertion order. Linear `has_edge`.
    List,
    /// One bit row per vertex. Constant-time `has_edge`, `n²` bits of memory.
    Matrix,
}

impl Storage {
    /// Storage picked by [`Graph::new`] for a graph of `vertex_count`
    /// vertices.
    ///
    /// Small graphs are enumeration workloads where the list is as fast as
    /// the matrix and keeps insertion order. Large graphs are DFS workloads
    /// where constant-time membership pays off, until the quadratic bit
    /// matrix stops fitting comfortably in memory.
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= LIST_MAX_VERTICES || vertex_count > MATRIX_MAX_VERTICES {
            Storage::List
        } else {
            Storage::Matrix
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::List => write!(f, "list"),
            Storage::Matrix => write!(f, "matrix"),
        }
    }
}

#[derive(Debug, Clone)]
enum Adjacency {
    List(Vec<Vec<usize>>),
    Matrix(Vec<FixedBitSet>),
}

/// An undirected, unweighted graph over the vertices `0..vertex_count`.
///
/// Edges are symmetric and self-loops are rejected. The vertex count is fixed
/// at construction; the only mutation is [`Graph::add_edge`].
#[derive(Debug, Clone)]
pub struct Graph {
    vertex_count: usize,
    edge_count: usize,
    adjacency: Adjacency,
}

impl Graph {
    /// Create an edgeless graph, choosing storage from the vertex count.
    pub fn new(vertex_count: usize) -> Self {
        Self::with_storage(vertex_count, Storage::for_vertex_count(vertex_count))
    }

    /// Create an edgeless graph with an explicit storage strategy.
    pub fn with_storage(vertex_count: usize, storage: Storage) -> Self {
        let adjacency = match storage {
            Storage::List => Adjacency::List(vec![Vec::new(); vertex_count]),
            Storage::Matrix => {
                Adjacency::Matrix(vec![FixedBitSet::with_capacity(vertex_count); vertex_count])
            }
        };

        Self {
            vertex_count,
            edge_count: 0,
            adjacency,
        }
    }

    /// Build a graph from an edge list. Duplicate edges are ignored.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, CensusError> {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Maximum number of edges a simple graph on `vertex_count` vertices
    /// can hold.
    pub fn max_edges(vertex_count: usize) -> usize {
        vertex_count.saturating_mul(vertex_count.saturating_sub(1)) / 2
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn storage(&self) -> Storage {
        match self.adjacency {
            Adjacency::List(_) => Storage::List,
            Adjacency::Matrix(_) => Storage::Matrix,
        }
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Returns `Ok(true)` when the edge is new and `Ok(false)` when it was
    /// already present. Fails without mutating the graph when either vertex
    /// is out of range or `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, CensusError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(CensusError::SelfLoopRejected { vertex: u });
        }
        if self.adjacent(u, v) {
            return Ok(false);
        }

        match &mut self.adjacency {
            Adjacency::List(lists) => {
                lists[u].push(v);
                lists[v].push(u);
            }
            Adjacency::Matrix(rows) => {
                rows[u].insert(v);
                rows[v].insert(u);
            }
        }
        self.edge_count += 1;
        Ok(true)
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, CensusError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.adjacent(u, v))
    }

    /// Neighbors of `u` in a stable order: insertion order for list storage,
    /// ascending vertex id for matrix storage.
    pub fn neighbors(&self, u: usize) -> Result<Neighbors<'_>, CensusError> {
        self.check_vertex(u)?;
        Ok(self.neighbors_of(u))
    }

    pub fn degree(&self, u: usize) -> Result<usize, CensusError> {
        self.check_vertex(u)?;
        Ok(match &self.adjacency {
            Adjacency::List(lists) => lists[u].len(),
            Adjacency::Matrix(rows) => rows[u].count_ones(..),
        })
    }

    /// Every edge once, as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count)
            .flat_map(move |u| self.neighbors_of(u).filter(move |&v| u < v).map(move |v| (u, v)))
    }

    /// Number of connected components, isolated vertices included.
    pub fn component_count(&self) -> usize {
        let mut components = UnionFind::<usize>::new(self.vertex_count);
        let mut merges = 0;
        for (u, v) in self.edges() {
            if components.union(u, v) {
                merges += 1;
            }
        }
        self.vertex_count - merges
    }

    /// A graph is a forest exactly when every edge merged two components.
    pub fn is_forest(&self) -> bool {
        self.edge_count + self.component_count() == self.vertex_count
    }

    /// Adjacency test without range checks. Callers guarantee `u, v < n`.
    pub(crate) fn adjacent(&self, u: usize, v: usize) -> bool {
        match &self.adjacency {
            Adjacency::List(lists) => lists[u].contains(&v),
            Adjacency::Matrix(rows) => rows[u].contains(v),
        }
    }

    /// Neighbor iteration without range checks. Callers guarantee `u < n`.
    pub(crate) fn neighbors_of(&self, u: usize) -> Neighbors<'_> {
        let inner = match &self.adjacency {
            Adjacency::List(lists) => NeighborsInner::List(lists[u].iter()),
            Adjacency::Matrix(rows) => NeighborsInner::Matrix(rows[u].ones()),
        };
        Neighbors { inner }
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), CensusError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(CensusError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Iterator over the neighbors of one vertex.
pub struct Neighbors<'a> {
    inner: NeighborsInner<'a>,
}

enum NeighborsInner<'a> {
    List(std::slice::Iter<'a, usize>),
    Matrix(fixedbitset::Ones<'a>),
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match &mut self.inner {
            NeighborsInner::List(iter) => iter.next().copied(),
            NeighborsInner::Matrix(ones) => ones.next(),
        }
    }
}
