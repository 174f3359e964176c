//! # Graph Module
//!
//! The undirected graph that every cycle finder reads, and the random
//! generator that produces graphs of controlled size and density.
//!
//! ## Components
//!
//! - **Graph**: simple undirected graph over `0..n` with adjacency-list or
//!   bit-matrix storage chosen from the vertex count
//! - **RandomGraphGenerator**: exact edge-count (rejection sampling) and
//!   per-pair probability modes, driven by a caller-seeded RNG
//!
//! ## Example
//!
//! ```
//! use cycle_census::graph::{EdgeSpec, Graph, RandomGraphGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut triangle = Graph::new(3);
//! triangle.add_edge(0, 1)?;
//! triangle.add_edge(1, 2)?;
//! triangle.add_edge(2, 0)?;
//! assert!(triangle.has_edge(0, 2)?);
//! assert!(!triangle.is_forest());
//!
//! let random = RandomGraphGenerator::new().generate_seeded(7, 10, EdgeSpec::Count(12))?;
//! assert_eq!(random.edge_count(), 12);
//! # Ok(())
//! # }
//! ```

mod generator;
mod types;

pub use generator::{
    EdgeSpec, RandomGraphGenerator, generate_with_edge_count, generate_with_probability,
};
pub use types::{Graph, Neighbors, Storage};
