//! Greedy [graph coloring](https://en.wikipedia.org/wiki/Greedy_coloring) in degeneracy orderings.
//!
//! Vertices are kept in buckets indexed by their current degree. A smallest-last pass repeatedly
//! removes a vertex of minimum remaining degree and colors the vertices in reverse removal order,
//! which guarantees at most `1 + max degree at deletion` colors. A largest-last pass removes a
//! vertex of maximum remaining degree instead. Static orderings by original degree, random
//! orderings and the identity ordering are available for comparison.
//!
//! # Examples
//!
//! Coloring a triangle with two pendant vertices.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use degeneracy_coloring::{color_graph, Algorithm, Graph};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut graph = Graph::new(5, false);
//! for (u, v) in [(0, 2), (1, 2), (2, 3), (2, 4), (3, 4)] {
//!     graph.add_edge(u, v)?;
//! }
//! graph.gen_degree_list()?;
//!
//! let mut rng = StdRng::seed_from_u64(0);
//! let report = color_graph(&mut graph, Algorithm::Slvo, &mut rng)?;
//! assert_eq!(report.num_colors(), 3);
//! assert_eq!(report.terminal_clique_size(), Some(3));
//! # Ok(())
//! # }
//! ```
//!
//! Any `petgraph` graph can be converted.
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use degeneracy_coloring::{color_in_order, degeneracy_ordering, Degeneracy, Graph};
//!
//! // a path graph with 4 nodes
//! let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let mut graph = Graph::from_petgraph(&path)?;
//!
//! let ordering = degeneracy_ordering(&mut graph, Degeneracy::SmallestLast)?;
//! assert_eq!(ordering.color_bound(), 2);
//! let coloring = color_in_order(&mut graph, ordering.order())?;
//! assert_eq!(coloring.num_colors(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # References
//! + \[MB83\]: David W. Matula and Leland L. Beck. “Smallest-last ordering and clustering and graph
//!   coloring algorithms”. <https://doi.org/10.1145/2402.322385>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

/// Running an ordering and a coloring in one step.
pub mod algorithm;
/// Greedy coloring in a given vertex order.
pub mod coloring;
mod error;
/// The graph with its degree buckets.
pub mod graph;
/// Arena backed doubly linked list used for the degree buckets.
pub mod list;
/// Vertex orderings.
pub mod ordering;
/// Per-run summaries.
pub mod report;

#[cfg(test)]
mod tests;

pub use algorithm::{color_all, color_graph, Algorithm};
pub use coloring::{color_in_order, Coloring};
pub use error::GraphError;
pub use graph::{DegreeListState, Graph, Vertex};
pub use list::{BucketHandle, BucketList};
pub use ordering::{
    degeneracy_ordering, natural_ordering, original_degree_ordering, random_ordering, Degeneracy, DegeneracyOrdering,
};
pub use report::{ColoringReport, VertexSummary};
