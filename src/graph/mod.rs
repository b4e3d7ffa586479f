//! Weighted undirected graph infrastructure.
//!
//! This module contains the graph store and the path algorithms built on it:
//!
//! - [`Graph`] - Graph keyed by caller-supplied node identifiers (integers, strings, ...)
//! - [`UndirectedGraph`] - Adjacency-list graph addressed by dense [`NodeId`]s
//! - [`GraphBase`], [`Neighbors`], [`WeightedGraph`] - Traits the algorithms are generic over
//! - [`Weight`] - Non-negative additive edge weights
//! - [`algorithms`] - Shortest paths, simple-path enumeration and ranking
//!
//! # Architecture
//!
//! [`Graph`] owns an [`UndirectedGraph`] whose node data are the caller's keys, plus a
//! map from key to [`NodeId`]. Queries resolve keys once, run the algorithm on node IDs,
//! and map the result back to keys. Graphs are immutable once built, so a shared
//! reference can serve any number of concurrent queries.
//!
//! # Examples
//!
//! ```rust
//! use pathscope::graph::{algorithms, Graph};
//!
//! let graph: Graph<&str, u32> = Graph::build(
//!     ["depot", "north", "south", "port"],
//!     [("depot", "north", 4), ("depot", "south", 3), ("south", "port", 3), ("north", "port", 1)],
//! )?;
//!
//! let route = graph.shortest_path(&"depot", &"port")?;
//! assert_eq!(route.nodes(), &["depot", "north", "port"]);
//! assert_eq!(route.total_weight(), 5);
//!
//! // The same search on the underlying node IDs
//! let (ids, weight) = algorithms::shortest_path(graph.inner(), graph.node_id(&"depot")?, graph.node_id(&"port")?)?;
//! assert_eq!(ids.len(), 3);
//! assert_eq!(weight, 5);
//! # Ok::<(), pathscope::Error>(())
//! ```

pub mod algorithms;

mod edge;
mod indexed;
mod node;
mod traits;
mod undirected;
mod weight;

pub use edge::EdgeId;
pub use indexed::Graph;
pub use node::NodeId;
pub use traits::{GraphBase, Neighbors, WeightedGraph};
pub use undirected::UndirectedGraph;
pub use weight::Weight;
