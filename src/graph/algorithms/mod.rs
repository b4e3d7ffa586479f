//! Path algorithms over weighted undirected graphs.
//!
//! Every algorithm here is generic over the traits in [`crate::graph`] and works on
//! [`NodeId`](crate::graph::NodeId)s. The keyed [`Graph`](crate::Graph) wraps them and
//! translates between caller keys and node IDs.
//!
//! # Available Algorithms
//!
//! ## Shortest Paths
//!
//! - [`shortest_path`] - Dijkstra's algorithm between two nodes
//! - [`shortest_path_tree`] - Dijkstra's algorithm from one source to every node
//! - [`ShortestPathTree`] - Result of a single-source search
//!
//! ## Path Enumeration
//!
//! - [`all_simple_paths`] - Lazy iterator over every simple path between two nodes
//! - [`all_simple_paths_with_cutoff`] - The same, limited to a maximum number of edges
//!
//! ## Ranking
//!
//! - [`rank`] - Weigh candidate paths and sort them ascending
//! - [`top_alternatives`] - Best `k` paths other than a given primary path
//! - [`TieBreak`] - Ordering of equal-weight paths
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | Dijkstra | O((V + E) log V) | Single best route |
//! | Simple paths | O(V!) worst case | Alternatives on small graphs |
//! | Ranking | O(P log P) | Ordering enumerated candidates |

mod dijkstra;
mod paths;
mod rank;

pub use dijkstra::{shortest_path, shortest_path_tree, ShortestPathTree};
pub use paths::{all_simple_paths, all_simple_paths_with_cutoff, SimplePaths};
pub use rank::{path_weight, rank, sort_ranked, top_alternatives, RankedPath, TieBreak};
