// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # pathscope
//!
//! [![Crates.io](https://img.shields.io/crates/v/pathscope.svg)](https://crates.io/crates/pathscope)
//! [![Documentation](https://docs.rs/pathscope/badge.svg)](https://docs.rs/pathscope)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/pathscope/blob/main/LICENSE-APACHE)
//!
//! Shortest paths and ranked alternative routes over weighted undirected graphs.
//! `pathscope` computes the minimum-weight path between two nodes, enumerates every
//! simple path between them lazily, and ranks the candidates by total weight.
//!
//! ## Features
//!
//! - **Keyed graphs** - Address nodes by your own identifiers (integers, strings, ...)
//! - **Dijkstra** - Binary-heap shortest paths with deterministic tie-breaking
//! - **Lazy enumeration** - Simple paths are produced on demand and can be bounded or abandoned
//! - **Ranking** - Stable ascending ordering with top-K alternative selection
//! - **Parallel batches** - Independent queries over one immutable graph run on `rayon`
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! pathscope = "0.1"
//! ```
//!
//! ```rust
//! use pathscope::prelude::*;
//!
//! let graph = Graph::with_node_range(
//!     6,
//!     [(0, 1, 7u32), (0, 2, 9), (0, 5, 14), (1, 2, 10), (1, 3, 15), (2, 3, 11), (2, 5, 2), (3, 4, 6), (4, 5, 9)],
//! )?;
//!
//! let result = graph.query(&0, &4, &QueryConfig::default())?;
//! println!("Shortest: {} (weight {})", result.primary, result.primary.total_weight());
//! for alternative in &result.alternatives {
//!     println!("Alternative: {alternative} (weight {})", alternative.total_weight());
//! }
//!
//! assert_eq!(result.primary.nodes(), &[0, 2, 5, 4]);
//! assert_eq!(result.primary.total_weight(), 20);
//! # Ok::<(), pathscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - Graph store ([`Graph`], [`graph::UndirectedGraph`]) and the traits algorithms use
//! - [`graph::algorithms`] - Dijkstra, simple-path enumeration and ranking over node IDs
//! - [`Path`], [`RankedPathSet`] - Query results in terms of caller keys
//! - [`QueryConfig`] - Limits for alternative enumeration
//!
//! Graphs are validated once when built and never change afterwards. Every query
//! takes `&self`, so a graph can be shared across threads without locking.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`], with [`Error`] describing invalid
//! graph input (unknown endpoints, self-loops, negative weights) or failed queries
//! (unknown nodes, unreachable targets, non-adjacent pairs).
//!
//! ## Development and Testing
//!
//! ### Fuzzing
//!
//! ```bash
//! cargo +nightly fuzz run query --release
//! ```
//!
//! ### Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! ```
#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use pathscope::prelude::*;
///
/// let graph: Graph<&str, u32> = Graph::build(["a", "b"], [("a", "b", 3)])?;
/// let path: Path<&str, u32> = graph.shortest_path(&"a", &"b")?;
/// assert_eq!(path.total_weight(), 3);
/// # Ok::<(), pathscope::Error>(())
/// ```
pub mod prelude;

/// Weighted undirected graphs and the path algorithms that run on them
///
/// # Key Types
///
/// - [`graph::Graph`] - Graph addressed by caller keys
/// - [`graph::UndirectedGraph`] - Adjacency-list graph addressed by [`graph::NodeId`]
/// - [`graph::Weight`] - Edge weight abstraction
///
/// # Main Functions
///
/// - [`graph::algorithms::shortest_path`] - Dijkstra between two nodes
/// - [`graph::algorithms::all_simple_paths`] - Lazy simple-path enumeration
/// - [`graph::algorithms::rank`] - Ranking of candidate paths by weight
pub mod graph;

mod config;
mod path;
mod query;

/// `pathscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use pathscope::{Graph, Result};
///
/// fn hop_count(graph: &Graph<usize, u32>, from: usize, to: usize) -> Result<usize> {
///     Ok(graph.shortest_path(&from, &to)?.hops())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `pathscope` Error type
///
/// The main error type for all operations in this crate. Covers graph construction
/// and every kind of query.
///
/// # Examples
///
/// ```rust
/// use pathscope::{Error, Graph};
///
/// match Graph::<u32, i32>::build([0, 1], [(0, 1, -2)]) {
///     Ok(_) => println!("Built"),
///     Err(Error::InvalidWeight { weight, .. }) => println!("Rejected weight {weight}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;

/// Weighted undirected graph addressed by caller keys.
///
/// See [`graph::Graph`] for construction and queries.
pub use graph::Graph;

/// Limits and options for [`Graph::query`].
pub use config::QueryConfig;

/// Query results expressed in caller keys.
pub use path::{Path, RankedPathSet};
