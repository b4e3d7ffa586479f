//! # pathscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the pathscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all pathscope operations
pub use crate::Error;

/// The result type used throughout pathscope
pub use crate::Result;

/// Limits and options for ranked path queries
pub use crate::QueryConfig;

// ================================================================================================
// Graphs
// ================================================================================================

/// Keyed graph, the main entry point
pub use crate::Graph;

/// Low-level graph store and identifiers
pub use crate::graph::{EdgeId, NodeId, UndirectedGraph, Weight};

/// Traits the algorithms are generic over
pub use crate::graph::{GraphBase, Neighbors, WeightedGraph};

// ================================================================================================
// Results and Algorithms
// ================================================================================================

/// Query results
pub use crate::{Path, RankedPathSet};

/// Path algorithms over node IDs
pub use crate::graph::algorithms::{
    all_simple_paths, all_simple_paths_with_cutoff, rank, shortest_path, shortest_path_tree,
    top_alternatives, RankedPath, ShortestPathTree, SimplePaths, TieBreak,
};
