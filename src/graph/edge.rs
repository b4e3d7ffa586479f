//! Edge identifier for the undirected graph.
//!
//! This module provides the [`EdgeId`] type. Every unordered node pair of an
//! [`UndirectedGraph`](crate::graph::UndirectedGraph) is stored exactly once and owns
//! one `EdgeId`, so the identifier addresses both directions of traversal.

use std::fmt;

/// A strongly-typed identifier for edges within an undirected graph.
///
/// `EdgeId` wraps a `usize` index assigned sequentially from 0 as distinct node
/// pairs are inserted. Re-inserting an existing pair keeps its `EdgeId` and only
/// replaces the weight.
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::EdgeId;
///
/// let edge = EdgeId::new(2);
/// let weights = [5u32, 2, 4];
/// assert_eq!(weights[edge.index()], 4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Creates a new `EdgeId` from a raw index value.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        EdgeId(index)
    }

    /// Returns the raw 0-based index of this edge.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl From<usize> for EdgeId {
    #[inline]
    fn from(index: usize) -> Self {
        EdgeId(index)
    }
}

impl From<EdgeId> for usize {
    #[inline]
    fn from(edge: EdgeId) -> Self {
        edge.0
    }
}
