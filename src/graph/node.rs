//! Node identifier for the undirected graph.
//!
//! This module provides the [`NodeId`] type, a dense, strongly-typed index into the
//! node storage of an [`UndirectedGraph`](crate::graph::UndirectedGraph). Callers
//! usually work with their own node keys through [`Graph`](crate::Graph) and only see
//! `NodeId` when driving the algorithms in [`crate::graph::algorithms`] directly.

use std::fmt;

/// A strongly-typed identifier for nodes within an undirected graph.
///
/// `NodeId` wraps a `usize` index. Identifiers are assigned sequentially from 0 in
/// the order nodes are added, so they double as indices into per-node vectors such as
/// tentative-distance or on-path tables.
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::NodeId;
///
/// let node = NodeId::new(3);
/// let distances = vec![0u32, 5, 2, 4];
/// assert_eq!(distances[node.index()], 4);
/// ```
///
/// # Thread Safety
///
/// `NodeId` is [`Copy`], [`Send`], and [`Sync`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage obtains node IDs from the graph; this constructor exists for
    /// algorithms that iterate over `0..node_count` and for tests.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw 0-based index of this node.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
