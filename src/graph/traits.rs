//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits
//! rather than against [`UndirectedGraph`](crate::graph::UndirectedGraph) directly, so
//! that any adjacency structure can be searched without copying it first.
//!
//! - [`GraphBase`] - Node count and node iteration
//! - [`Neighbors`] - Adjacency (both directions, the graphs are undirected)
//! - [`WeightedGraph`] - Adjacency with edge weights and pair lookup
//!
//! All adjacency queries return iterators so traversals never allocate just to look
//! at a node's neighborhood.

use crate::graph::{NodeId, Weight};

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;

    /// Returns `true` if `node` addresses a node of this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// Trait for graphs that can enumerate the nodes adjacent to a node.
///
/// The iteration order must be deterministic for an unmodified graph; the simple-path
/// enumerator and Dijkstra's tie-breaking both inherit it.
pub trait Neighbors: GraphBase {
    /// Returns an iterator over the nodes adjacent to `node`.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs whose edges carry a [`Weight`].
pub trait WeightedGraph: Neighbors {
    /// The edge weight type.
    type Weight: Weight;

    /// Returns an iterator over `(neighbor, weight)` pairs of the edges incident to `node`.
    ///
    /// Yields neighbors in the same order as [`Neighbors::neighbors`].
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn weighted_neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Self::Weight)>;

    /// Returns the weight of the edge between `a` and `b`, if the two are adjacent.
    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<Self::Weight>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal edge-list graph, to check the traits carry no hidden dependency on
    // the adjacency-list implementation
    struct EdgeListGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId, u32)>,
    }

    impl GraphBase for EdgeListGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }

        fn node_ids(&self) -> impl Iterator<Item = NodeId> {
            (0..self.node_count).map(NodeId::new)
        }
    }

    impl Neighbors for EdgeListGraph {
        fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
            self.weighted_neighbors(node).map(|(n, _)| n)
        }
    }

    impl WeightedGraph for EdgeListGraph {
        type Weight = u32;

        fn weighted_neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, u32)> {
            self.edges.iter().filter_map(move |&(a, b, w)| {
                if a == node {
                    Some((b, w))
                } else if b == node {
                    Some((a, w))
                } else {
                    None
                }
            })
        }

        fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<u32> {
            self.weighted_neighbors(a)
                .find(|&(n, _)| n == b)
                .map(|(_, w)| w)
        }
    }

    fn sample() -> EdgeListGraph {
        EdgeListGraph {
            node_count: 4,
            edges: vec![
                (NodeId::new(0), NodeId::new(1), 5),
                (NodeId::new(1), NodeId::new(2), 3),
            ],
        }
    }

    #[test]
    fn test_graph_base() {
        let graph = sample();
        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains_node(NodeId::new(3)));
        assert!(!graph.contains_node(NodeId::new(4)));

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids.first(), Some(&NodeId::new(0)));
        assert_eq!(ids.last(), Some(&NodeId::new(3)));
    }

    #[test]
    fn test_neighbors_are_symmetric() {
        let graph = sample();
        let of_one: Vec<NodeId> = graph.neighbors(NodeId::new(1)).collect();
        assert_eq!(of_one, vec![NodeId::new(0), NodeId::new(2)]);
        assert_eq!(graph.neighbors(NodeId::new(3)).count(), 0);
    }

    #[test]
    fn test_edge_weight() {
        let graph = sample();
        assert_eq!(graph.edge_weight(NodeId::new(1), NodeId::new(0)), Some(5));
        assert_eq!(graph.edge_weight(NodeId::new(0), NodeId::new(2)), None);
    }
}
