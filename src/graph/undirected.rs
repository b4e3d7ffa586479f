//! Core undirected graph implementation.
//!
//! This module provides [`UndirectedGraph`], the adjacency-list store every other
//! component reads from. Each unordered node pair is stored once as an edge record;
//! both endpoints reference that record from their adjacency lists, and a pair index
//! gives constant-time weight lookup for `(a, b)` in either order.
//!
//! Graphs are assembled once through [`UndirectedGraph::from_edges`] (or the keyed
//! [`Graph::build`](crate::Graph::build)) and are read-only afterwards.

use std::collections::HashMap;

use crate::{
    graph::{
        edge::EdgeId,
        node::NodeId,
        traits::{GraphBase, Neighbors, WeightedGraph},
        Weight,
    },
    Error, Result,
};

/// Internal storage for an edge and its endpoints.
#[derive(Debug, Clone)]
struct EdgeData<W> {
    /// Endpoint with the smaller index
    a: NodeId,
    /// Endpoint with the larger index
    b: NodeId,
    /// Edge weight
    weight: W,
}

impl<W> EdgeData<W> {
    /// Returns the endpoint opposite to `node`.
    #[inline]
    fn other(&self, node: NodeId) -> NodeId {
        if self.a == node {
            self.b
        } else {
            self.a
        }
    }
}

/// Normalizes an unordered pair so that `(a, b)` and `(b, a)` share one index key.
#[inline]
fn pair_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// An undirected graph with typed node data and weighted edges.
///
/// `UndirectedGraph` stores:
///
/// - Node data (`N`) in a vector indexed by [`NodeId`]
/// - Edge records in a vector indexed by [`EdgeId`]
/// - One adjacency list of `EdgeId`s per node, in edge insertion order
/// - A pair index mapping each unordered node pair to its `EdgeId`
///
/// # Invariants
///
/// - No self-loops
/// - At most one edge per unordered pair (re-inserting a pair replaces its weight)
/// - Every weight satisfies [`Weight::is_valid`]
///
/// # Thread Safety
///
/// `UndirectedGraph<N, W>` is [`Send`] and [`Sync`] when `N` and `W` are. The graph
/// exposes no mutation after construction, so it can be shared across threads by
/// reference for concurrent queries.
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::{NodeId, UndirectedGraph};
///
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
/// let graph = UndirectedGraph::from_edges(vec!["A", "B", "C"], [(a, b, 5u32), (b, c, 2)])?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight_between(c, b), Some(2));
/// assert_eq!(graph.neighbors(b).collect::<Vec<_>>(), vec![a, c]);
/// # Ok::<(), pathscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W> {
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<W>>,
    /// Incident edges per node
    adjacency: Vec<Vec<EdgeId>>,
    /// Unordered pair to edge lookup
    pair_index: HashMap<(NodeId, NodeId), EdgeId>,
}

impl<N, W: Weight> Default for UndirectedGraph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W: Weight> UndirectedGraph<N, W> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        UndirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            pair_index: HashMap::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        UndirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            adjacency: Vec::with_capacity(node_capacity),
            pair_index: HashMap::with_capacity(edge_capacity),
        }
    }

    /// Builds a graph from node data and an edge list over the resulting node IDs.
    ///
    /// Node `i` of `nodes` receives `NodeId::new(i)`. Edges are inserted in order;
    /// a repeated pair keeps its first `EdgeId` and takes the last weight supplied.
    ///
    /// # Arguments
    ///
    /// * `nodes` - Node data, in `NodeId` order
    /// * `edges` - `(a, b, weight)` triples
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEdge`] if an endpoint is out of range or an edge is a self-loop
    /// - [`Error::InvalidWeight`] if a weight is negative or NaN
    pub fn from_edges(
        nodes: Vec<N>,
        edges: impl IntoIterator<Item = (NodeId, NodeId, W)>,
    ) -> Result<Self> {
        let node_count = nodes.len();
        let mut graph = UndirectedGraph {
            nodes,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
            pair_index: HashMap::new(),
        };

        for (a, b, weight) in edges {
            if let (id, Some(previous)) = graph.add_edge(a, b, weight)? {
                log::warn!(
                    "Duplicate edge ({a}, {b}): weight {previous} replaced by {weight} on {id}"
                );
            }
        }

        Ok(graph)
    }

    /// Adds a node and returns its identifier.
    pub(crate) fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds the undirected edge `{a, b}`, or replaces its weight if it already exists.
    ///
    /// # Returns
    ///
    /// The edge's `EdgeId` and, if the pair already existed, the replaced weight.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEdge`] if either endpoint does not exist or `a == b`
    /// - [`Error::InvalidWeight`] if `weight` is negative or NaN
    pub(crate) fn add_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<(EdgeId, Option<W>)> {
        for endpoint in [a, b] {
            if endpoint.index() >= self.nodes.len() {
                return Err(invalid_edge!(
                    "edge ({}, {}) references node {} which does not exist in graph with {} nodes",
                    a,
                    b,
                    endpoint,
                    self.nodes.len()
                ));
            }
        }
        if a == b {
            return Err(invalid_edge!("edge ({}, {}) is a self-loop", a, b));
        }
        if !weight.is_valid() {
            return Err(Error::InvalidWeight {
                a: a.to_string(),
                b: b.to_string(),
                weight: format!("{weight:?}"),
            });
        }

        let key = pair_key(a, b);
        if let Some(&existing) = self.pair_index.get(&key) {
            let previous = std::mem::replace(&mut self.edges[existing.index()].weight, weight);
            return Ok((existing, Some(previous)));
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            a: key.0,
            b: key.1,
            weight,
        });
        self.adjacency[a.index()].push(id);
        self.adjacency[b.index()].push(id);
        self.pair_index.insert(key, id);

        Ok((id, None))
    }

    /// Returns a reference to the data of the given node.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over all node identifiers in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Returns an iterator over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all edges as `(id, a, b, weight)`, in insertion order.
    ///
    /// `a` is always the endpoint with the smaller index.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, W)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e.a, e.b, e.weight))
    }

    /// Returns the endpoints of the given edge, smaller index first.
    #[must_use]
    pub fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.a, e.b))
    }

    /// Returns the weight of the given edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<W> {
        self.edges.get(edge.index()).map(|e| e.weight)
    }

    /// Returns the edge connecting `a` and `b`, in either order.
    #[must_use]
    pub fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.pair_index.get(&pair_key(a, b)).copied()
    }

    /// Returns the weight of the edge connecting `a` and `b`, in either order.
    #[must_use]
    pub fn weight_between(&self, a: NodeId, b: NodeId) -> Option<W> {
        self.find_edge(a, b).and_then(|edge| self.edge(edge))
    }

    /// Returns an iterator over the nodes adjacent to `node`, in edge insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency[node.index()]
            .iter()
            .map(move |&edge_id| self.edges[edge_id.index()].other(node))
    }

    /// Returns an iterator over `(edge, neighbor, weight)` for the edges incident to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, NodeId, W)> + '_ {
        self.adjacency[node.index()].iter().map(move |&edge_id| {
            let edge = &self.edges[edge_id.index()];
            (edge_id, edge.other(node), edge.weight)
        })
    }

    /// Returns the number of edges incident to `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid node in the graph.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node.index()].len()
    }
}

impl<N, W: Weight> GraphBase for UndirectedGraph<N, W> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        UndirectedGraph::node_ids(self)
    }
}

impl<N, W: Weight> Neighbors for UndirectedGraph<N, W> {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        UndirectedGraph::neighbors(self, node)
    }
}

impl<N, W: Weight> WeightedGraph for UndirectedGraph<N, W> {
    type Weight = W;

    fn weighted_neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, W)> {
        self.incident_edges(node)
            .map(|(_, neighbor, weight)| (neighbor, weight))
    }

    fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<W> {
        self.weight_between(a, b)
    }
}
