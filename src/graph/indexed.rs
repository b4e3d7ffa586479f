//! Graph keyed by caller-supplied node identifiers.
//!
//! This module provides [`Graph`], a wrapper around [`UndirectedGraph`] that maps
//! between caller keys (integers, strings, any `Hash + Eq + Clone` type) and internal
//! [`NodeId`] indices.
//!
//! # Motivation
//!
//! The path algorithms work on dense node indices, but callers think in terms of their
//! own identifiers. `Graph` encapsulates the round trip:
//! 1. Validate the node set and edge list once, at build time
//! 2. Resolve query keys to `NodeId`s
//! 3. Run the algorithm and map the resulting node sequences back to keys
//!
//! Errors raised by the keyed API describe nodes with the `Debug` rendering of their
//! key, so `Graph<&str, _>` reports `"depot"` rather than an internal index.
//!
//! # Examples
//!
//! ```rust
//! use pathscope::{graph::algorithms::TieBreak, Graph};
//!
//! let graph: Graph<&str, u32> = Graph::build(
//!     ["a", "b", "c", "d"],
//!     [("a", "b", 1), ("b", "d", 1), ("a", "c", 1), ("c", "d", 3)],
//! )?;
//!
//! assert_eq!(graph.weight(&"d", &"c")?, 3);
//! assert_eq!(graph.neighbors(&"a")?.collect::<Vec<_>>(), vec![&"b", &"c"]);
//!
//! let candidates = graph
//!     .all_simple_paths(&"a", &"d")?
//!     .map(|p| p.map(|p| p.into_nodes()))
//!     .collect::<pathscope::Result<Vec<_>>>()?;
//! let ranked = graph.rank(candidates, TieBreak::Enumeration)?;
//! assert_eq!(ranked[0].nodes(), &["a", "b", "d"]);
//! assert_eq!(ranked[1].total_weight(), 4);
//! # Ok::<(), pathscope::Error>(())
//! ```

use std::{collections::HashMap, fmt, hash::Hash};

use crate::{
    graph::{
        algorithms::{self, TieBreak},
        weight::total,
        NodeId, UndirectedGraph, Weight,
    },
    path::Path,
    Error, Result,
};

/// Renders a key the way errors report it.
fn describe<K: fmt::Debug>(key: &K) -> String {
    format!("{key:?}")
}

/// A weighted undirected graph whose nodes are addressed by caller keys.
///
/// # Type Parameters
///
/// * `K` - The node key type (e.g. `usize`, `&str`, `String`)
/// * `W` - The edge weight type, see [`Weight`]
///
/// # Invariants
///
/// - Every key appears once; repeated keys in the node set are ignored
/// - Every edge joins two distinct keys of the node set
/// - Every weight is non-negative (and not NaN)
/// - The graph never changes after [`Graph::build`]
///
/// # Thread Safety
///
/// `Graph<K, W>` is `Send` and `Sync` when `K` is. Queries only take `&self`.
#[derive(Debug, Clone)]
pub struct Graph<K, W = u64>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    /// The underlying graph; node data are the keys themselves
    graph: UndirectedGraph<K, W>,
    /// Map from key to `NodeId`
    key_to_node: HashMap<K, NodeId>,
}

impl<K, W> Graph<K, W>
where
    K: Hash + Eq + Clone + fmt::Debug,
    W: Weight,
{
    /// Builds a graph from a node set and an edge list.
    ///
    /// Nodes receive [`NodeId`]s in the order they are supplied. Neighbor iteration
    /// follows edge order, which in turn fixes the order simple paths are enumerated in.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The node keys; a key supplied twice is kept once
    /// * `edges` - `(a, b, weight)` triples; a pair supplied twice keeps the last weight
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEdge`] if an edge names a key outside `nodes`, or joins a key to itself
    /// - [`Error::InvalidWeight`] if a weight is negative or NaN
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathscope::{Error, Graph};
    ///
    /// let err = Graph::<u32, i32>::build([1, 2], [(1, 2, -4)]).unwrap_err();
    /// assert!(matches!(err, Error::InvalidWeight { .. }));
    ///
    /// let err = Graph::<u32, u32>::build([1, 2], [(1, 3, 4)]).unwrap_err();
    /// assert!(matches!(err, Error::InvalidEdge { .. }));
    /// ```
    pub fn build(
        nodes: impl IntoIterator<Item = K>,
        edges: impl IntoIterator<Item = (K, K, W)>,
    ) -> Result<Self> {
        let mut graph = UndirectedGraph::new();
        let mut key_to_node = HashMap::new();

        for key in nodes {
            if key_to_node.contains_key(&key) {
                log::debug!("Node {key:?} supplied more than once, keeping the first");
                continue;
            }
            let id = graph.add_node(key.clone());
            key_to_node.insert(key, id);
        }

        for (a, b, weight) in edges {
            let resolve = |key: &K| {
                key_to_node.get(key).copied().ok_or_else(|| {
                    invalid_edge!(
                        "edge ({:?}, {:?}) references node {:?} which is not in the node set",
                        a,
                        b,
                        key
                    )
                })
            };
            let (id_a, id_b) = (resolve(&a)?, resolve(&b)?);

            // Both endpoints exist, so the store can only object to a self-loop or the weight
            let (_, previous) = graph.add_edge(id_a, id_b, weight).map_err(|error| match error {
                Error::InvalidEdge { .. } => invalid_edge!("edge ({:?}, {:?}) is a self-loop", a, b),
                Error::InvalidWeight { weight, .. } => Error::InvalidWeight {
                    a: describe(&a),
                    b: describe(&b),
                    weight,
                },
                other => other,
            })?;
            if let Some(previous) = previous {
                log::warn!(
                    "Duplicate edge ({a:?}, {b:?}): weight {previous} replaced by {weight}"
                );
            }
        }

        log::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(Graph { graph, key_to_node })
    }

    /// Returns the underlying [`UndirectedGraph`], for running algorithms on node IDs.
    #[must_use]
    pub fn inner(&self) -> &UndirectedGraph<K, W> {
        &self.graph
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Returns `true` if `key` is a node of the graph.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.key_to_node.contains_key(key)
    }

    /// Returns the `NodeId` of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `key` is not a node of the graph.
    pub fn node_id(&self, key: &K) -> Result<NodeId> {
        self.key_to_node
            .get(key)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(describe(key)))
    }

    /// Returns the key of the node with the given `NodeId`.
    #[must_use]
    pub fn key(&self, node: NodeId) -> Option<&K> {
        self.graph.node(node)
    }

    /// Returns an iterator over all node keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &K> + '_ {
        self.graph.nodes().map(|(_, key)| key)
    }

    /// Returns an iterator over all edges as `(a, b, weight)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K, W)> + '_ {
        self.graph
            .edges()
            .filter_map(|(_, a, b, weight)| Some((self.key(a)?, self.key(b)?, weight)))
    }

    /// Returns the keys adjacent to `key`, in edge insertion order.
    ///
    /// An isolated node yields an empty iterator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `key` is not a node of the graph.
    pub fn neighbors(&self, key: &K) -> Result<impl Iterator<Item = &K> + '_> {
        let node = self.node_id(key)?;
        Ok(self
            .graph
            .neighbors(node)
            .filter_map(|neighbor| self.key(neighbor)))
    }

    /// Returns the number of edges incident to `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `key` is not a node of the graph.
    pub fn degree(&self, key: &K) -> Result<usize> {
        Ok(self.graph.degree(self.node_id(key)?))
    }

    /// Returns the weight of the edge between `a` and `b`, in either order.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if `a` or `b` is not a node of the graph
    /// - [`Error::NoSuchEdge`] if `a` and `b` are not adjacent
    pub fn weight(&self, a: &K, b: &K) -> Result<W> {
        let (id_a, id_b) = (self.node_id(a)?, self.node_id(b)?);
        self.graph
            .weight_between(id_a, id_b)
            .ok_or_else(|| Error::NoSuchEdge(describe(a), describe(b)))
    }

    /// Maps a node ID sequence produced by an algorithm back to keys.
    pub(crate) fn to_path(&self, nodes: &[NodeId], total_weight: W) -> Path<K, W> {
        let keys = nodes
            .iter()
            .filter_map(|&node| self.key(node).cloned())
            .collect();
        Path::new(keys, total_weight)
    }

    /// Sums the weights along a node ID sequence known to be a path of this graph.
    pub(crate) fn weight_of(&self, nodes: &[NodeId]) -> Result<W> {
        total(
            nodes
                .windows(2)
                .filter_map(|pair| self.graph.weight_between(pair[0], pair[1])),
        )
        .ok_or_else(|| self.overflow(nodes))
    }

    /// Builds a keyed [`Error::WeightOverflow`] for the path `nodes`.
    pub(crate) fn overflow(&self, nodes: &[NodeId]) -> Error {
        let describe_at = |node: Option<&NodeId>| {
            node.and_then(|&node| self.key(node))
                .map(describe)
                .unwrap_or_default()
        };
        Error::WeightOverflow {
            start: describe_at(nodes.first()),
            end: describe_at(nodes.last()),
        }
    }

    /// Runs Dijkstra on resolved endpoints, reporting failures in terms of keys.
    pub(crate) fn shortest_ids(&self, start: &K, end: &K) -> Result<(Vec<NodeId>, W)> {
        let (id_start, id_end) = (self.node_id(start)?, self.node_id(end)?);
        algorithms::shortest_path(&self.graph, id_start, id_end).map_err(|error| match error {
            Error::NoPath { .. } => Error::NoPath {
                start: describe(start),
                end: describe(end),
            },
            Error::WeightOverflow { .. } => Error::WeightOverflow {
                start: describe(start),
                end: describe(end),
            },
            other => other,
        })
    }

    /// Computes the minimum-weight path from `start` to `end`.
    ///
    /// `start == end` yields the single-node path with weight zero. Among several
    /// minimum-weight paths the result is deterministic for a given build order.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if `start` or `end` is not a node of the graph
    /// - [`Error::NoPath`] if `end` is unreachable from `start`
    /// - [`Error::WeightOverflow`] if every path to `end` sums past the weight type's maximum
    pub fn shortest_path(&self, start: &K, end: &K) -> Result<Path<K, W>> {
        let (nodes, weight) = self.shortest_ids(start, end)?;
        Ok(self.to_path(&nodes, weight))
    }

    /// Returns the shortest distance from `start` to every reachable node.
    ///
    /// The result is in node insertion order and includes `start` itself at distance zero.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if `start` is not a node of the graph
    /// - [`Error::WeightOverflow`] if a connected node's distance does not fit the weight type
    pub fn distances_from(&self, start: &K) -> Result<Vec<(&K, W)>> {
        let source = self.node_id(start)?;
        let tree = algorithms::shortest_path_tree(&self.graph, source)?;
        if let Some(node) = tree.out_of_range().next() {
            return Err(self.overflow(&[source, node]));
        }
        Ok(tree
            .reachable()
            .filter_map(|(node, distance)| Some((self.key(node)?, distance)))
            .collect())
    }

    /// Returns a lazy iterator over every simple path from `start` to `end`.
    ///
    /// Paths come out in depth-first order with neighbors taken in edge insertion order.
    /// `start == end` yields exactly one single-node path. If `end` is unreachable the
    /// iterator is empty. A path whose total weight overflows the weight type is yielded
    /// as [`Error::WeightOverflow`]; enumeration continues past it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` or `end` is not a node of the graph.
    pub fn all_simple_paths(
        &self,
        start: &K,
        end: &K,
    ) -> Result<impl Iterator<Item = Result<Path<K, W>>> + '_> {
        let paths =
            algorithms::all_simple_paths(&self.graph, self.node_id(start)?, self.node_id(end)?)?;
        Ok(paths.map(|nodes| Ok(self.to_path(&nodes, self.weight_of(&nodes)?))))
    }

    /// Like [`Graph::all_simple_paths`], limited to paths of at most `max_edges` edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if `start` or `end` is not a node of the graph.
    pub fn all_simple_paths_with_cutoff(
        &self,
        start: &K,
        end: &K,
        max_edges: usize,
    ) -> Result<impl Iterator<Item = Result<Path<K, W>>> + '_> {
        let paths = algorithms::all_simple_paths_with_cutoff(
            &self.graph,
            self.node_id(start)?,
            self.node_id(end)?,
            max_edges,
        )?;
        Ok(paths.map(|nodes| Ok(self.to_path(&nodes, self.weight_of(&nodes)?))))
    }

    /// Ranks key sequences by total weight, ascending.
    ///
    /// Equal weights keep their supplied order under [`TieBreak::Enumeration`] and are
    /// ordered by node insertion index under [`TieBreak::NodeOrder`].
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`] if a sequence names a key that is not a node
    /// - [`Error::NoSuchEdge`] if two consecutive keys of a sequence are not adjacent
    /// - [`Error::WeightOverflow`] if a sequence's total weight overflows the weight type
    pub fn rank(
        &self,
        paths: impl IntoIterator<Item = Vec<K>>,
        tie_break: TieBreak,
    ) -> Result<Vec<Path<K, W>>> {
        let mut candidates = Vec::new();
        for keys in paths {
            let nodes = keys
                .iter()
                .map(|key| self.node_id(key))
                .collect::<Result<Vec<_>>>()?;
            for (pair, ids) in keys.windows(2).zip(nodes.windows(2)) {
                if self.graph.find_edge(ids[0], ids[1]).is_none() {
                    return Err(Error::NoSuchEdge(describe(&pair[0]), describe(&pair[1])));
                }
            }
            // Reports overflow in keys before the id-level ranker sees the sequence
            self.weight_of(&nodes)?;
            candidates.push(nodes);
        }

        let ranked = algorithms::rank(&self.graph, candidates, tie_break)?;
        Ok(ranked
            .iter()
            .map(|path| self.to_path(&path.nodes, path.weight))
            .collect())
    }
}

impl<W: Weight> Graph<usize, W> {
    /// Builds a graph whose nodes are the integers `0..node_count`.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::build`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathscope::Graph;
    ///
    /// let graph = Graph::with_node_range(3, [(0, 1, 2u64), (1, 2, 2)])?;
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.shortest_path(&0, &2)?.total_weight(), 4);
    /// # Ok::<(), pathscope::Error>(())
    /// ```
    pub fn with_node_range(
        node_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, W)>,
    ) -> Result<Self> {
        Self::build(0..node_count, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::reference_graph;

    fn cities() -> Graph<&'static str, u32> {
        Graph::build(
            ["amber", "birch", "cedar", "dune", "elm"],
            [
                ("amber", "birch", 7),
                ("amber", "cedar", 9),
                ("birch", "cedar", 1),
                ("cedar", "dune", 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_build_counts() {
        let graph = cities();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert!(!graph.is_empty());
        assert!(graph.contains(&"elm"));
        assert!(!graph.contains(&"fir"));
        assert_eq!(
            graph.nodes().copied().collect::<Vec<_>>(),
            vec!["amber", "birch", "cedar", "dune", "elm"]
        );
    }

    #[test]
    fn test_build_rejects_unknown_endpoint() {
        let err = Graph::<&str, u32>::build(["a", "b"], [("a", "z", 1)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEdge {
                message: "edge (\"a\", \"z\") references node \"z\" which is not in the node set"
                    .to_string()
            }
        );
    }

    #[test]
    fn test_build_rejects_self_loop() {
        let err = Graph::<u8, u32>::build([1, 2], [(2, 2, 1)]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid edge - edge (2, 2) is a self-loop");
    }

    #[test]
    fn test_build_rejects_negative_weight() {
        let err = Graph::<u8, i64>::build([0, 1], [(0, 1, -3)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWeight {
                a: "0".to_string(),
                b: "1".to_string(),
                weight: "-3".to_string(),
            }
        );
    }

    #[test]
    fn test_build_errors_name_keys() {
        let err = Graph::<&str, f64>::build(["x", "y"], [("x", "x", -1.0)]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid edge - edge (\"x\", \"x\") is a self-loop");

        let err = Graph::<&str, f64>::build(["x", "y"], [("y", "x", -1.5)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidWeight {
                a: "\"y\"".to_string(),
                b: "\"x\"".to_string(),
                weight: "-1.5".to_string(),
            }
        );
    }

    #[test]
    fn test_build_rejects_nan_weight() {
        let result = Graph::<u8, f64>::build([0, 1], [(0, 1, f64::NAN)]);
        assert!(matches!(result, Err(Error::InvalidWeight { .. })));
    }

    #[test]
    fn test_duplicate_edge_last_write_wins() {
        let graph = Graph::<u8, u32>::build([0, 1, 2], [(0, 1, 5), (1, 2, 1), (1, 0, 2)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight(&0, &1), Ok(2));
        // The pair keeps its original position in neighbor order
        assert_eq!(graph.neighbors(&1).unwrap().collect::<Vec<_>>(), vec![&0, &2]);
    }

    #[test]
    fn test_duplicate_node_ignored() {
        let graph = Graph::<&str, u32>::build(["x", "y", "x"], [("x", "y", 1)]).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node_id(&"y").unwrap(), NodeId::new(1));
    }

    #[test]
    fn test_neighbors() {
        let graph = cities();
        let of_cedar: Vec<_> = graph.neighbors(&"cedar").unwrap().copied().collect();
        assert_eq!(of_cedar, vec!["amber", "birch", "dune"]);
        assert_eq!(graph.neighbors(&"elm").unwrap().count(), 0);
        assert!(matches!(
            graph.neighbors(&"fir"),
            Err(Error::NodeNotFound(_))
        ));
        assert_eq!(graph.degree(&"cedar"), Ok(3));
    }

    #[test]
    fn test_weight_lookup() {
        let graph = cities();
        assert_eq!(graph.weight(&"cedar", &"amber"), Ok(9));
        assert_eq!(
            graph.weight(&"amber", &"dune"),
            Err(Error::NoSuchEdge("\"amber\"".to_string(), "\"dune\"".to_string()))
        );
        assert_eq!(
            graph.weight(&"amber", &"fir"),
            Err(Error::NodeNotFound("\"fir\"".to_string()))
        );
    }

    #[test]
    fn test_edges_in_insertion_order() {
        let graph = cities();
        let edges: Vec<_> = graph.edges().map(|(a, b, w)| (*a, *b, w)).collect();
        assert_eq!(edges[0], ("amber", "birch", 7));
        assert_eq!(edges[3], ("cedar", "dune", 2));
    }

    #[test]
    fn test_shortest_path_keyed() {
        let graph = cities();
        let path = graph.shortest_path(&"amber", &"dune").unwrap();
        assert_eq!(path.nodes(), &["amber", "birch", "cedar", "dune"]);
        assert_eq!(path.total_weight(), 10);

        assert_eq!(
            graph.shortest_path(&"amber", &"elm"),
            Err(Error::NoPath {
                start: "\"amber\"".to_string(),
                end: "\"elm\"".to_string(),
            })
        );
    }

    #[test]
    fn test_reference_shortest_path() {
        let graph = reference_graph();
        let path = graph.shortest_path(&0, &15).unwrap();
        assert_eq!(path.nodes(), &[0, 1, 5, 10, 12, 14, 15]);
        assert_eq!(path.total_weight(), 41);
    }

    #[test]
    fn test_distances_from() {
        let graph = reference_graph();
        let distances: HashMap<usize, u32> = graph
            .distances_from(&0)
            .unwrap()
            .into_iter()
            .map(|(k, d)| (*k, d))
            .collect();

        assert_eq!(distances.len(), 16);
        assert_eq!(distances[&0], 0);
        assert_eq!(distances[&6], 5);
        assert_eq!(distances[&11], 26);
        assert_eq!(distances[&13], 40);
        assert_eq!(distances[&15], 41);
    }

    #[test]
    fn test_all_simple_paths_keyed() {
        let graph = cities();
        let paths = graph
            .all_simple_paths(&"amber", &"dune")
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].nodes(), &["amber", "birch", "cedar", "dune"]);
        assert_eq!(paths[0].total_weight(), 10);
        assert_eq!(paths[1].total_weight(), 11);

        let short = graph
            .all_simple_paths_with_cutoff(&"amber", &"dune", 2)
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(short.len(), 1);
    }

    #[test]
    fn test_rank_keyed() {
        let graph = cities();
        let ranked = graph
            .rank(
                vec![vec!["amber", "cedar", "dune"], vec!["amber", "birch", "cedar", "dune"]],
                TieBreak::Enumeration,
            )
            .unwrap();
        assert_eq!(ranked[0].total_weight(), 10);
        assert_eq!(ranked[1].total_weight(), 11);

        assert_eq!(
            graph.rank(vec![vec!["amber", "dune"]], TieBreak::Enumeration),
            Err(Error::NoSuchEdge("\"amber\"".to_string(), "\"dune\"".to_string()))
        );
    }

    fn heavy() -> Graph<&'static str, u32> {
        // Via "near" the sum passes u32::MAX; via "far" it lands exactly on it
        Graph::build(
            ["home", "near", "far", "away", "beyond"],
            [
                ("home", "near", u32::MAX - 1),
                ("near", "away", 5),
                ("home", "far", u32::MAX),
                ("far", "away", 0),
                ("away", "beyond", 1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_overflow_never_wins() {
        let graph = heavy();
        let path = graph.shortest_path(&"home", &"away").unwrap();
        assert_eq!(path.nodes(), &["home", "far", "away"]);
        assert_eq!(path.total_weight(), u32::MAX);

        assert_eq!(
            graph.shortest_path(&"home", &"beyond"),
            Err(Error::WeightOverflow {
                start: "\"home\"".to_string(),
                end: "\"beyond\"".to_string(),
            })
        );
        assert!(matches!(
            graph.distances_from(&"home"),
            Err(Error::WeightOverflow { .. })
        ));
    }

    #[test]
    fn test_overflowing_paths_reported() {
        let graph = heavy();
        let paths: Vec<_> = graph.all_simple_paths(&"home", &"away").unwrap().collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[0],
            Err(Error::WeightOverflow {
                start: "\"home\"".to_string(),
                end: "\"away\"".to_string(),
            })
        );
        assert_eq!(paths[1].as_ref().map(Path::total_weight), Ok(u32::MAX));

        assert!(matches!(
            graph.rank(vec![vec!["home", "near", "away"]], TieBreak::Enumeration),
            Err(Error::WeightOverflow { .. })
        ));
    }

    #[test]
    fn test_with_node_range() {
        let graph = Graph::with_node_range(4, [(0, 3, 1.5f64)]).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.key(NodeId::new(2)), Some(&2));
        assert_eq!(graph.weight(&3, &0), Ok(1.5));
    }

    #[test]
    fn test_graph_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph<String, u64>>();
        assert_send_sync::<Graph<usize, f64>>();
    }
}
