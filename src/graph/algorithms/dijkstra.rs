//! Dijkstra's shortest-path algorithm.
//!
//! This module computes minimum-weight paths over graphs with non-negative edge
//! weights. Two entry points share one search loop:
//!
//! - [`shortest_path`] - Stops as soon as the target is settled and returns the path
//! - [`shortest_path_tree`] - Settles every reachable node and returns distances and
//!   predecessors for all of them
//!
//! # Frontier
//!
//! The frontier is a binary min-heap keyed by tentative distance. Entries are never
//! updated in place: a relaxation pushes a fresh entry and stale ones are skipped when
//! popped. Equal distances are ordered by push sequence, which makes the result a pure
//! function of the graph and its neighbor iteration order.
//!
//! # Weight Validation
//!
//! Every weight is checked with [`Weight::is_valid`] before it is used for relaxation.
//! Graphs built through this crate never contain invalid weights, but the algorithms
//! accept any [`WeightedGraph`] implementation.
//!
//! # Overflow
//!
//! A relaxation whose sum does not fit the weight type is dropped, since it is heavier
//! than every representable distance. The node it would have reached is remembered: if
//! a queried node can only be reached through such relaxations, the search reports
//! [`Error::WeightOverflow`] instead of [`Error::NoPath`].

use std::{
    cmp::Ordering,
    collections::BinaryHeap,
};

use crate::{
    graph::{NodeId, Weight, WeightedGraph},
    Error, Result,
};

/// A frontier entry, ordered so that `BinaryHeap` pops the smallest distance first.
struct FrontierEntry<W> {
    distance: W,
    sequence: u64,
    node: NodeId,
}

impl<W: Weight> PartialEq for FrontierEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for FrontierEntry<W> {}

impl<W: Weight> PartialOrd for FrontierEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for FrontierEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Distances and predecessors of a single-source shortest-path search.
///
/// Produced by [`shortest_path_tree`]. A node that was never reached has no distance
/// and no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree<W> {
    source: NodeId,
    distances: Vec<Option<W>>,
    predecessors: Vec<Option<NodeId>>,
    overflowed: Vec<bool>,
}

impl<W: Weight> ShortestPathTree<W> {
    /// Returns the source node of the search.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the shortest distance from the source to `node`, if reachable.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> Option<W> {
        self.distances.get(node.index()).copied().flatten()
    }

    /// Returns the node preceding `node` on its shortest path, if any.
    ///
    /// The source and unreachable nodes have no predecessor.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(node.index()).copied().flatten()
    }

    /// Returns `true` if `node` is reachable from the source.
    #[must_use]
    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    /// Returns `true` if `node` is connected to the source but every route to it sums
    /// past the maximum of the weight type.
    ///
    /// Such a node has no distance, yet it is not disconnected either.
    #[must_use]
    pub fn exceeds_range(&self, node: NodeId) -> bool {
        self.overflowed.get(node.index()).copied().unwrap_or(false) && !self.is_reachable(node)
    }

    /// Returns the nodes for which [`ShortestPathTree::exceeds_range`] holds, by node index.
    pub fn out_of_range(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.overflowed.len())
            .map(NodeId::new)
            .filter(|&node| self.exceeds_range(node))
    }

    /// Returns an iterator over `(node, distance)` for every reachable node, by node index.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, W)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (NodeId::new(i), d)))
    }

    /// Reconstructs the shortest path from the source to `node`.
    ///
    /// Returns `None` if `node` is unreachable.
    #[must_use]
    pub fn path_to(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.distance(node)?;

        let mut path = vec![node];
        let mut current = node;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Runs Dijkstra from `start`, stopping early once `target` is settled.
fn search<G: WeightedGraph>(
    graph: &G,
    start: NodeId,
    target: Option<NodeId>,
) -> Result<ShortestPathTree<G::Weight>> {
    let node_count = graph.node_count();
    let mut distances: Vec<Option<G::Weight>> = vec![None; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = vec![false; node_count];
    let mut overflowed = vec![false; node_count];
    let mut reached_target = false;

    let mut frontier = BinaryHeap::new();
    let mut sequence = 0u64;

    distances[start.index()] = Some(G::Weight::ZERO);
    frontier.push(FrontierEntry {
        distance: G::Weight::ZERO,
        sequence,
        node: start,
    });

    while let Some(FrontierEntry { distance, node, .. }) = frontier.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if Some(node) == target {
            reached_target = true;
            break;
        }

        for (neighbor, weight) in graph.weighted_neighbors(node) {
            if !weight.is_valid() {
                return Err(Error::InvalidWeight {
                    a: node.to_string(),
                    b: neighbor.to_string(),
                    weight: format!("{weight:?}"),
                });
            }
            if settled[neighbor.index()] {
                continue;
            }

            let Some(candidate) = distance.checked_accumulate(weight) else {
                log::trace!("Relaxation {node} -> {neighbor} overflows, skipped");
                overflowed[neighbor.index()] = true;
                continue;
            };
            let improves = match distances[neighbor.index()] {
                None => true,
                Some(current) => candidate.total_cmp(&current) == Ordering::Less,
            };
            if improves {
                distances[neighbor.index()] = Some(candidate);
                predecessors[neighbor.index()] = Some(node);
                sequence += 1;
                frontier.push(FrontierEntry {
                    distance: candidate,
                    sequence,
                    node: neighbor,
                });
            }
        }
    }

    if !reached_target && overflowed.contains(&true) {
        spread_overflow(graph, &distances, &mut overflowed);
    }

    Ok(ShortestPathTree {
        source: start,
        distances,
        predecessors,
        overflowed,
    })
}

/// Marks every node without a distance that is connected to an overflowed node
/// through other nodes without a distance.
fn spread_overflow<G: WeightedGraph>(
    graph: &G,
    distances: &[Option<G::Weight>],
    overflowed: &mut [bool],
) {
    let mut stack: Vec<NodeId> = (0..overflowed.len())
        .filter(|&i| overflowed[i] && distances[i].is_none())
        .map(NodeId::new)
        .collect();

    while let Some(node) = stack.pop() {
        for (neighbor, _) in graph.weighted_neighbors(node) {
            let i = neighbor.index();
            if !overflowed[i] && distances[i].is_none() {
                overflowed[i] = true;
                stack.push(neighbor);
            }
        }
    }
}

/// Computes the minimum-weight path between two nodes.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `start` - The source node
/// * `end` - The target node
///
/// # Returns
///
/// The path as a node sequence from `start` to `end` (both inclusive) and its total
/// weight. `start == end` yields `[start]` with weight zero.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `start` or `end` is not a node of `graph`
/// - [`Error::InvalidWeight`] if a negative or NaN weight is met during relaxation
/// - [`Error::NoPath`] if `end` is unreachable from `start`
/// - [`Error::WeightOverflow`] if every path to `end` sums past the weight type's maximum
///
/// # Complexity
///
/// - Time: O((V + E) log V)
/// - Space: O(V + E) for the distance table and the lazily pruned heap
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::{algorithms::shortest_path, NodeId, UndirectedGraph};
///
/// let n = NodeId::new;
/// let graph = UndirectedGraph::from_edges(
///     vec![(); 4],
///     [(n(0), n(1), 2u32), (n(1), n(3), 2), (n(0), n(2), 1), (n(2), n(3), 5)],
/// )?;
///
/// let (path, weight) = shortest_path(&graph, n(0), n(3))?;
/// assert_eq!(path, vec![n(0), n(1), n(3)]);
/// assert_eq!(weight, 4);
/// # Ok::<(), pathscope::Error>(())
/// ```
pub fn shortest_path<G: WeightedGraph>(
    graph: &G,
    start: NodeId,
    end: NodeId,
) -> Result<(Vec<NodeId>, G::Weight)> {
    for node in [start, end] {
        if !graph.contains_node(node) {
            return Err(Error::NodeNotFound(node.to_string()));
        }
    }

    let tree = search(graph, start, Some(end))?;
    match (tree.path_to(end), tree.distance(end)) {
        (Some(path), Some(distance)) => Ok((path, distance)),
        _ if tree.exceeds_range(end) => Err(Error::WeightOverflow {
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Err(Error::NoPath {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

/// Computes shortest distances from `start` to every node of the graph.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if `start` is not a node of `graph`
/// - [`Error::InvalidWeight`] if a negative or NaN weight is reachable from `start`
///
/// Nodes whose distance does not fit the weight type are unreachable in the tree and
/// flagged by [`ShortestPathTree::exceeds_range`].
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::{algorithms::shortest_path_tree, NodeId, UndirectedGraph};
///
/// let n = NodeId::new;
/// let graph = UndirectedGraph::from_edges(vec![(); 3], [(n(0), n(1), 3u32)])?;
///
/// let tree = shortest_path_tree(&graph, n(0))?;
/// assert_eq!(tree.distance(n(1)), Some(3));
/// assert!(!tree.is_reachable(n(2)));
/// # Ok::<(), pathscope::Error>(())
/// ```
pub fn shortest_path_tree<G: WeightedGraph>(
    graph: &G,
    start: NodeId,
) -> Result<ShortestPathTree<G::Weight>> {
    if !graph.contains_node(start) {
        return Err(Error::NodeNotFound(start.to_string()));
    }
    search(graph, start, None)
}
