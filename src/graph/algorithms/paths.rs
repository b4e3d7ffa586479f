//! Lazy enumeration of simple paths.
//!
//! The number of simple paths between two nodes can grow exponentially with the size
//! of the graph, so paths are produced one at a time by [`SimplePaths`], an explicit
//! depth-first search that keeps its whole state in the iterator. Callers bound the
//! work by pulling fewer items (`take`), by a depth cutoff
//! ([`all_simple_paths_with_cutoff`]), or by dropping the iterator.
//!
//! # Order
//!
//! Paths are yielded in DFS order: neighbors are explored in the order the graph
//! reports them, which for [`UndirectedGraph`](crate::graph::UndirectedGraph) is edge
//! insertion order. The ranker relies on this order to break ties between paths of
//! equal weight.

use crate::{
    graph::{GraphBase, Neighbors, NodeId},
    Error, Result,
};

/// Iterator over all simple paths between two nodes.
///
/// Each item is a node sequence starting at `start` and ending at `end` in which no
/// node repeats. The search never extends a path past `end`.
///
/// The iterator is not restartable. Create a new one with [`all_simple_paths`] to
/// enumerate again.
///
/// # Type Parameters
///
/// * `'g` - Lifetime of the graph reference
/// * `G` - Graph type implementing [`Neighbors`]
pub struct SimplePaths<'g, G: Neighbors> {
    graph: &'g G,
    end: NodeId,
    max_edges: Option<usize>,
    /// The current partial path, always starting at `start`
    path: Vec<NodeId>,
    on_path: Vec<bool>,
    /// Unexplored neighbors of each node in `path`, one list per path node
    pending: Vec<std::vec::IntoIter<NodeId>>,
    /// Set when `start == end` and the single-node path has not been yielded yet
    trivial: Option<NodeId>,
}

impl<'g, G: Neighbors> SimplePaths<'g, G> {
    fn new(graph: &'g G, start: NodeId, end: NodeId, max_edges: Option<usize>) -> Self {
        let mut paths = SimplePaths {
            graph,
            end,
            max_edges,
            path: Vec::new(),
            on_path: Vec::new(),
            pending: Vec::new(),
            trivial: None,
        };

        if start == end {
            paths.trivial = Some(start);
            return paths;
        }

        if max_edges == Some(0) {
            return paths;
        }

        paths.on_path = vec![false; graph.node_count()];
        paths.push(start);
        paths
    }

    fn push(&mut self, node: NodeId) {
        self.on_path[node.index()] = true;
        self.path.push(node);
        self.pending
            .push(self.graph.neighbors(node).collect::<Vec<_>>().into_iter());
    }

    fn pop(&mut self) {
        self.pending.pop();
        if let Some(node) = self.path.pop() {
            self.on_path[node.index()] = false;
        }
    }

    /// Returns `true` if a path with `edges` edges respects the cutoff.
    fn within_cutoff(&self, edges: usize) -> bool {
        self.max_edges.is_none_or(|max| edges <= max)
    }

    /// Returns the number of nodes on the current partial path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl<G: Neighbors> Iterator for SimplePaths<'_, G> {
    type Item = Vec<NodeId>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(node) = self.trivial.take() {
            return Some(vec![node]);
        }

        loop {
            let Some(neighbor) = self.pending.last_mut()?.next() else {
                self.pop();
                continue;
            };

            if self.on_path[neighbor.index()] {
                continue;
            }

            if neighbor == self.end {
                // The current path plus `end` has exactly `path.len()` edges
                if self.within_cutoff(self.path.len()) {
                    let mut found = Vec::with_capacity(self.path.len() + 1);
                    found.extend_from_slice(&self.path);
                    found.push(neighbor);
                    log::trace!("simple path with {} edges found", found.len() - 1);
                    return Some(found);
                }
                continue;
            }

            // Descending makes the shortest possible completion `path.len() + 1` edges long
            if self.within_cutoff(self.path.len() + 1) {
                self.push(neighbor);
            }
        }
    }
}

fn check_endpoints<G: GraphBase>(graph: &G, start: NodeId, end: NodeId) -> Result<()> {
    for node in [start, end] {
        if !graph.contains_node(node) {
            return Err(Error::NodeNotFound(node.to_string()));
        }
    }
    Ok(())
}

/// Returns a lazy iterator over every simple path from `start` to `end`.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `start` - The first node of every path
/// * `end` - The last node of every path
///
/// # Returns
///
/// A [`SimplePaths`] iterator. `start == end` yields exactly one path `[start]`; if no
/// path exists the iterator is empty.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` or `end` is not a node of `graph`.
///
/// # Complexity
///
/// - Time: O(V!) in the worst case across the whole enumeration
/// - Space: O(V + E) for the partial path and pending neighbor lists
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::{algorithms::all_simple_paths, NodeId, UndirectedGraph};
///
/// let n = NodeId::new;
/// // A square: 0 - 1 - 3 and 0 - 2 - 3
/// let graph = UndirectedGraph::from_edges(
///     vec![(); 4],
///     [(n(0), n(1), 1u32), (n(0), n(2), 1), (n(1), n(3), 1), (n(2), n(3), 1)],
/// )?;
///
/// let paths: Vec<Vec<NodeId>> = all_simple_paths(&graph, n(0), n(3))?.collect();
/// assert_eq!(paths, vec![vec![n(0), n(1), n(3)], vec![n(0), n(2), n(3)]]);
/// # Ok::<(), pathscope::Error>(())
/// ```
pub fn all_simple_paths<G: Neighbors>(
    graph: &G,
    start: NodeId,
    end: NodeId,
) -> Result<SimplePaths<'_, G>> {
    check_endpoints(graph, start, end)?;
    Ok(SimplePaths::new(graph, start, end, None))
}

/// Returns a lazy iterator over every simple path from `start` to `end` with at most
/// `max_edges` edges.
///
/// A cutoff of zero only admits the single-node path when `start == end`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` or `end` is not a node of `graph`.
pub fn all_simple_paths_with_cutoff<G: Neighbors>(
    graph: &G,
    start: NodeId,
    end: NodeId,
    max_edges: usize,
) -> Result<SimplePaths<'_, G>> {
    check_endpoints(graph, start, end)?;
    Ok(SimplePaths::new(graph, start, end, Some(max_edges)))
}
