//! Paths expressed in caller node keys.
//!
//! [`Path`] is what the keyed [`Graph`](crate::Graph) returns from every query: the node
//! sequence from start to end together with its total weight. [`RankedPathSet`] bundles
//! the primary (shortest) path with its ranked alternatives.

use std::fmt;

/// A simple path through a [`Graph`](crate::Graph).
///
/// Consecutive nodes are adjacent in the graph the path came from, no node repeats, and
/// `total_weight` is the sum of the edge weights along it. A single-node path has
/// weight zero.
///
/// Displays as the node sequence joined by arrows:
///
/// ```rust
/// use pathscope::Graph;
///
/// let graph: Graph<&str, u32> = Graph::build(["a", "b", "c"], [("a", "b", 2), ("b", "c", 3)])?;
/// let path = graph.shortest_path(&"a", &"c")?;
///
/// assert_eq!(path.to_string(), "a -> b -> c");
/// assert_eq!(path.total_weight(), 5);
/// assert_eq!(path.hops(), 2);
/// # Ok::<(), pathscope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path<K, W> {
    nodes: Vec<K>,
    total_weight: W,
}

impl<K, W: Copy> Path<K, W> {
    pub(crate) fn new(nodes: Vec<K>, total_weight: W) -> Self {
        Path {
            nodes,
            total_weight,
        }
    }

    /// Returns the node sequence, start first.
    #[must_use]
    pub fn nodes(&self) -> &[K] {
        &self.nodes
    }

    /// Returns the sum of the edge weights along the path.
    #[must_use]
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Returns the first node.
    #[must_use]
    pub fn start(&self) -> Option<&K> {
        self.nodes.first()
    }

    /// Returns the last node.
    #[must_use]
    pub fn end(&self) -> Option<&K> {
        self.nodes.last()
    }

    /// Returns the number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Returns an iterator over the edges of the path as consecutive node pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.nodes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Returns `true` if `node` lies on the path.
    pub fn contains(&self, node: &K) -> bool
    where
        K: PartialEq,
    {
        self.nodes.contains(node)
    }

    /// Consumes the path and returns its node sequence.
    #[must_use]
    pub fn into_nodes(self) -> Vec<K> {
        self.nodes
    }
}

impl<K: fmt::Display, W> fmt::Display for Path<K, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// The result of a [`Graph::query`](crate::Graph::query).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPathSet<K, W> {
    /// The minimum-weight path from start to end
    pub primary: Path<K, W>,
    /// Other simple paths in ascending weight order, the primary path excluded
    pub alternatives: Vec<Path<K, W>>,
    /// Number of candidate paths enumerated for ranking
    pub candidates: usize,
    /// `true` if enumeration stopped at the configured candidate limit
    pub truncated: bool,
}

impl<K, W: Copy> RankedPathSet<K, W> {
    /// Returns an iterator over the primary path followed by the alternatives.
    pub fn iter(&self) -> impl Iterator<Item = &Path<K, W>> + '_ {
        std::iter::once(&self.primary).chain(self.alternatives.iter())
    }

    /// Returns the total weight of the primary path.
    #[must_use]
    pub fn shortest_weight(&self) -> W {
        self.primary.total_weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_accessors() {
        let path = Path::new(vec![0usize, 3, 6, 9], 16u32);
        assert_eq!(path.nodes(), &[0, 3, 6, 9]);
        assert_eq!(path.start(), Some(&0));
        assert_eq!(path.end(), Some(&9));
        assert_eq!(path.hops(), 3);
        assert!(path.contains(&6));
        assert!(!path.contains(&7));

        let edges: Vec<(usize, usize)> = path.edges().map(|(a, b)| (*a, *b)).collect();
        assert_eq!(edges, vec![(0, 3), (3, 6), (6, 9)]);
        assert_eq!(path.into_nodes(), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_single_node_path() {
        let path = Path::new(vec!["x"], 0u32);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.edges().count(), 0);
        assert_eq!(path.to_string(), "x");
    }

    #[test]
    fn test_display() {
        let path = Path::new(vec![0usize, 1, 5, 10, 12, 14, 15], 41u32);
        assert_eq!(path.to_string(), "0 -> 1 -> 5 -> 10 -> 12 -> 14 -> 15");
    }

    #[test]
    fn test_ranked_set_iter() {
        let set = RankedPathSet {
            primary: Path::new(vec![1usize, 2], 1u32),
            alternatives: vec![Path::new(vec![1, 3, 2], 4), Path::new(vec![1, 4, 2], 6)],
            candidates: 3,
            truncated: false,
        };

        let weights: Vec<u32> = set.iter().map(Path::total_weight).collect();
        assert_eq!(weights, vec![1, 4, 6]);
        assert_eq!(set.shortest_weight(), 1);
    }
}
