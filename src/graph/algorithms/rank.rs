//! Ranking of candidate paths by total weight.
//!
//! [`rank`] turns node sequences into [`RankedPath`]s by summing their edge weights
//! and sorting them ascending. The sort is stable, so paths of equal weight keep the
//! order they were supplied in (for enumerator output, DFS order) unless
//! [`TieBreak::NodeOrder`] is requested. [`top_alternatives`] then picks the best `k`
//! paths that differ from a given primary path.

use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{
    graph::{weight::total, NodeId, Weight, WeightedGraph},
    Error, Result,
};

/// How paths of equal total weight are ordered relative to each other.
///
/// Parses from and displays as kebab-case (`"enumeration"`, `"node-order"`).
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::algorithms::TieBreak;
///
/// let tie_break: TieBreak = "node-order".parse().unwrap();
/// assert_eq!(tie_break, TieBreak::NodeOrder);
/// assert_eq!(TieBreak::default().to_string(), "enumeration");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TieBreak {
    /// Keep the order in which the paths were supplied
    #[default]
    Enumeration,
    /// Order lexicographically by node index
    NodeOrder,
}

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPath<W> {
    /// The node sequence, first node to last
    pub nodes: Vec<NodeId>,
    /// Sum of the weights of all edges along the path
    pub weight: W,
    /// Position of the path in the input sequence
    pub position: usize,
}

impl<W> RankedPath<W> {
    /// Returns the number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Sums the edge weights along `nodes`.
///
/// # Errors
///
/// - [`Error::NodeNotFound`] if a node is not part of `graph`
/// - [`Error::NoSuchEdge`] if two consecutive nodes are not adjacent
/// - [`Error::WeightOverflow`] if the sum exceeds the range of the weight type
pub fn path_weight<G: WeightedGraph>(graph: &G, nodes: &[NodeId]) -> Result<G::Weight> {
    if let Some(missing) = nodes.iter().find(|&&node| !graph.contains_node(node)) {
        return Err(Error::NodeNotFound(missing.to_string()));
    }

    let weights = nodes
        .windows(2)
        .map(|pair| {
            graph
                .edge_weight(pair[0], pair[1])
                .ok_or_else(|| Error::NoSuchEdge(pair[0].to_string(), pair[1].to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    total(weights).ok_or_else(|| Error::WeightOverflow {
        start: nodes.first().map(ToString::to_string).unwrap_or_default(),
        end: nodes.last().map(ToString::to_string).unwrap_or_default(),
    })
}

/// Computes the weight of every path and sorts them ascending.
///
/// # Arguments
///
/// * `graph` - The graph the paths run through
/// * `paths` - Candidate node sequences, typically from
///   [`all_simple_paths`](super::all_simple_paths)
/// * `tie_break` - Ordering among paths of equal weight
///
/// # Errors
///
/// Fails on the first sequence that is not a path of `graph`, see [`path_weight`].
///
/// # Examples
///
/// ```rust
/// use pathscope::graph::{
///     algorithms::{all_simple_paths, rank, TieBreak},
///     NodeId, UndirectedGraph,
/// };
///
/// let n = NodeId::new;
/// let graph = UndirectedGraph::from_edges(
///     vec![(); 3],
///     [(n(0), n(1), 4u32), (n(1), n(2), 4), (n(0), n(2), 9)],
/// )?;
///
/// let ranked = rank(&graph, all_simple_paths(&graph, n(0), n(2))?, TieBreak::Enumeration)?;
/// let weights: Vec<u32> = ranked.iter().map(|p| p.weight).collect();
/// assert_eq!(weights, vec![8, 9]);
/// # Ok::<(), pathscope::Error>(())
/// ```
pub fn rank<G, I>(graph: &G, paths: I, tie_break: TieBreak) -> Result<Vec<RankedPath<G::Weight>>>
where
    G: WeightedGraph,
    I: IntoIterator<Item = Vec<NodeId>>,
{
    let mut ranked = paths
        .into_iter()
        .enumerate()
        .map(|(position, nodes)| {
            let weight = path_weight(graph, &nodes)?;
            Ok(RankedPath {
                nodes,
                weight,
                position,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    sort_ranked(&mut ranked, tie_break);
    Ok(ranked)
}

/// Sorts already weighted paths ascending by weight.
pub fn sort_ranked<W: Weight>(ranked: &mut [RankedPath<W>], tie_break: TieBreak) {
    ranked.sort_by(|a, b| {
        let by_weight = a.weight.total_cmp(&b.weight);
        match tie_break {
            TieBreak::Enumeration => by_weight,
            TieBreak::NodeOrder => by_weight.then_with(|| a.nodes.cmp(&b.nodes)),
        }
    });
}

/// Returns the first `k` ranked paths whose node sequence differs from `exclude`.
///
/// The relative order of `ranked` is preserved. Fewer than `k` paths are returned if
/// not enough remain after exclusion.
pub fn top_alternatives<'a, W>(
    ranked: &'a [RankedPath<W>],
    k: usize,
    exclude: &'a [NodeId],
) -> impl Iterator<Item = &'a RankedPath<W>> + 'a {
    ranked
        .iter()
        .filter(move |path| path.nodes.as_slice() != exclude)
        .take(k)
}
