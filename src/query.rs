//! Ranked path queries.
//!
//! [`Graph::query`] combines the three path algorithms into one call: the shortest path
//! becomes the primary result, bounded simple-path enumeration supplies the candidates,
//! and ranking orders them into alternatives. [`Graph::query_many`] runs independent
//! queries over one graph in parallel.

use std::{fmt, hash::Hash};

use rayon::prelude::*;

use crate::{
    config::QueryConfig,
    graph::{
        algorithms::{all_simple_paths, all_simple_paths_with_cutoff, rank, top_alternatives},
        NodeId, Weight,
    },
    path::RankedPathSet,
    Error, Graph, Result,
};

impl<K, W> Graph<K, W>
where
    K: Hash + Eq + Clone + fmt::Debug,
    W: Weight,
{
    /// Computes the shortest path from `start` to `end` and its ranked alternatives.
    ///
    /// # Arguments
    ///
    /// * `start` - The first node of every returned path
    /// * `end` - The last node of every returned path
    /// * `config` - Enumeration limits and ranking options
    ///
    /// # Returns
    ///
    /// A [`RankedPathSet`] whose `alternatives` exclude the primary path, are sorted by
    /// ascending weight and hold at most `config.max_alternatives` entries.
    ///
    /// # Errors
    ///
    /// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `start` or `end` is not a node
    /// - [`Error::NoPath`](crate::Error::NoPath) if `end` is unreachable from `start`
    /// - [`Error::WeightOverflow`](crate::Error::WeightOverflow) if the shortest path or any
    ///   candidate sums past the maximum of the weight type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathscope::{Graph, QueryConfig};
    ///
    /// let graph = Graph::with_node_range(4, [(0, 1, 1u32), (1, 3, 1), (0, 2, 2), (2, 3, 2), (0, 3, 5)])?;
    /// let result = graph.query(&0, &3, &QueryConfig::default())?;
    ///
    /// assert_eq!(result.primary.nodes(), &[0, 1, 3]);
    /// let weights: Vec<u32> = result.alternatives.iter().map(|p| p.total_weight()).collect();
    /// assert_eq!(weights, vec![4, 5]);
    /// assert_eq!(result.candidates, 3);
    /// # Ok::<(), pathscope::Error>(())
    /// ```
    pub fn query(&self, start: &K, end: &K, config: &QueryConfig) -> Result<RankedPathSet<K, W>> {
        let (primary, primary_weight) = self.shortest_ids(start, end)?;
        let (id_start, id_end) = (self.node_id(start)?, self.node_id(end)?);

        let paths = match config.max_depth {
            Some(max_edges) => {
                all_simple_paths_with_cutoff(self.inner(), id_start, id_end, max_edges)?
            }
            None => all_simple_paths(self.inner(), id_start, id_end)?,
        };

        let mut candidates: Vec<Vec<NodeId>> = match config.max_paths {
            // One extra candidate tells a full enumeration apart from a truncated one
            Some(limit) => paths.take(limit.saturating_add(1)).collect(),
            None => paths.collect(),
        };
        let truncated = config
            .max_paths
            .is_some_and(|limit| candidates.len() > limit);
        if let Some(limit) = config.max_paths {
            candidates.truncate(limit);
        }
        let candidate_count = candidates.len();

        // Every candidate runs from start to end, so name the overflow by those keys
        let ranked = rank(self.inner(), candidates, config.tie_break).map_err(|error| match error {
            Error::WeightOverflow { .. } => Error::WeightOverflow {
                start: format!("{start:?}"),
                end: format!("{end:?}"),
            },
            other => other,
        })?;
        let alternatives = top_alternatives(
            &ranked,
            config.max_alternatives.unwrap_or(usize::MAX),
            &primary,
        )
        .map(|path| self.to_path(&path.nodes, path.weight))
        .collect::<Vec<_>>();

        log::debug!(
            "Query {start:?} -> {end:?}: shortest weight {primary_weight}, {candidate_count} candidates{}, {} alternatives",
            if truncated { " (truncated)" } else { "" },
            alternatives.len()
        );

        Ok(RankedPathSet {
            primary: self.to_path(&primary, primary_weight),
            alternatives,
            candidates: candidate_count,
            truncated,
        })
    }

    /// Runs [`Graph::query`] for every `(start, end)` pair in parallel.
    ///
    /// Results are returned in the order of `pairs`; a failing pair does not affect
    /// the others.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathscope::{Graph, QueryConfig};
    ///
    /// let graph = Graph::with_node_range(3, [(0, 1, 1u64), (1, 2, 1)])?;
    /// let results = graph.query_many(&[(0, 2), (2, 0), (0, 7)], &QueryConfig::default());
    ///
    /// assert_eq!(results[0].as_ref().map(|r| r.shortest_weight()), Ok(2));
    /// assert_eq!(results[1].as_ref().map(|r| r.primary.nodes().to_vec()), Ok(vec![2, 1, 0]));
    /// assert!(results[2].is_err());
    /// # Ok::<(), pathscope::Error>(())
    /// ```
    pub fn query_many(
        &self,
        pairs: &[(K, K)],
        config: &QueryConfig,
    ) -> Vec<Result<RankedPathSet<K, W>>>
    where
        K: Send + Sync,
    {
        pairs
            .par_iter()
            .map(|(start, end)| self.query(start, end, config))
            .collect()
    }
}
