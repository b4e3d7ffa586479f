//! Query configuration
//!
//! This module provides the limits applied when [`Graph::query`](crate::Graph::query)
//! enumerates and ranks alternative paths. Simple-path enumeration is exponential in the
//! worst case, so callers facing unknown graphs should bound it.

use crate::graph::algorithms::TieBreak;

/// Configuration for a ranked path query
///
/// The shortest path is always computed in full. The limits below only bound the
/// enumeration of alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryConfig {
    /// Maximum number of alternative paths returned (`None` returns every candidate)
    pub max_alternatives: Option<usize>,

    /// Maximum number of edges an enumerated candidate may have (`None` for no limit)
    pub max_depth: Option<usize>,

    /// Maximum number of candidates enumerated before ranking (`None` for no limit)
    /// When the limit is hit the result is marked as truncated
    pub max_paths: Option<usize>,

    /// Ordering among candidates of equal weight
    pub tie_break: TieBreak,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_alternatives: Some(3),
            max_depth: None,
            max_paths: None,
            tie_break: TieBreak::Enumeration,
        }
    }
}

impl QueryConfig {
    /// Creates a configuration for interactive use on graphs of unknown size
    ///
    /// Returns three alternatives and stops enumerating after 10 000 candidates.
    #[must_use]
    pub fn interactive() -> Self {
        Self {
            max_paths: Some(10_000),
            ..Self::default()
        }
    }

    /// Creates a configuration that ranks and returns every simple path
    ///
    /// **Warning**: The number of simple paths can grow exponentially with graph size.
    #[must_use]
    pub fn exhaustive() -> Self {
        Self {
            max_alternatives: None,
            ..Self::default()
        }
    }

    /// Returns this configuration with `max_alternatives` replaced
    #[must_use]
    pub fn with_alternatives(mut self, count: usize) -> Self {
        self.max_alternatives = Some(count);
        self
    }

    /// Returns this configuration with `tie_break` replaced
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
