use thiserror::Error;

macro_rules! invalid_edge {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidEdge {
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidEdge {
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every precondition violation is surfaced to the immediate caller. Graph queries are
/// deterministic, so none of these errors is transient and retrying the same call with the
/// same input will fail the same way.
///
/// Node and weight values are carried as their `Debug` rendering so that the error type
/// stays independent of the caller's key and weight types.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::InvalidEdge`] - Edge references an unknown node, or is a self-loop
/// - [`Error::InvalidWeight`] - Edge weight is negative (or NaN)
///
/// ## Query Errors
/// - [`Error::NodeNotFound`] - A query names a node that is not part of the graph
/// - [`Error::NoSuchEdge`] - Weight lookup for a non-adjacent pair
/// - [`Error::NoPath`] - The target is unreachable from the source
/// - [`Error::WeightOverflow`] - A path's total weight does not fit the weight type
///
/// # Examples
///
/// ```rust
/// use pathscope::{Error, Graph};
///
/// let graph: Graph<&str, u32> = Graph::build(["a", "b", "c"], [("a", "b", 1)])?;
///
/// match graph.shortest_path(&"a", &"c") {
///     Ok(path) => println!("{path}"),
///     Err(Error::NoPath { start, end }) => println!("{start} cannot reach {end}"),
///     Err(e) => println!("Other error: {e}"),
/// }
/// # Ok::<(), pathscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge could not be added to the graph.
    ///
    /// Raised while building a graph when an edge names a node outside the supplied
    /// node set, or when both endpoints are the same node.
    #[error("Invalid edge - {message}")]
    InvalidEdge {
        /// Description of what was wrong with the edge
        message: String,
    },

    /// An edge carries a weight that shortest-path search cannot handle.
    ///
    /// Dijkstra's algorithm silently produces wrong answers on negative weights, so they
    /// are rejected when the graph is built and again when an edge is relaxed.
    #[error("Invalid weight {weight} on edge ({a}, {b}) - weights must be non-negative")]
    InvalidWeight {
        /// First endpoint of the offending edge
        a: String,
        /// Second endpoint of the offending edge
        b: String,
        /// The rejected weight
        weight: String,
    },

    /// There is no edge between the two nodes.
    #[error("No edge between {0} and {1}")]
    NoSuchEdge(String, String),

    /// The end node cannot be reached from the start node.
    ///
    /// The two nodes lie in different connected components.
    #[error("No path from {start} to {end}")]
    NoPath {
        /// The source node of the query
        start: String,
        /// The unreachable target node
        end: String,
    },

    /// The requested node is not part of the graph.
    #[error("Node {0} does not exist in graph")]
    NodeNotFound(String),

    /// A path's total weight exceeds the range of the weight type.
    ///
    /// Raised instead of clamping, so two paths past the maximum are never reported as
    /// equally heavy. Use a wider weight type for graphs with sums this large.
    #[error("Total weight of a path from {start} to {end} overflows the weight type")]
    WeightOverflow {
        /// First node of the path
        start: String,
        /// Last node of the path
        end: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_edge_macro() {
        let plain = invalid_edge!("self-loop");
        assert_eq!(
            plain,
            Error::InvalidEdge {
                message: "self-loop".to_string()
            }
        );

        let formatted = invalid_edge!("edge ({}, {}) is a self-loop", 3, 3);
        assert_eq!(
            formatted.to_string(),
            "Invalid edge - edge (3, 3) is a self-loop"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::InvalidWeight {
            a: "0".to_string(),
            b: "1".to_string(),
            weight: "-5".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid weight -5 on edge (0, 1) - weights must be non-negative"
        );

        let err = Error::NoPath {
            start: "0".to_string(),
            end: "9".to_string(),
        };
        assert_eq!(err.to_string(), "No path from 0 to 9");

        let err = Error::NoSuchEdge("\"a\"".to_string(), "\"c\"".to_string());
        assert_eq!(err.to_string(), "No edge between \"a\" and \"c\"");

        assert_eq!(
            Error::NodeNotFound("42".to_string()).to_string(),
            "Node 42 does not exist in graph"
        );

        let err = Error::WeightOverflow {
            start: "n0".to_string(),
            end: "n3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Total weight of a path from n0 to n3 overflows the weight type"
        );
    }
}
