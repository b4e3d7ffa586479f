use crate::Graph;

/// Edges of the reference road network: 16 nodes, 18 edges.
pub const REFERENCE_EDGES: [(usize, usize, u32); 18] = [
    (0, 1, 5),
    (0, 2, 2),
    (0, 3, 4),
    (1, 5, 9),
    (2, 4, 8),
    (2, 7, 5),
    (3, 6, 1),
    (4, 7, 5),
    (5, 10, 6),
    (6, 9, 11),
    (7, 8, 10),
    (8, 11, 15),
    (9, 11, 10),
    (10, 12, 8),
    (11, 14, 7),
    (12, 14, 3),
    (13, 14, 9),
    (14, 15, 10),
];

/// Builds the reference road network over nodes `0..16`.
pub fn reference_graph() -> Graph<usize, u32> {
    Graph::with_node_range(16, REFERENCE_EDGES).unwrap()
}
