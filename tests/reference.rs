//! Integration tests against the reference road network.
//!
//! The network has 16 nodes and 18 edges. Between node 0 and node 15 there are
//! exactly four simple paths:
//!
//! | Route | Weight |
//! |-------|--------|
//! | 0 → 1 → 5 → 10 → 12 → 14 → 15 | 41 |
//! | 0 → 3 → 6 → 9 → 11 → 14 → 15 | 43 |
//! | 0 → 2 → 7 → 8 → 11 → 14 → 15 | 49 |
//! | 0 → 2 → 4 → 7 → 8 → 11 → 14 → 15 | 57 |

use pathscope::{graph::algorithms::TieBreak, prelude::*, Result};

const EDGES: [(usize, usize, u32); 18] = [
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

fn network() -> Result<Graph<usize, u32>> {
    Graph::with_node_range(16, EDGES)
}

#[test]
fn test_build() -> Result<()> {
    let graph = network()?;
    assert_eq!(graph.node_count(), 16);
    assert_eq!(graph.edge_count(), 18);
    assert_eq!(graph.neighbors(&14)?.copied().collect::<Vec<_>>(), vec![11, 12, 13, 15]);
    assert_eq!(graph.degree(&13)?, 1);
    assert_eq!(graph.weight(&12, &14)?, 3);
    Ok(())
}

#[test]
fn test_shortest_path() -> Result<()> {
    let graph = network()?;
    let path = graph.shortest_path(&0, &15)?;

    assert_eq!(path.nodes(), &[0, 1, 5, 10, 12, 14, 15]);
    assert_eq!(path.total_weight(), 41);
    assert_eq!(path.to_string(), "0 -> 1 -> 5 -> 10 -> 12 -> 14 -> 15");

    let hop_weights = path
        .edges()
        .map(|(a, b)| graph.weight(a, b))
        .collect::<Result<Vec<_>>>()?;
    assert_eq!(hop_weights, vec![5, 9, 6, 8, 3, 10]);
    Ok(())
}

#[test]
fn test_shortest_path_is_idempotent() -> Result<()> {
    let graph = network()?;
    let first = graph.shortest_path(&0, &15)?;
    for _ in 0..5 {
        assert_eq!(graph.shortest_path(&0, &15)?, first);
    }
    Ok(())
}

#[test]
fn test_shortest_path_reverse_direction() -> Result<()> {
    let graph = network()?;
    let path = graph.shortest_path(&15, &0)?;
    assert_eq!(path.nodes(), &[15, 14, 12, 10, 5, 1, 0]);
    assert_eq!(path.total_weight(), 41);
    Ok(())
}

#[test]
fn test_all_simple_paths() -> Result<()> {
    let graph = network()?;
    let weights = graph
        .all_simple_paths(&0, &15)?
        .map(|p| p.map(|p| p.total_weight()))
        .collect::<Result<Vec<u32>>>()?;

    // Depth-first order, neighbors in edge insertion order
    assert_eq!(weights, vec![41, 57, 49, 43]);
    Ok(())
}

#[test]
fn test_ranked_paths() -> Result<()> {
    let graph = network()?;
    let candidates = graph
        .all_simple_paths(&0, &15)?
        .map(|p| p.map(Path::into_nodes))
        .collect::<Result<Vec<_>>>()?;
    let ranked = graph.rank(candidates, TieBreak::Enumeration)?;

    let weights: Vec<u32> = ranked.iter().map(Path::total_weight).collect();
    assert_eq!(weights, vec![41, 43, 49, 57]);
    assert_eq!(ranked[0], graph.shortest_path(&0, &15)?);
    Ok(())
}

#[test]
fn test_query_default() -> Result<()> {
    let graph = network()?;
    let result = graph.query(&0, &15, &QueryConfig::default())?;

    assert_eq!(result.shortest_weight(), 41);
    assert_eq!(result.alternatives.len(), 3);
    assert_eq!(result.candidates, 4);
    assert_eq!(result.alternatives[0].nodes(), &[0, 3, 6, 9, 11, 14, 15]);
    assert_eq!(result.alternatives[1].nodes(), &[0, 2, 7, 8, 11, 14, 15]);
    assert_eq!(result.alternatives[2].nodes(), &[0, 2, 4, 7, 8, 11, 14, 15]);
    assert!(result
        .alternatives
        .iter()
        .all(|p| p.total_weight() >= result.shortest_weight()));
    Ok(())
}

#[test]
fn test_distances() -> Result<()> {
    let graph = network()?;
    let distances = graph.distances_from(&0)?;
    let expected = [
        (0, 0),
        (1, 5),
        (2, 2),
        (3, 4),
        (4, 10),
        (5, 14),
        (6, 5),
        (7, 7),
        (8, 17),
        (9, 16),
        (10, 20),
        (11, 26),
        (12, 28),
        (13, 40),
        (14, 31),
        (15, 41),
    ];

    let actual: Vec<(usize, u32)> = distances.into_iter().map(|(k, d)| (*k, d)).collect();
    assert_eq!(actual, expected.to_vec());
    Ok(())
}

#[test]
fn test_start_equals_end() -> Result<()> {
    let graph = network()?;
    let path = graph.shortest_path(&9, &9)?;
    assert_eq!(path.nodes(), &[9]);
    assert_eq!(path.total_weight(), 0);
    assert_eq!(graph.all_simple_paths(&9, &9)?.count(), 1);
    Ok(())
}

#[test]
fn test_unknown_nodes() -> Result<()> {
    let graph = network()?;
    assert_eq!(
        graph.shortest_path(&0, &16),
        Err(Error::NodeNotFound("16".to_string()))
    );
    assert!(graph.all_simple_paths(&99, &0).is_err());
    assert!(graph.query(&0, &42, &QueryConfig::default()).is_err());
    Ok(())
}

#[test]
fn test_disconnected_component() -> Result<()> {
    // The reference network plus an island of two nodes
    let mut edges = EDGES.to_vec();
    edges.push((16, 17, 1));
    let graph = Graph::with_node_range(18, edges)?;

    assert_eq!(
        graph.shortest_path(&0, &17),
        Err(Error::NoPath {
            start: "0".to_string(),
            end: "17".to_string(),
        })
    );
    assert_eq!(graph.all_simple_paths(&0, &17)?.count(), 0);
    Ok(())
}

#[test]
fn test_string_keys() -> Result<()> {
    let names = [
        "harbor", "mill", "ford", "quarry", "bridge", "chapel", "well", "market", "tannery",
        "orchard", "gate", "forge", "tower", "shrine", "square", "castle",
    ];
    let graph: Graph<&str, u32> = Graph::build(
        names,
        EDGES.iter().map(|&(a, b, w)| (names[a], names[b], w)),
    )?;

    let path = graph.shortest_path(&"harbor", &"castle")?;
    assert_eq!(
        path.to_string(),
        "harbor -> mill -> chapel -> gate -> tower -> square -> castle"
    );
    assert_eq!(path.total_weight(), 41);
    Ok(())
}

#[test]
fn test_overflowing_sums_are_not_clamped() -> Result<()> {
    let graph = Graph::with_node_range(
        4,
        [(0, 1, u32::MAX - 1), (1, 3, 5), (0, 2, u32::MAX), (2, 3, 0)],
    )?;

    let path = graph.shortest_path(&0, &3)?;
    assert_eq!(path.nodes(), &[0, 2, 3]);
    assert_eq!(path.total_weight(), u32::MAX);

    let enumerated: Vec<_> = graph.all_simple_paths(&0, &3)?.collect();
    assert!(matches!(enumerated[0], Err(Error::WeightOverflow { .. })));
    assert_eq!(enumerated[1].as_ref().map(Path::total_weight), Ok(u32::MAX));
    Ok(())
}
