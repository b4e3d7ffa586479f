#![no_main]

use libfuzzer_sys::fuzz_target;
use pathscope::{Graph, QueryConfig};

// Input layout: node count, start, end, then (a, b, weight) byte triples
fuzz_target!(|data: &[u8]| {
    let [nodes, start, end, rest @ ..] = data else {
        return;
    };
    let node_count = usize::from(*nodes % 12);
    let edges = rest
        .chunks_exact(3)
        .map(|e| (usize::from(e[0] % 14), usize::from(e[1] % 14), i16::from(e[2] as i8)));

    let Ok(graph) = Graph::with_node_range(node_count, edges) else {
        return;
    };
    let (start, end) = (usize::from(*start % 14), usize::from(*end % 14));

    let config = QueryConfig {
        max_paths: Some(256),
        ..QueryConfig::default()
    };
    if let Ok(result) = graph.query(&start, &end, &config) {
        assert!(result
            .alternatives
            .iter()
            .all(|p| p.total_weight() >= result.shortest_weight()));
    }
});
