use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, resolve_node, RouteGraph},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct GraphInfo {
    pub node_count: usize,
    pub edge_count: usize,
    pub total_weight: f64,
    pub nodes: Vec<NodeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<DistanceInfo>,
}

#[derive(Debug, Serialize)]
pub struct NodeInfo {
    pub node: String,
    pub degree: usize,
    pub neighbors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DistanceInfo {
    pub source: String,
    pub reachable: Vec<(String, f64)>,
    pub unreachable: Vec<String>,
}

fn collect(graph: &RouteGraph, from: Option<&str>) -> anyhow::Result<GraphInfo> {
    let nodes = graph
        .nodes()
        .map(|node| {
            Ok(NodeInfo {
                node: node.to_string(),
                degree: graph.degree(node)?,
                neighbors: graph.neighbors(node)?.map(ToString::to_string).collect(),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let distances = match from {
        Some(arg) => {
            let source = resolve_node(graph, arg);
            let reachable: Vec<(String, f64)> = graph
                .distances_from(&source)?
                .into_iter()
                .map(|(node, distance)| (node.to_string(), distance))
                .collect();
            let unreachable = graph
                .nodes()
                .map(ToString::to_string)
                .filter(|node| !reachable.iter().any(|(n, _)| n == node))
                .collect();
            Some(DistanceInfo {
                source: source.to_string(),
                reachable,
                unreachable,
            })
        }
        None => None,
    };

    Ok(GraphInfo {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_weight: graph.edges().map(|(_, _, w)| w).sum(),
        nodes,
        distances,
    })
}

pub fn run(from: Option<&str>, opts: &GlobalOptions) -> anyhow::Result<()> {
    let loaded = load_graph(opts.graph.as_deref())?;
    let info = collect(&loaded.graph, from)?;

    print_output(&info, opts, |info| {
        println!("Nodes:        {}", info.node_count);
        println!("Edges:        {}", info.edge_count);
        println!("Total weight: {}", info.total_weight);

        println!("\nAdjacency:");
        let mut tw = TabWriter::new(&[
            ("Node", Align::Left),
            ("Degree", Align::Right),
            ("Neighbors", Align::Left),
        ])
        .indent("  ");
        for node in &info.nodes {
            tw.row(vec![
                node.node.clone(),
                node.degree.to_string(),
                node.neighbors.join(", "),
            ]);
        }
        tw.print();

        if let Some(distances) = &info.distances {
            println!("\nDistances from {}:", distances.source);
            let mut tw =
                TabWriter::new(&[("Node", Align::Left), ("Distance", Align::Right)]).indent("  ");
            for (node, distance) in &distances.reachable {
                tw.row(vec![node.clone(), distance.to_string()]);
            }
            for node in &distances.unreachable {
                tw.row(vec![node.clone(), "-".to_string()]);
            }
            tw.print();
        }
    })
}
