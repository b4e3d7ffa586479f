use std::{fmt, path::Path};

use anyhow::{bail, Context};
use pathscope::Graph;
use serde::{Deserialize, Serialize};

/// Edges of the built-in reference network, nodes `0..16`.
const REFERENCE_EDGES: [(u64, u64, f64); 18] = [
    (0, 1, 5.0),
    (0, 2, 2.0),
    (0, 3, 4.0),
    (1, 5, 9.0),
    (2, 4, 8.0),
    (2, 7, 5.0),
    (3, 6, 1.0),
    (4, 7, 5.0),
    (5, 10, 6.0),
    (6, 9, 11.0),
    (7, 8, 10.0),
    (8, 11, 15.0),
    (9, 11, 10.0),
    (10, 12, 8.0),
    (11, 14, 7.0),
    (12, 14, 3.0),
    (13, 14, 9.0),
    (14, 15, 10.0),
];

const REFERENCE_NODES: u64 = 16;
const REFERENCE_ROUTE: (u64, u64) = (0, 15);

/// A node identifier from a graph file: an integer or a name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeLabel {
    Id(u64),
    Name(String),
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Id(id) => write!(f, "{id}"),
            NodeLabel::Name(name) => f.write_str(name),
        }
    }
}

// Error messages render keys with Debug, so keep it close to the user's spelling
impl fmt::Debug for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeLabel::Id(id) => write!(f, "{id}"),
            NodeLabel::Name(name) => write!(f, "{name:?}"),
        }
    }
}

/// The graph every command works on.
pub type RouteGraph = Graph<NodeLabel, f64>;

/// On-disk graph description.
///
/// Either `nodes` lists every node label, or `node_count` declares nodes `0..node_count`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphFile {
    #[serde(default)]
    nodes: Option<Vec<NodeLabel>>,
    #[serde(default)]
    node_count: Option<u64>,
    edges: Vec<(NodeLabel, NodeLabel, f64)>,
}

/// A loaded graph plus the route queried when none is given.
pub struct LoadedGraph {
    pub graph: RouteGraph,
    pub default_route: Option<(NodeLabel, NodeLabel)>,
}

/// Build the built-in reference network.
pub fn reference_graph() -> anyhow::Result<RouteGraph> {
    let graph = Graph::build(
        (0..REFERENCE_NODES).map(NodeLabel::Id),
        REFERENCE_EDGES
            .iter()
            .map(|&(a, b, w)| (NodeLabel::Id(a), NodeLabel::Id(b), w)),
    )?;
    Ok(graph)
}

/// Parse a JSON graph description.
pub fn parse_graph(json: &str) -> anyhow::Result<RouteGraph> {
    let file: GraphFile = serde_json::from_str(json).context("invalid graph description")?;

    let nodes = match (file.nodes, file.node_count) {
        (Some(nodes), None) => nodes,
        (None, Some(count)) => (0..count).map(NodeLabel::Id).collect(),
        (Some(_), Some(_)) => bail!("graph description has both 'nodes' and 'node_count'"),
        (None, None) => bail!("graph description needs either 'nodes' or 'node_count'"),
    };

    Graph::build(nodes, file.edges).context("graph description is not a valid graph")
}

/// Load the graph named by `--graph`, or the reference network.
pub fn load_graph(path: Option<&Path>) -> anyhow::Result<LoadedGraph> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read graph: {}", path.display()))?;
            let graph = parse_graph(&json)
                .with_context(|| format!("failed to load graph: {}", path.display()))?;
            log::debug!(
                "Loaded {} with {} nodes and {} edges",
                path.display(),
                graph.node_count(),
                graph.edge_count()
            );
            Ok(LoadedGraph {
                graph,
                default_route: None,
            })
        }
        None => Ok(LoadedGraph {
            graph: reference_graph()?,
            default_route: Some((
                NodeLabel::Id(REFERENCE_ROUTE.0),
                NodeLabel::Id(REFERENCE_ROUTE.1),
            )),
        }),
    }
}

/// Resolve a node given on the command line against the graph's labels.
///
/// Integers match integer labels first, then names; anything else is a name.
pub fn resolve_node(graph: &RouteGraph, arg: &str) -> NodeLabel {
    if let Ok(id) = arg.parse::<u64>() {
        let label = NodeLabel::Id(id);
        if graph.contains(&label) {
            return label;
        }
    }
    NodeLabel::Name(arg.to_string())
}

/// Resolve `--from`/`--to`, falling back to the graph's default route.
pub fn resolve_route(
    loaded: &LoadedGraph,
    from: Option<&str>,
    to: Option<&str>,
) -> anyhow::Result<(NodeLabel, NodeLabel)> {
    let default = loaded.default_route.as_ref();
    let start = match (from, default) {
        (Some(arg), _) => resolve_node(&loaded.graph, arg),
        (None, Some((start, _))) => start.clone(),
        (None, None) => bail!("--from is required when --graph is given"),
    };
    let end = match (to, default) {
        (Some(arg), _) => resolve_node(&loaded.graph, arg),
        (None, Some((_, end))) => end.clone(),
        (None, None) => bail!("--to is required when --graph is given"),
    };
    Ok((start, end))
}

/// Format a route as `a → b → c`.
pub fn format_route(nodes: &[NodeLabel]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Convert a route to plain strings for JSON output.
pub fn route_labels(nodes: &[NodeLabel]) -> Vec<String> {
    nodes.iter().map(ToString::to_string).collect()
}
