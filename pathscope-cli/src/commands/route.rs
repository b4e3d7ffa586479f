use std::fmt::Write;

use anyhow::{bail, Context};
use pathscope::{graph::algorithms::TieBreak, Path, QueryConfig, RankedPathSet};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{format_route, load_graph, resolve_route, route_labels, NodeLabel, RouteGraph},
    output::{print_output, rule},
};

/// Limits forwarded from the command line to the query.
pub struct RouteOptions<'a> {
    pub from: Option<&'a str>,
    pub to: Option<&'a str>,
    pub alternatives: usize,
    pub max_depth: Option<usize>,
    pub max_paths: Option<usize>,
    pub tie_break: TieBreak,
    pub format: &'a str,
}

#[derive(Debug, Serialize)]
struct HopOutput {
    from: String,
    to: String,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct PathOutput {
    nodes: Vec<String>,
    weight: f64,
    hops: usize,
}

#[derive(Debug, Serialize)]
struct RouteOutput {
    start: String,
    target: String,
    node_count: usize,
    edge_count: usize,
    shortest: PathOutput,
    detail: Vec<HopOutput>,
    alternatives: Vec<PathOutput>,
    candidates: usize,
    truncated: bool,
}

fn path_output(path: &Path<NodeLabel, f64>) -> PathOutput {
    PathOutput {
        nodes: route_labels(path.nodes()),
        weight: path.total_weight(),
        hops: path.hops(),
    }
}

fn build_output(
    graph: &RouteGraph,
    start: &NodeLabel,
    end: &NodeLabel,
    result: &RankedPathSet<NodeLabel, f64>,
) -> anyhow::Result<RouteOutput> {
    let detail = result
        .primary
        .edges()
        .map(|(a, b)| {
            Ok(HopOutput {
                from: a.to_string(),
                to: b.to_string(),
                weight: graph.weight(a, b)?,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(RouteOutput {
        start: start.to_string(),
        target: end.to_string(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        shortest: path_output(&result.primary),
        detail,
        alternatives: result.alternatives.iter().map(path_output).collect(),
        candidates: result.candidates,
        truncated: result.truncated,
    })
}

/// Render the result panel: route info, shortest path, per-hop detail, alternatives.
fn render_text(output: &RouteOutput) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "{}", rule());
    let _ = writeln!(text, "ROUTE INFO");
    let _ = writeln!(text, "Start  : Node {}", output.start);
    let _ = writeln!(text, "Target : Node {}", output.target);
    let _ = writeln!(text, "Nodes  : {}", output.node_count);
    let _ = writeln!(text, "Edges  : {}", output.edge_count);

    let _ = writeln!(text, "\nSHORTEST PATH");
    let _ = writeln!(text, "Path   : {}", output.shortest.nodes.join(" → "));
    let _ = writeln!(text, "Weight : {} unit", output.shortest.weight);

    let _ = writeln!(text, "\nROUTE DETAIL");
    if output.detail.is_empty() {
        let _ = writeln!(text, "(start is the target)");
    }
    for hop in &output.detail {
        let _ = writeln!(text, "[{} → {}] = {} unit", hop.from, hop.to, hop.weight);
    }

    let _ = writeln!(text, "\nALTERNATIVES");
    if output.alternatives.is_empty() {
        let _ = writeln!(text, "(none)");
    }
    for (i, alternative) in output.alternatives.iter().enumerate() {
        let _ = writeln!(
            text,
            "{}. {} ({} unit)",
            i + 1,
            alternative.nodes.join(" → "),
            alternative.weight
        );
    }
    if output.truncated {
        let _ = writeln!(
            text,
            "(ranked from the first {} candidates only)",
            output.candidates
        );
    }

    let _ = write!(text, "{}", rule());
    text
}

/// Escape a label for use inside a DOT quoted string.
fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Render the graph as DOT with the shortest path highlighted.
///
/// Start is red, target green, other nodes on the path orange, everything else light
/// blue. Path edges are solid red; the rest dashed gray.
fn render_dot(
    graph: &RouteGraph,
    start: &NodeLabel,
    end: &NodeLabel,
    primary: &Path<NodeLabel, f64>,
) -> String {
    let on_path: Vec<(&NodeLabel, &NodeLabel)> = primary.edges().collect();
    let is_path_edge =
        |a: &NodeLabel, b: &NodeLabel| on_path.iter().any(|&(x, y)| (x, y) == (a, b) || (x, y) == (b, a));

    let mut dot = String::new();
    dot.push_str("graph Route {\n");
    let _ = writeln!(
        dot,
        "    label=\"Shortest path from {} to {}: {}\";",
        escape_dot(&start.to_string()),
        escape_dot(&end.to_string()),
        escape_dot(&format_route(primary.nodes()))
    );
    dot.push_str("    labelloc=t;\n");
    dot.push_str("    node [shape=circle, style=filled, fontname=\"Courier\", fontsize=10];\n");
    dot.push_str("    edge [fontname=\"Courier\", fontsize=9];\n\n");

    for node in graph.nodes() {
        let color = if node == start {
            "red"
        } else if node == end {
            "green"
        } else if primary.contains(node) {
            "orange"
        } else {
            "lightblue"
        };
        let _ = writeln!(
            dot,
            "    \"{0}\" [fillcolor={color}];",
            escape_dot(&node.to_string())
        );
    }
    dot.push('\n');

    for (a, b, weight) in graph.edges() {
        let style = if is_path_edge(a, b) {
            "color=red, penwidth=2"
        } else {
            "color=lightgray, style=dashed"
        };
        let _ = writeln!(
            dot,
            "    \"{}\" -- \"{}\" [label=\"{weight}\", {style}];",
            escape_dot(&a.to_string()),
            escape_dot(&b.to_string())
        );
    }

    dot.push_str("}\n");
    dot
}

/// DOT output has no JSON form, so `--json` is refused rather than ignored.
fn check_format(format: &str, json: bool) -> anyhow::Result<()> {
    match format {
        "text" => Ok(()),
        "dot" if json => bail!("--json cannot be combined with --format dot"),
        "dot" => Ok(()),
        other => bail!("unsupported format '{other}'; expected 'text' or 'dot'"),
    }
}

pub fn run(options: &RouteOptions<'_>, opts: &GlobalOptions) -> anyhow::Result<()> {
    check_format(options.format, opts.json)?;
    let loaded = load_graph(opts.graph.as_deref())?;
    let (start, end) = resolve_route(&loaded, options.from, options.to)?;
    let graph = &loaded.graph;

    let config = QueryConfig {
        max_alternatives: Some(options.alternatives),
        max_depth: options.max_depth,
        max_paths: options.max_paths,
        tie_break: options.tie_break,
    };
    let result = graph
        .query(&start, &end, &config)
        .with_context(|| format!("failed to route from {start} to {end}"))?;

    match options.format {
        "text" => {
            let output = build_output(graph, &start, &end, &result)?;
            print_output(&output, opts, |o| println!("{}", render_text(o)))
        }
        _ => {
            print!("{}", render_dot(graph, &start, &end, &result.primary));
            Ok(())
        }
    }
}
