use anyhow::Context;
use pathscope::{graph::algorithms::TieBreak, Path};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::{load_graph, resolve_route, route_labels, NodeLabel, RouteGraph},
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct RankedPathOutput {
    rank: usize,
    nodes: Vec<String>,
    weight: f64,
    hops: usize,
    shortest: bool,
}

#[derive(Debug, Serialize)]
struct PathsOutput {
    start: String,
    target: String,
    limited: bool,
    paths: Vec<RankedPathOutput>,
}

fn collect(
    graph: &RouteGraph,
    start: &NodeLabel,
    end: &NodeLabel,
    limit: Option<usize>,
) -> anyhow::Result<PathsOutput> {
    let enumeration = graph
        .all_simple_paths(start, end)
        .with_context(|| format!("failed to enumerate paths from {start} to {end}"))?
        .map(|path| path.map(Path::into_nodes));
    let mut candidates: Vec<Vec<NodeLabel>> = match limit {
        Some(limit) => enumeration
            .take(limit.saturating_add(1))
            .collect::<Result<_, _>>()?,
        None => enumeration.collect::<Result<_, _>>()?,
    };
    let limited = limit.is_some_and(|limit| candidates.len() > limit);
    if let Some(limit) = limit {
        candidates.truncate(limit);
    }

    let ranked = graph.rank(candidates, TieBreak::Enumeration)?;
    let best = ranked.first().map(|p| p.total_weight());

    let paths = ranked
        .iter()
        .enumerate()
        .map(|(i, path)| RankedPathOutput {
            rank: i + 1,
            nodes: route_labels(path.nodes()),
            weight: path.total_weight(),
            hops: path.hops(),
            shortest: Some(path.total_weight()) == best,
        })
        .collect();

    Ok(PathsOutput {
        start: start.to_string(),
        target: end.to_string(),
        limited,
        paths,
    })
}

fn print_paths(output: &PathsOutput) {
    if output.paths.is_empty() {
        println!("No path from {} to {}", output.start, output.target);
        return;
    }

    println!(
        "Simple paths from {} to {}: {}{}",
        output.start,
        output.target,
        output.paths.len(),
        if output.limited { " (limited)" } else { "" }
    );
    println!();

    let mut tw = TabWriter::new(&[
        ("#", Align::Right),
        ("Weight", Align::Right),
        ("Hops", Align::Right),
        ("Route", Align::Left),
    ]);
    for path in &output.paths {
        let marker = if path.shortest { "*" } else { "" };
        tw.row(vec![
            format!("{}{marker}", path.rank),
            path.weight.to_string(),
            path.hops.to_string(),
            path.nodes.join(" → "),
        ]);
    }
    tw.print();
}

pub fn run(
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<usize>,
    opts: &GlobalOptions,
) -> anyhow::Result<()> {
    let loaded = load_graph(opts.graph.as_deref())?;
    let (start, end) = resolve_route(&loaded, from, to)?;
    let output = collect(&loaded.graph, &start, &end, limit)?;

    log::debug!(
        "Ranked {} paths, best route {}",
        output.paths.len(),
        best_route(&output)
    );

    print_output(&output, opts, print_paths)
}

fn best_route(output: &PathsOutput) -> String {
    output
        .paths
        .first()
        .map_or_else(|| "(none)".to_string(), |p| p.nodes.join(" → "))
}
