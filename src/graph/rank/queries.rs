// src/graph/rank/queries.rs
use std::cmp::Ordering;

use crate::graph::rank::graph::{Node, SymbolGraph};

/// Nodes by descending score; equal scores ordered by ascending id.
#[must_use]
pub fn get_ranked_nodes(graph: &SymbolGraph) -> Vec<(&Node, f64)> {
    let mut ranked: Vec<_> = graph
        .nodes
        .iter()
        .zip(graph.ranks.iter().copied())
        .collect();
    ranked.sort_by(|a, b| compare_ranked(a.1, &a.0.id, b.1, &b.0.id));
    ranked
}

fn compare_ranked(sa: f64, ida: &str, sb: f64, idb: &str) -> Ordering {
    sb.total_cmp(&sa).then_with(|| ida.cmp(idb))
}

#[must_use]
pub fn get_dependencies<'g>(graph: &'g SymbolGraph, id: &str) -> Vec<&'g str> {
    let Some(&from) = graph.index.get(id) else {
        return Vec::new();
    };
    graph
        .edges
        .range((from, 0)..=(from, usize::MAX))
        .filter_map(|&(_, to)| graph.nodes.get(to).map(|n| n.id.as_str()))
        .collect()
}

#[must_use]
pub fn get_dependents<'g>(graph: &'g SymbolGraph, id: &str) -> Vec<&'g str> {
    let Some(&to) = graph.index.get(id) else {
        return Vec::new();
    };
    graph
        .edges
        .iter()
        .filter(|&&(_, t)| t == to)
        .filter_map(|&(from, _)| graph.nodes.get(from).map(|n| n.id.as_str()))
        .collect()
}
