// src/graph/rank/builder.rs
//! Graph construction: node creation from declarations and edge building.

use std::collections::BTreeSet;
use std::path::Path;

use super::graph::SymbolGraph;
use super::index;
use crate::config::{EdgeStrategy, IdentityMode};
use crate::lang::Lang;
use crate::symbols::{Extractor, Symbol};
use crate::types::RawMap;

/// One declaration of the raw map, paired with the node it produced.
#[derive(Debug, Clone)]
pub struct Declaration<'a> {
    pub path: &'a str,
    pub raw: &'a str,
    pub symbol: Symbol,
    pub node: usize,
}

/// Creates one node per distinct `(file key, name)` and derives the edges.
#[must_use]
pub fn build_graph(
    raw: &RawMap,
    extractor: &Extractor,
    identity: IdentityMode,
    strategy: EdgeStrategy,
) -> SymbolGraph {
    let mut graph = SymbolGraph::new();
    let decls = collect_declarations(raw, extractor, identity, &mut graph);
    let edges = match strategy {
        EdgeStrategy::Pairwise => pairwise_edges(&decls),
        EdgeStrategy::Indexed => index::indexed_edges(&decls),
    };
    graph.set_edges(edges);
    graph
}

/// Derives every declaration's symbol and registers its node.
pub fn collect_declarations<'a>(
    raw: &'a RawMap,
    extractor: &Extractor,
    identity: IdentityMode,
    graph: &mut SymbolGraph,
) -> Vec<Declaration<'a>> {
    raw.declarations()
        .map(|(path, line)| {
            let symbol = extractor.derive(line, Lang::from_path(Path::new(path)));
            let key = file_key(path, identity);
            let node = graph.ensure_node(&key, &symbol.name, symbol.kind);
            Declaration {
                path,
                raw: line,
                symbol,
                node,
            }
        })
        .collect()
}

/// Quadratic reference scan: `D → C` when `D`'s raw text contains `C`'s name.
#[must_use]
pub fn pairwise_edges(decls: &[Declaration<'_>]) -> BTreeSet<(usize, usize)> {
    let mut edges = BTreeSet::new();
    for source in decls {
        for target in decls {
            let name = target.symbol.name.as_str();
            if name.is_empty() || name == source.symbol.name || source.node == target.node {
                continue;
            }
            if source.raw.contains(name) {
                edges.insert((source.node, target.node));
            }
        }
    }
    edges
}

/// Node file key under the chosen identity mode.
#[must_use]
pub fn file_key(path: &str, identity: IdentityMode) -> String {
    match identity {
        IdentityMode::FullPath => path.to_string(),
        IdentityMode::Basename => path.rsplit('/').next().unwrap_or(path).to_string(),
    }
}
