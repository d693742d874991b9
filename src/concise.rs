// src/concise.rs
//! Reduces the raw map to the top-ranked declarations.

use std::collections::HashMap;
use std::path::Path;

use colored::Color;
use tracing::warn;

use crate::config::{Config, IdentityMode};
use crate::graph::rank::builder::file_key;
use crate::graph::rank::{Node, SymbolGraph};
use crate::lang::Lang;
use crate::symbols::{Extractor, SymbolKind};
use crate::tokens::Tokenizer;
use crate::types::{ConciseFile, ConciseMap, ConciseSymbol, RawMap};

/// How many entries the top list in `Diagnostics` carries.
pub const TOP_LISTED: usize = 10;

/// One node in the diagnostics top list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedNode {
    pub id: String,
    pub kind: SymbolKind,
    pub score: f64,
    pub color: Color,
}

/// Run summary. Printed and logged, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    /// Nodes selected by the retention percentage.
    pub selected: usize,
    /// Declarations actually written. Below `selected` when a basename
    /// collision resolves a node to a file that lacks it.
    pub retained: usize,
    pub top: Vec<RankedNode>,
    pub concise_tokens: usize,
}

/// `ceil(node_count * pct / 100)`, capped at `node_count`.
#[must_use]
pub fn retention_count(node_count: usize, top_percentage: u32) -> usize {
    let pct = top_percentage.min(100) as usize;
    (node_count * pct).div_ceil(100).min(node_count)
}

/// Builds the concise map from a ranked graph.
#[must_use]
pub fn emit(
    graph: &SymbolGraph,
    raw: &RawMap,
    extractor: &Extractor,
    config: &Config,
) -> ConciseMap {
    let ranked = graph.ranked_nodes();
    let keep = retention_count(ranked.len(), config.top_percentage);
    let paths = PathResolver::new(raw, config.identity);

    let mut map = ConciseMap::default();
    for (node, score) in ranked.into_iter().take(keep) {
        let Some(path) = paths.resolve(&node.file_key) else {
            warn!(node = %node.id, "no source path for node, dropped");
            continue;
        };
        let Some(code) = find_declaration(raw, path, node, extractor) else {
            warn!(node = %node.id, path, "declaration not in resolved file, dropped");
            continue;
        };
        let file = map.files.entry(path.to_string()).or_insert_with(|| ConciseFile {
            path: path.to_string(),
            symbols: Vec::new(),
            pagerank_score: score,
        });
        file.symbols.push(ConciseSymbol {
            code: code.to_string(),
            pagerank_score: score,
        });
    }
    map
}

/// Collects the run summary for an emitted map.
#[must_use]
pub fn diagnostics(graph: &SymbolGraph, concise: &ConciseMap, config: &Config) -> Diagnostics {
    let ranked = graph.ranked_nodes();
    let top = ranked
        .iter()
        .take(TOP_LISTED)
        .map(|(node, score)| RankedNode {
            id: node.id.clone(),
            kind: node.kind,
            score: *score,
            color: node.display.color(),
        })
        .collect();
    let concise_tokens = serde_json::to_string(concise)
        .map(|json| Tokenizer::count(&json))
        .unwrap_or(0);

    Diagnostics {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count: graph.weak_component_count(),
        selected: retention_count(ranked.len(), config.top_percentage),
        retained: concise.symbol_count(),
        top,
        concise_tokens,
    }
}

/// Maps a file key back to the first sorted raw-map path carrying it.
struct PathResolver<'a> {
    by_key: HashMap<String, &'a str>,
}

impl<'a> PathResolver<'a> {
    fn new(raw: &'a RawMap, identity: IdentityMode) -> Self {
        let mut by_key = HashMap::new();
        for path in raw.files.keys() {
            by_key
                .entry(file_key(path, identity))
                .or_insert(path.as_str());
        }
        Self { by_key }
    }

    fn resolve(&self, key: &str) -> Option<&'a str> {
        self.by_key.get(key).copied()
    }
}

fn find_declaration<'a>(
    raw: &'a RawMap,
    path: &str,
    node: &Node,
    extractor: &Extractor,
) -> Option<&'a str> {
    let lang = Lang::from_path(Path::new(path));
    raw.files
        .get(path)?
        .symbols
        .iter()
        .find(|line| extractor.derive(line, lang).name == node.name)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::rank::GraphEngine;
    use crate::types::FileSymbols;

    #[test]
    fn test_retention_rounds_up() {
        assert_eq!(retention_count(10, 30), 3);
        assert_eq!(retention_count(7, 30), 3);
        assert_eq!(retention_count(1, 1), 1);
        assert_eq!(retention_count(0, 30), 0);
        assert_eq!(retention_count(5, 0), 0);
        assert_eq!(retention_count(5, 100), 5);
    }

    #[test]
    fn test_file_score_is_highest_retained() {
        let ex = Extractor::new().unwrap();
        let mut raw = RawMap::default();
        raw.files.insert(
            "pkg/core.py".into(),
            FileSymbols {
                path: "pkg/core.py".into(),
                symbols: vec![
                    "class Engine:".into(),
                    "def start(e: Engine):".into(),
                    "def stop(e: Engine):".into(),
                ],
            },
        );
        let config = Config {
            top_percentage: 100,
            ..Config::default()
        };
        let graph = GraphEngine::build(&raw, &ex, &config);
        let map = emit(&graph, &raw, &ex, &config);
        let file = &map.files["pkg/core.py"];
        assert_eq!(file.symbols.len(), 3);
        assert_eq!(file.symbols[0].code, "class Engine:");
        assert_eq!(file.pagerank_score, file.symbols[0].pagerank_score);
        assert!(file.symbols[0].pagerank_score > file.symbols[1].pagerank_score);
    }

    #[test]
    fn test_empty_graph_emits_empty_map() {
        let ex = Extractor::new().unwrap();
        let config = Config::default();
        let graph = GraphEngine::build(&RawMap::default(), &ex, &config);
        let map = emit(&graph, &RawMap::default(), &ex, &config);
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
        let diag = diagnostics(&graph, &map, &config);
        assert_eq!(diag.node_count, 0);
        assert_eq!(diag.component_count, 0);
        assert!(diag.top.is_empty());
    }
}
