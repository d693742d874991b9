// src/graph/rank/mod.rs
pub mod builder;
pub mod components;
pub mod graph;
pub mod index;
pub mod pagerank;
pub mod queries;
pub mod union_find;

pub use graph::{DisplayTag, Node, SymbolGraph};
use tracing::info;

use crate::config::Config;
use crate::symbols::Extractor;
use crate::types::RawMap;

/// Orchestrates graph construction and ranking.
pub struct GraphEngine;

impl GraphEngine {
    /// Builds the symbol graph from the raw map and ranks it.
    #[must_use]
    pub fn build(raw: &RawMap, extractor: &Extractor, config: &Config) -> SymbolGraph {
        let mut graph = builder::build_graph(raw, extractor, config.identity, config.edges);
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = ?config.edges,
            "graph built"
        );
        let ranks = pagerank::compute(graph.node_count(), &graph.edges);
        graph.set_ranks(ranks);
        graph
    }
}
