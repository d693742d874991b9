// src/graph/rank/graph.rs
//! The symbol graph structure and query interface.

use std::collections::{BTreeSet, HashMap};

use colored::Color;

use crate::symbols::SymbolKind;

/// Terminal color used when a node is printed. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTag(usize);

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::BrightRed,
    Color::BrightCyan,
    Color::BrightGreen,
];

impl DisplayTag {
    /// Picks a stable palette slot from the file key (FNV-1a).
    #[must_use]
    pub fn for_file(file_key: &str) -> Self {
        let hash = file_key
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |h, b| {
                (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
            });
        #[allow(clippy::cast_possible_truncation)]
        Self((hash % PALETTE.len() as u64) as usize)
    }

    #[must_use]
    pub fn color(self) -> Color {
        PALETTE.get(self.0).copied().unwrap_or(Color::White)
    }
}

/// One `(file key, symbol name)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// `file_key:name`.
    pub id: String,
    pub name: String,
    pub file_key: String,
    pub kind: SymbolKind,
    pub display: DisplayTag,
}

/// Nodes, directed edges and (once ranked) PageRank scores.
#[derive(Debug, Clone, Default)]
pub struct SymbolGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) edges: BTreeSet<(usize, usize)>,
    pub(crate) ranks: Vec<f64>,
}

impl SymbolGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node index for `file_key:name`, creating the node if absent.
    /// Attributes of an existing node are left as first created.
    pub fn ensure_node(&mut self, file_key: &str, name: &str, kind: SymbolKind) -> usize {
        let id = node_id(file_key, name);
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.nodes.push(Node {
            id: id.clone(),
            name: name.to_string(),
            file_key: file_key.to_string(),
            kind,
            display: DisplayTag::for_file(file_key),
        });
        self.index.insert(id, idx);
        idx
    }

    pub(crate) fn set_edges(&mut self, edges: BTreeSet<(usize, usize)>) {
        self.edges = edges;
    }

    pub(crate) fn set_ranks(&mut self, ranks: Vec<f64>) {
        self.ranks = ranks;
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).and_then(|&i| self.nodes.get(i))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// True if the edge `from → to` exists (by node id).
    #[must_use]
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.edges.contains(&(a, b)),
            _ => false,
        }
    }

    /// Edges as `(from id, to id)`, in index order.
    pub fn edge_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges.iter().filter_map(|&(a, b)| {
            Some((self.nodes.get(a)?.id.as_str(), self.nodes.get(b)?.id.as_str()))
        })
    }

    #[must_use]
    pub fn scores(&self) -> &[f64] {
        &self.ranks
    }

    /// Nodes ordered by score, highest first; ties by id.
    #[must_use]
    pub fn ranked_nodes(&self) -> Vec<(&Node, f64)> {
        crate::graph::rank::queries::get_ranked_nodes(self)
    }

    /// Ids of nodes this node points to.
    #[must_use]
    pub fn dependencies(&self, id: &str) -> Vec<&str> {
        crate::graph::rank::queries::get_dependencies(self, id)
    }

    /// Ids of nodes pointing at this node.
    #[must_use]
    pub fn dependents(&self, id: &str) -> Vec<&str> {
        crate::graph::rank::queries::get_dependents(self, id)
    }

    /// Number of weakly connected components.
    #[must_use]
    pub fn weak_component_count(&self) -> usize {
        crate::graph::rank::components::count_weak(self.nodes.len(), &self.edges)
    }
}

#[must_use]
pub fn node_id(file_key: &str, name: &str) -> String {
    format!("{file_key}:{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_node_is_idempotent() {
        let mut g = SymbolGraph::new();
        let a = g.ensure_node("a.py", "run", SymbolKind::Method);
        let again = g.ensure_node("a.py", "run", SymbolKind::Class);
        assert_eq!(a, again);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node("a.py:run").unwrap().kind, SymbolKind::Method);
    }

    #[test]
    fn test_display_tag_is_stable() {
        assert_eq!(DisplayTag::for_file("main.rs"), DisplayTag::for_file("main.rs"));
    }
}
