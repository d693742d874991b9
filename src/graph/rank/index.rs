// src/graph/rank/index.rs
//! Name-indexed edge derivation.
//!
//! Produces the same edge set as `builder::pairwise_edges`. Names made only of
//! word characters are found by looking up every substring of each maximal
//! word run of the source text; any such occurrence lies inside one run.
//! Remaining names fall back to a plain substring test.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::builder::Declaration;

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

struct NameIndex<'a> {
    words: HashMap<&'a str, BTreeSet<usize>>,
    others: BTreeMap<&'a str, BTreeSet<usize>>,
    longest_word: usize,
}

impl<'a> NameIndex<'a> {
    fn new(decls: &'a [Declaration<'_>]) -> Self {
        let mut words: HashMap<&str, BTreeSet<usize>> = HashMap::new();
        let mut others: BTreeMap<&str, BTreeSet<usize>> = BTreeMap::new();
        for d in decls {
            let name = d.symbol.name.as_str();
            if name.is_empty() {
                continue;
            }
            let bucket = if name.chars().all(is_word) {
                words.entry(name).or_default()
            } else {
                others.entry(name).or_default()
            };
            bucket.insert(d.node);
        }
        let longest_word = words.keys().map(|k| k.len()).max().unwrap_or(0);
        Self {
            words,
            others,
            longest_word,
        }
    }

    /// Distinct indexed names occurring in `text`, with their target nodes.
    fn occurrences(&self, text: &str) -> Vec<(&'a str, &BTreeSet<usize>)> {
        let mut found: BTreeMap<&'a str, &BTreeSet<usize>> = BTreeMap::new();
        for run in text.split(|c: char| !is_word(c)).filter(|r| !r.is_empty()) {
            self.scan_run(run, &mut found);
        }
        for (&name, targets) in &self.others {
            if text.contains(name) {
                found.insert(name, targets);
            }
        }
        found.into_iter().collect()
    }

    fn scan_run<'s>(&'s self, run: &str, found: &mut BTreeMap<&'a str, &'s BTreeSet<usize>>) {
        let bounds: Vec<usize> = run
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(run.len()))
            .collect();
        for (i, &start) in bounds.iter().enumerate() {
            for &end in bounds.iter().skip(i + 1) {
                if end - start > self.longest_word {
                    break;
                }
                let Some(slice) = run.get(start..end) else {
                    continue;
                };
                if let Some((&name, targets)) = self.words.get_key_value(slice) {
                    found.insert(name, targets);
                }
            }
        }
    }
}

/// Edge set equal to the pairwise scan, built from a name index.
#[must_use]
pub fn indexed_edges(decls: &[Declaration<'_>]) -> BTreeSet<(usize, usize)> {
    let index = NameIndex::new(decls);
    let mut edges = BTreeSet::new();
    for source in decls {
        for (name, targets) in index.occurrences(source.raw) {
            if name == source.symbol.name {
                continue;
            }
            edges.extend(
                targets
                    .iter()
                    .filter(|&&t| t != source.node)
                    .map(|&t| (source.node, t)),
            );
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdentityMode;
    use crate::graph::rank::builder::{collect_declarations, pairwise_edges};
    use crate::graph::rank::graph::SymbolGraph;
    use crate::symbols::Extractor;
    use crate::types::{FileSymbols, RawMap};

    fn both(files: &[(&str, &[&str])]) -> (BTreeSet<(usize, usize)>, BTreeSet<(usize, usize)>) {
        let ex = Extractor::new().unwrap();
        let mut map = RawMap::default();
        for (path, symbols) in files {
            map.files.insert(
                (*path).to_string(),
                FileSymbols {
                    path: (*path).to_string(),
                    symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
                },
            );
        }
        let mut g = SymbolGraph::new();
        let decls = collect_declarations(&map, &ex, IdentityMode::Basename, &mut g);
        (pairwise_edges(&decls), indexed_edges(&decls))
    }

    #[test]
    fn test_substring_inside_identifier_matches() {
        // `Map` occurs inside `HashMap`; substring semantics keep that edge.
        let (pair, idx) = both(&[("a.rs", &["struct Map {", "fn build() -> HashMap<u8, u8> {"])]);
        assert_eq!(pair, idx);
        assert!(!idx.is_empty());
    }

    #[test]
    fn test_non_word_names_use_contains() {
        let (pair, idx) = both(&[(
            "a.cpp",
            &["class Shape {", "operator==(const Shape& other) {", "bool same(Shape operator==) {"],
        )]);
        assert_eq!(pair, idx);
    }

    #[test]
    fn test_unicode_identifiers() {
        let (pair, idx) = both(&[("u.py", &["class Größe:", "def maß(x: Größe):"])]);
        assert_eq!(pair, idx);
        assert_eq!(idx.len(), 1);
    }
}
