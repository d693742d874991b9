// src/types.rs
//! Data carried between pipeline stages and persisted as JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::lang::Lang;

/// One scanned file, before persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Relative to the scanned root, forward slashes.
    pub path: String,
    pub lang: Lang,
    pub symbols: Vec<String>,
}

/// Value type of the raw map artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSymbols {
    pub path: String,
    pub symbols: Vec<String>,
}

/// File→declarations map, keyed and ordered by relative path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawMap {
    pub files: BTreeMap<String, FileSymbols>,
}

impl RawMap {
    /// Collects scanned files, dropping those without declarations.
    #[must_use]
    pub fn from_sources(sources: Vec<SourceFile>) -> Self {
        let files = sources
            .into_iter()
            .filter(|f| !f.symbols.is_empty())
            .map(|f| {
                let entry = FileSymbols {
                    path: f.path.clone(),
                    symbols: f.symbols,
                };
                (f.path, entry)
            })
            .collect();
        Self { files }
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.files.values().map(|f| f.symbols.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// `(path, declaration)` pairs in path order, then source order.
    pub fn declarations(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.files.iter().flat_map(|(path, f)| {
            f.symbols
                .iter()
                .map(move |s| (path.as_str(), s.as_str()))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConciseSymbol {
    pub code: String,
    pub pagerank_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConciseFile {
    pub path: String,
    pub symbols: Vec<ConciseSymbol>,
    /// Score of the highest-ranked retained node resolving to this file.
    pub pagerank_score: f64,
}

/// Reduced map keyed by original relative path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConciseMap {
    pub files: BTreeMap<String, ConciseFile>,
}

impl ConciseMap {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.files.values().map(|f| f.symbols.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(path: &str, symbols: &[&str]) -> SourceFile {
        SourceFile {
            path: path.to_string(),
            lang: Lang::Python,
            symbols: symbols.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn test_raw_map_json_shape() {
        let map = RawMap::from_sources(vec![source("pkg/a.py", &["def a():"])]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pkg/a.py": {"path": "pkg/a.py", "symbols": ["def a():"]}})
        );
    }

    #[test]
    fn test_empty_files_dropped() {
        let map = RawMap::from_sources(vec![source("a.py", &[]), source("b.py", &["class B:"])]);
        assert_eq!(map.file_count(), 1);
        assert_eq!(map.symbol_count(), 1);
    }

    #[test]
    fn test_declarations_ordered_by_path() {
        let map = RawMap::from_sources(vec![
            source("z.py", &["def z():"]),
            source("a.py", &["def a1():", "def a2():"]),
        ]);
        let order: Vec<_> = map.declarations().map(|(_, d)| d).collect();
        assert_eq!(order, vec!["def a1():", "def a2():", "def z():"]);
    }

    #[test]
    fn test_concise_json_shape() {
        let mut map = ConciseMap::default();
        map.files.insert(
            "a.js".into(),
            ConciseFile {
                path: "a.js".into(),
                symbols: vec![ConciseSymbol {
                    code: "function a() {".into(),
                    pagerank_score: 0.5,
                }],
                pagerank_score: 0.5,
            },
        );
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["a.js"]["symbols"][0]["code"], "function a() {");
        assert_eq!(json["a.js"]["pagerank_score"], 0.5);
    }
}
