// tests/unit_concise.rs
//! Retention, ordering and path resolution of the concise map.

use rankmap_core::concise::{self, retention_count};
use rankmap_core::config::{Config, IdentityMode};
use rankmap_core::graph::rank::GraphEngine;
use rankmap_core::symbols::Extractor;
use rankmap_core::types::{FileSymbols, RawMap};

fn raw(files: &[(&str, &[&str])]) -> RawMap {
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
    map
}

fn ten_isolated() -> RawMap {
    raw(&[
        ("a.py", &["def a0():", "def a1():", "def a2():", "def a3():", "def a4():"]),
        ("b.py", &["def b0():", "def b1():", "def b2():", "def b3():", "def b4():"]),
    ])
}

#[test]
fn test_ten_nodes_at_thirty_percent_keeps_three() {
    assert_eq!(retention_count(10, 30), 3);

    let ex = Extractor::new().unwrap();
    let map = ten_isolated();
    let config = Config::new();
    let g = GraphEngine::build(&map, &ex, &config);
    let out = concise::emit(&g, &map, &ex, &config);
    assert_eq!(out.symbol_count(), 3);

    let diag = concise::diagnostics(&g, &out, &config);
    assert_eq!(diag.node_count, 10);
    assert_eq!(diag.selected, 3);
    assert_eq!(diag.retained, 3);
    assert_eq!(diag.component_count, 10);
    assert_eq!(diag.top.len(), 10);
}

#[test]
fn test_ties_resolved_by_node_id() {
    // All scores equal: the three smallest ids win.
    let ex = Extractor::new().unwrap();
    let map = ten_isolated();
    let config = Config::new();
    let g = GraphEngine::build(&map, &ex, &config);
    let out = concise::emit(&g, &map, &ex, &config);
    let codes: Vec<_> = out.files["a.py"].symbols.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["def a0():", "def a1():", "def a2():"]);
    assert!(!out.files.contains_key("b.py"));

    let again = concise::emit(&g, &map, &ex, &config);
    assert_eq!(out, again);
}

#[test]
fn test_basename_resolves_to_first_sorted_path() {
    let ex = Extractor::new().unwrap();
    let map = raw(&[
        ("z/util.py", &["def shared():"]),
        ("a/util.py", &["def shared():"]),
    ]);
    let config = Config {
        top_percentage: 100,
        ..Config::new()
    };
    let g = GraphEngine::build(&map, &ex, &config);
    let out = concise::emit(&g, &map, &ex, &config);
    assert_eq!(out.files.keys().collect::<Vec<_>>(), vec!["a/util.py"]);

    let full = Config {
        identity: IdentityMode::FullPath,
        ..config
    };
    let g = GraphEngine::build(&map, &ex, &full);
    let out = concise::emit(&g, &map, &ex, &full);
    assert_eq!(out.files.len(), 2);
    assert_eq!(out.files["z/util.py"].path, "z/util.py");
}

#[test]
fn test_basename_collision_drop_is_counted() {
    let ex = Extractor::new().unwrap();
    let map = raw(&[("x/util.py", &["def alpha():"]), ("y/util.py", &["def beta():"])]);
    let config = Config {
        top_percentage: 100,
        ..Config::new()
    };
    let g = GraphEngine::build(&map, &ex, &config);
    assert_eq!(g.node_count(), 2);
    let out = concise::emit(&g, &map, &ex, &config);
    // `util.py:beta` resolves to x/util.py, which has no `beta`.
    assert_eq!(out.files.keys().collect::<Vec<_>>(), vec!["x/util.py"]);
    assert_eq!(out.symbol_count(), 1);

    let diag = concise::diagnostics(&g, &out, &config);
    assert_eq!(diag.selected, 2);
    assert_eq!(diag.retained, 1);
}

#[test]
fn test_empty_graph_emits_empty_object() {
    let ex = Extractor::new().unwrap();
    let config = Config::new();
    let g = GraphEngine::build(&RawMap::default(), &ex, &config);
    let out = concise::emit(&g, &RawMap::default(), &ex, &config);
    assert_eq!(serde_json::to_string(&out).unwrap(), "{}");
}
