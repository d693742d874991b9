// src/graph/rank/components.rs
use std::collections::BTreeSet;

use super::union_find::UnionFind;

/// Weakly connected components, edge direction ignored.
#[must_use]
pub fn count_weak(node_count: usize, edges: &BTreeSet<(usize, usize)>) -> usize {
    let mut uf = UnionFind::new(node_count);
    for &(a, b) in edges {
        if a < node_count && b < node_count {
            uf.union(a, b);
        }
    }
    uf.set_count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_nodes_are_components() {
        assert_eq!(count_weak(3, &BTreeSet::new()), 3);
        assert_eq!(count_weak(0, &BTreeSet::new()), 0);
    }

    #[test]
    fn test_direction_ignored() {
        let edges: BTreeSet<_> = [(0, 1), (2, 1)].into_iter().collect();
        assert_eq!(count_weak(4, &edges), 2);
    }
}
