// src/graph/rank/pagerank.rs
//! `PageRank` over the symbol graph.
//!
//! Uniform teleport, dangling-node mass spread uniformly, unweighted edges.

use std::collections::BTreeSet;

use tracing::{debug, warn};

pub const DAMPING: f64 = 0.85;
pub const MAX_ITERATIONS: usize = 100;
/// Per-node L1 tolerance; the stop threshold is `n * TOLERANCE`.
pub const TOLERANCE: f64 = 1.0e-6;

/// Computes scores indexed by node. Scores are positive and sum to 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute(node_count: usize, edges: &BTreeSet<(usize, usize)>) -> Vec<f64> {
    if node_count == 0 {
        return Vec::new();
    }

    let n = node_count as f64;
    let topology = Topology::new(node_count, edges);
    let mut ranks = initialize_ranks(node_count, n);

    for iteration in 1..=MAX_ITERATIONS {
        let next = iterate_once(&ranks, &topology, n);
        let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
        ranks = next;
        if delta < n * TOLERANCE {
            debug!(iteration, delta, "pagerank converged");
            normalize(&mut ranks);
            return ranks;
        }
    }

    warn!(
        iterations = MAX_ITERATIONS,
        nodes = node_count,
        "pagerank did not converge; using last iterate"
    );
    normalize(&mut ranks);
    ranks
}

struct Topology {
    incoming: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
}

impl Topology {
    fn new(node_count: usize, edges: &BTreeSet<(usize, usize)>) -> Self {
        let mut incoming = vec![Vec::new(); node_count];
        let mut out_degree = vec![0; node_count];
        for &(from, to) in edges {
            if let (Some(inc), Some(deg)) = (incoming.get_mut(to), out_degree.get_mut(from)) {
                inc.push(from);
                *deg += 1;
            }
        }
        Self {
            incoming,
            out_degree,
        }
    }
}

fn initialize_ranks(node_count: usize, n: f64) -> Vec<f64> {
    vec![1.0 / n; node_count]
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(ranks: &[f64], topology: &Topology, n: f64) -> Vec<f64> {
    let dangling: f64 = ranks
        .iter()
        .zip(&topology.out_degree)
        .filter(|(_, &deg)| deg == 0)
        .map(|(r, _)| r)
        .sum();
    let base = (1.0 - DAMPING) / n + DAMPING * dangling / n;

    topology
        .incoming
        .iter()
        .map(|sources| {
            let incoming: f64 = sources
                .iter()
                .filter_map(|&s| {
                    let rank = ranks.get(s)?;
                    let deg = *topology.out_degree.get(s)?;
                    Some(rank / deg as f64)
                })
                .sum();
            base + DAMPING * incoming
        })
        .collect()
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}
