// src/cli/handlers/report.rs
//! Console reports for the pipeline stages.

use std::fmt::Write as _;

use colored::Colorize;

use crate::pipeline::{RankOutcome, ScanOutcome};
use crate::types::{ConciseMap, RawMap};

fn rule() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Prints scan counts.
pub fn print_scan(outcome: &ScanOutcome) {
    println!();
    rule();
    println!("{}", " SCAN".bold());
    rule();
    println!("  {} {}", "Files:".white(), outcome.map.file_count());
    println!("  {} {}", "Declarations:".white(), outcome.map.symbol_count());
    println!(
        "  {} {}",
        "Written:".white(),
        outcome.path.display().to_string().dimmed()
    );
    rule();
}

/// Prints graph diagnostics and the top-ranked nodes.
pub fn print_rank(outcome: &RankOutcome) {
    let d = &outcome.diagnostics;
    println!();
    rule();
    println!("{}", " RANK".bold());
    rule();
    println!("  {} {}", "Nodes:".white(), d.node_count);
    println!("  {} {}", "Edges:".white(), d.edge_count);
    println!("  {} {}", "Components:".white(), d.component_count);
    println!("  {} {}", "Retained:".white(), d.retained);
    if d.retained < d.selected {
        println!(
            "  {} {}",
            "Unresolved:".yellow(),
            d.selected - d.retained
        );
    }
    println!(
        "  {} {}",
        "Concise Tokens:".white(),
        format_num(d.concise_tokens)
    );

    if !d.top.is_empty() {
        println!();
        println!("  {}", "Top symbols:".white());
        for (i, node) in d.top.iter().enumerate() {
            println!(
                "  {:>3}. {:.6}  {} {}",
                i + 1,
                node.score,
                node.id.color(node.color),
                format!("({})", node.kind.as_str()).dimmed()
            );
        }
    }

    println!();
    println!(
        "  {} {}",
        "Written:".white(),
        outcome.path.display().to_string().dimmed()
    );
    rule();
}

/// `path:` followed by each declaration indented.
#[must_use]
pub fn format_raw_listing(map: &RawMap) -> String {
    let mut out = String::new();
    for (path, file) in &map.files {
        let _ = writeln!(out, "{path}:");
        for symbol in &file.symbols {
            let _ = writeln!(out, "    {symbol}");
        }
    }
    out
}

/// Like the raw listing, with file and declaration scores.
#[must_use]
pub fn format_concise_listing(map: &ConciseMap) -> String {
    let mut out = String::new();
    for (path, file) in &map.files {
        let _ = writeln!(out, "{path}: ({:.6})", file.pagerank_score);
        for symbol in &file.symbols {
            let _ = writeln!(out, "    [{:.6}] {}", symbol.pagerank_score, symbol.code);
        }
    }
    out
}

fn format_num(n: usize) -> String {
    if n >= 1000 {
        #[allow(clippy::cast_precision_loss)]
        let k = n as f64 / 1000.0;
        format!("{k:.1}k")
    } else {
        n.to_string()
    }
}
