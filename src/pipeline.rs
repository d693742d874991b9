// src/pipeline.rs
//! The two pipeline stages and their composition.
//!
//! `scan` writes the raw map; `rank` reads it back from disk, so the stages
//! can run in separate invocations.

use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact;
use crate::concise::{self, Diagnostics};
use crate::config::Config;
use crate::error::{RankMapError, Result};
use crate::graph::rank::GraphEngine;
use crate::scan;
use crate::symbols::Extractor;
use crate::types::{ConciseMap, RawMap};

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub map: RawMap,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RankOutcome {
    pub concise: ConciseMap,
    pub diagnostics: Diagnostics,
    pub path: PathBuf,
}

/// Scans `root` and writes the raw map.
///
/// # Errors
/// Returns `Io` if `root` is not a directory or the artifact cannot be written.
pub fn run_scan(root: &Path, config: &Config, extractor: &Extractor) -> Result<ScanOutcome> {
    ensure_dir(root)?;
    let map = scan::scan(root, config, extractor);
    let path = artifact::write_raw_map(root, &map)?;
    Ok(ScanOutcome { map, path })
}

/// Reads the raw map, ranks it and writes the concise map.
///
/// # Errors
/// Returns `MapMissing`/`MapCorrupt` if the raw map cannot be loaded,
/// `Config` if the config is out of range, `Io` on write failure.
pub fn run_rank(root: &Path, config: &Config, extractor: &Extractor) -> Result<RankOutcome> {
    config.validate()?;
    let raw = artifact::read_raw_map(root)?;
    let graph = GraphEngine::build(&raw, extractor, config);
    let concise = concise::emit(&graph, &raw, extractor, config);
    let path = artifact::write_concise_map(root, &concise)?;
    let diagnostics = concise::diagnostics(&graph, &concise, config);
    info!(
        nodes = diagnostics.node_count,
        edges = diagnostics.edge_count,
        components = diagnostics.component_count,
        selected = diagnostics.selected,
        retained = diagnostics.retained,
        tokens = diagnostics.concise_tokens,
        "rank complete"
    );
    Ok(RankOutcome {
        concise,
        diagnostics,
        path,
    })
}

/// Regenerates both artifacts.
///
/// # Errors
/// Propagates errors from either stage.
pub fn run(
    root: &Path,
    config: &Config,
    extractor: &Extractor,
) -> Result<(ScanOutcome, RankOutcome)> {
    config.validate()?;
    let scanned = run_scan(root, config, extractor)?;
    let ranked = run_rank(root, config, extractor)?;
    Ok((scanned, ranked))
}

fn ensure_dir(root: &Path) -> Result<()> {
    if root.is_dir() {
        return Ok(());
    }
    Err(RankMapError::io(
        IoError::new(ErrorKind::NotFound, "scan root is not a directory"),
        root,
    ))
}
