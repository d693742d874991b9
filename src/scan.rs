// src/scan.rs
//! Repository scanner: walk, extract, collect.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::lang::Lang;
use crate::symbols::Extractor;
use crate::types::{RawMap, SourceFile};

/// A file selected for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub abs: PathBuf,
    pub rel: String,
    pub lang: Lang,
}

/// Runs the scanner over `root` and returns the raw map.
#[must_use]
pub fn scan(root: &Path, config: &Config, extractor: &Extractor) -> RawMap {
    let candidates = discover(root, config);
    info!(root = %root.display(), files = candidates.len(), "scanning");

    // Workers own their results; the collect below is the only merge point.
    let sources: Vec<SourceFile> = candidates
        .par_iter()
        .map(|c| SourceFile {
            path: c.rel.clone(),
            lang: c.lang,
            symbols: extractor.extract_file(&c.abs, c.lang),
        })
        .collect();

    let map = RawMap::from_sources(sources);
    info!(
        files = map.file_count(),
        symbols = map.symbol_count(),
        "scan complete"
    );
    map
}

/// Lists supported source files under `root`, skipping ignored directories.
#[must_use]
pub fn discover(root: &Path, config: &Config) -> Vec<Candidate> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !config.should_prune(&e.file_name().to_string_lossy())
        });

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        warn!("encountered {error_count} errors during file walk");
    }

    paths
        .into_iter()
        .filter_map(|abs| to_candidate(root, abs))
        .collect()
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(e) => {
                debug!(error = %e, "walk error");
                errors += 1;
            }
        }
    }
    (paths, errors)
}

fn to_candidate(root: &Path, abs: PathBuf) -> Option<Candidate> {
    let lang = Lang::from_path(&abs)?;
    let rel = abs.strip_prefix(root).ok().map(normalize_path)?;
    Some(Candidate { abs, rel, lang })
}

/// Normalizes a path to use forward slashes.
#[must_use]
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
