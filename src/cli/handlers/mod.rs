// src/cli/handlers/mod.rs
pub mod report;

use crate::artifact;
use crate::cli::args::RankArgs;
use crate::config::Config;
use crate::exit::RankMapExit;
use crate::pipeline;
use crate::symbols::Extractor;
use anyhow::Result;
use std::path::Path;

fn load_config(root: &Path, opts: Option<&RankArgs>) -> Result<Config> {
    let mut config = Config::load(root)?;
    if let Some(opts) = opts {
        opts.apply(&mut config);
    }
    config.validate()?;
    Ok(config)
}

/// Handles the scan command.
///
/// # Errors
/// Returns error if the root is unreadable or the raw map cannot be written.
pub fn handle_scan(root: &Path) -> Result<RankMapExit> {
    let config = load_config(root, None)?;
    let extractor = Extractor::new()?;
    let outcome = pipeline::run_scan(root, &config, &extractor)?;
    report::print_scan(&outcome);
    Ok(RankMapExit::Success)
}

/// Handles the rank command.
///
/// # Errors
/// Returns error if the raw map is missing or corrupt, or the concise map cannot be written.
pub fn handle_rank(root: &Path, opts: &RankArgs) -> Result<RankMapExit> {
    let config = load_config(root, Some(opts))?;
    let extractor = Extractor::new()?;
    let outcome = pipeline::run_rank(root, &config, &extractor)?;
    report::print_rank(&outcome);
    Ok(RankMapExit::Success)
}

/// Handles the run command.
///
/// # Errors
/// Returns error if either stage fails.
pub fn handle_run(root: &Path, opts: &RankArgs) -> Result<RankMapExit> {
    let config = load_config(root, Some(opts))?;
    let extractor = Extractor::new()?;
    let (scanned, ranked) = pipeline::run(root, &config, &extractor)?;
    report::print_scan(&scanned);
    report::print_rank(&ranked);
    Ok(RankMapExit::Success)
}

/// Handles the show command.
///
/// # Errors
/// Returns error if the requested artifact is missing or corrupt.
pub fn handle_show(root: &Path, concise: bool) -> Result<RankMapExit> {
    let listing = if concise {
        report::format_concise_listing(&artifact::read_concise_map(root)?)
    } else {
        report::format_raw_listing(&artifact::read_raw_map(root)?)
    };
    print!("{listing}");
    Ok(RankMapExit::Success)
}
