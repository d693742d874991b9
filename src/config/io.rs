// src/config/io.rs
//! Loading of the optional `rankmap.toml` file.

use std::fs;
use std::path::Path;

use super::types::{Config, RankMapToml};
use super::CONFIG_FILE;
use crate::error::{RankMapError, Result};

/// Reads `<root>/rankmap.toml`. A missing file yields the defaults.
///
/// # Errors
/// Returns `Config` if the file exists but is not valid TOML for [`RankMapToml`],
/// or `Io` if it exists but cannot be read.
pub fn load_toml_config(root: &Path) -> Result<RankMapToml> {
    let path = root.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(RankMapToml::default());
    }
    let content = fs::read_to_string(&path).map_err(|e| RankMapError::io(e, &path))?;
    parse_toml(&content)
}

/// Parses the contents of a `rankmap.toml` file.
///
/// # Errors
/// Returns `Config` describing the TOML error.
pub fn parse_toml(content: &str) -> Result<RankMapToml> {
    toml::from_str(content).map_err(|e| RankMapError::Config(format!("{CONFIG_FILE}: {e}")))
}

/// Folds file settings over a config, leaving unset keys untouched.
pub fn apply_toml(config: &mut Config, file: RankMapToml) {
    if let Some(pct) = file.top_percentage {
        config.top_percentage = pct;
    }
    if let Some(identity) = file.identity {
        config.identity = identity;
    }
    if let Some(edges) = file.edges {
        config.edges = edges;
    }
    config.ignore.extend(
        file.extra_ignore
            .into_iter()
            .map(|d| d.trim().trim_matches('/').to_string())
            .filter(|d| !d.is_empty()),
    );
}
