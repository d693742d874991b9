// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, EdgeStrategy, IdentityMode, RankMapToml};
use crate::error::{RankMapError, Result};
use std::path::Path;

/// Directory (under the scanned root) holding both artifacts.
pub const ARTIFACT_DIR: &str = ".rankmap";
/// Raw File→[declaration] map.
pub const RAW_MAP_FILE: &str = "repo_map.json";
/// PageRank-reduced map.
pub const CONCISE_MAP_FILE: &str = "concise.json";
/// Optional per-repository settings.
pub const CONFIG_FILE: &str = "rankmap.toml";

pub const DEFAULT_TOP_PERCENTAGE: u32 = 30;

/// Directory names never descended into, at any depth.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "__pycache__",
    "venv",
    ".venv",
    ".tox",
    ".cache",
    "build",
    "dist",
    "target",
    "bin",
    "obj",
    ".idea",
    ".vscode",
    ".settings",
    "coverage",
    "test",
    "tests",
    "__tests__",
    ARTIFACT_DIR,
];

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config with defaults overlaid by `<root>/rankmap.toml`.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or malformed.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::new();
        let file = io::load_toml_config(root)?;
        io::apply_toml(&mut config, file);
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `Config` if `top_percentage` is above 100.
    pub fn validate(&self) -> Result<()> {
        if self.top_percentage > 100 {
            return Err(RankMapError::Config(format!(
                "top_percentage must be within 0..=100, got {}",
                self.top_percentage
            )));
        }
        Ok(())
    }

    /// True if a directory with this name is excluded from traversal.
    #[must_use]
    pub fn should_prune(&self, dir_name: &str) -> bool {
        self.ignore.contains(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert_eq!(c.top_percentage, 30);
        assert_eq!(c.identity, IdentityMode::Basename);
        assert_eq!(c.edges, EdgeStrategy::Indexed);
        assert!(c.should_prune("node_modules"));
        assert!(c.should_prune(".rankmap"));
        assert!(!c.should_prune("src"));
    }

    #[test]
    fn test_parse_full_toml() {
        let file = io::parse_toml(
            "top_percentage = 50\nidentity = \"full_path\"\nedges = \"pairwise\"\nextra_ignore = [\"fixtures/\"]",
        )
        .unwrap();
        let mut c = Config::new();
        io::apply_toml(&mut c, file);
        assert_eq!(c.top_percentage, 50);
        assert_eq!(c.identity, IdentityMode::FullPath);
        assert_eq!(c.edges, EdgeStrategy::Pairwise);
        assert!(c.should_prune("fixtures"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = io::parse_toml("top_percent = 10").unwrap_err();
        assert!(matches!(err, RankMapError::Config(_)));
    }

    #[test]
    fn test_validate_range() {
        let mut c = Config::new();
        c.top_percentage = 100;
        assert!(c.validate().is_ok());
        c.top_percentage = 101;
        assert!(c.validate().is_err());
    }
}
