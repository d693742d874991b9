use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{DEFAULT_TOP_PERCENTAGE, PRUNE_DIRS};

/// How graph nodes are keyed to their owning file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityMode {
    /// `basename:symbol`. Same-named files in different directories share nodes.
    #[default]
    Basename,
    /// `relative/path:symbol`. Keeps same-named files apart.
    FullPath,
}

/// Which edge derivation runs. Both yield the same edge set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStrategy {
    /// Every declaration against every other declaration.
    Pairwise,
    /// Word-run substrings looked up in a name index.
    #[default]
    Indexed,
}

/// On-disk shape of `rankmap.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankMapToml {
    #[serde(default)]
    pub top_percentage: Option<u32>,
    #[serde(default)]
    pub identity: Option<IdentityMode>,
    #[serde(default)]
    pub edges: Option<EdgeStrategy>,
    #[serde(default)]
    pub extra_ignore: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub top_percentage: u32,
    pub identity: IdentityMode,
    pub edges: EdgeStrategy,
    pub ignore: BTreeSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top_percentage: DEFAULT_TOP_PERCENTAGE,
            identity: IdentityMode::default(),
            edges: EdgeStrategy::default(),
            ignore: PRUNE_DIRS.iter().map(|d| (*d).to_string()).collect(),
        }
    }
}
