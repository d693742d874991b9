use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, EdgeStrategy, IdentityMode};

#[derive(Parser)]
#[command(
    name = "rankmap",
    version,
    about = "PageRank-ranked symbol maps of source repositories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Debug-level logging on stderr (overridden by RANKMAP_LOG)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Overrides for the ranking stage. Unset flags keep the rankmap.toml value.
#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// Percentage of ranked symbols to keep (0-100)
    #[arg(long, value_name = "PCT")]
    pub top: Option<u32>,
    /// Key nodes by relative path instead of file basename
    #[arg(long)]
    pub full_path_ids: bool,
    /// Use the quadratic edge scan instead of the name index
    #[arg(long)]
    pub pairwise: bool,
}

impl RankArgs {
    pub fn apply(&self, config: &mut Config) {
        if let Some(pct) = self.top {
            config.top_percentage = pct;
        }
        if self.full_path_ids {
            config.identity = IdentityMode::FullPath;
        }
        if self.pairwise {
            config.edges = EdgeStrategy::Pairwise;
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract declarations and write .rankmap/repo_map.json
    Scan {
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Rank the stored map and write .rankmap/concise.json
    Rank {
        #[arg(default_value = ".")]
        root: PathBuf,
        #[command(flatten)]
        opts: RankArgs,
    },
    /// Scan then rank, regenerating both artifacts
    Run {
        #[arg(default_value = ".")]
        root: PathBuf,
        #[command(flatten)]
        opts: RankArgs,
    },
    /// Print a stored map as a per-file listing
    Show {
        #[arg(default_value = ".")]
        root: PathBuf,
        /// Show the concise map instead of the raw map
        #[arg(long)]
        concise: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_flags_override() {
        let cli = Cli::parse_from(["rankmap", "rank", "repo", "--top", "50", "--pairwise"]);
        let Some(Commands::Rank { root, opts }) = cli.command else {
            panic!("expected rank");
        };
        assert_eq!(root, PathBuf::from("repo"));
        let mut config = Config::new();
        opts.apply(&mut config);
        assert_eq!(config.top_percentage, 50);
        assert_eq!(config.edges, EdgeStrategy::Pairwise);
        assert_eq!(config.identity, IdentityMode::Basename);
    }

    #[test]
    fn test_root_defaults_to_cwd() {
        let cli = Cli::parse_from(["rankmap", "--verbose", "show", "--concise"]);
        assert!(cli.verbose);
        let Some(Commands::Show { root, concise }) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(root, PathBuf::from("."));
        assert!(concise);
    }
}
