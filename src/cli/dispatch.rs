//! Command dispatch logic extracted from the binary.

use super::args::Commands;
use super::handlers::{handle_rank, handle_run, handle_scan, handle_show};
use crate::exit::RankMapExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<RankMapExit> {
    match command {
        Commands::Scan { root } => handle_scan(&root),
        Commands::Rank { root, opts } => handle_rank(&root, &opts),
        Commands::Run { root, opts } => handle_run(&root, &opts),
        Commands::Show { root, concise } => handle_show(&root, concise),
    }
}
