use clap::Parser;
use colored::Colorize;
use rankmap_core::cli::{self, Cli};
use rankmap_core::exit::RankMapExit;
use rankmap_core::logging;

fn main() -> RankMapExit {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if let Some(cmd) = cli.command {
        cli::dispatch::execute(cmd)
    } else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        Ok(RankMapExit::Success)
    };

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red());
            RankMapExit::for_error(&e)
        }
    }
}
