//! `roadmap` — render roadmap pages from descriptors

use clap::Parser;

use roadmap::cli::args::Cli;
use roadmap::cli::commands;
use roadmap::error::ExitCode;
use roadmap::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
