use clap::Parser;

use imgstub_core::error::Result;

mod application;
mod presentation;

use application::handlers;
use presentation::cli::{Cli, Commands};

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Seed {
            only,
            base_dir,
            debug,
        } => handlers::handle_seed(only, base_dir, debug),

        Commands::Scan {
            config,
            only,
            base_dir,
            debug,
        } => handlers::handle_scan(config, only, base_dir, debug),

        Commands::Status { config, base_dir } => handlers::handle_status(config, base_dir),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("imgstubdev: {e}");
        std::process::exit(1);
    }
}
