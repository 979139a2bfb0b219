//! obsctl - OBS project manifest reconciler
//!
//! Reads a YAML manifest enumerating Open Build Service projects and
//! verifies, via the remote OBS API, that each named project exists.
//! "Reconcile" here means verify existence, never repair divergence.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod credentials;
mod error;
mod manifest_path;
mod obs;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Reconcile(args) => commands::reconcile::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
