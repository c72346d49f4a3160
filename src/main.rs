//! whiteborder CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, build the
//! border configuration, process the batch and exit with appropriate status.
//! For programmatic use, prefer the library API (`whiteborder::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
