use clap::Parser;

use crate::cli::{CliArgs, Commands};

mod cli;
mod commands;

pub(crate) type CliResult<T> = std::result::Result<T, nibbleveil_core::NibbleveilError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Merge(cmd) => cmd.run(),
        Commands::Unmerge(cmd) => cmd.run(),
    }
}
