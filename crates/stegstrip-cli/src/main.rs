use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

use crate::cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, stegstrip_core::StripError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let result = match args.command {
        Commands::Strip(cmd) => cmd.run(args.start_offset),
        Commands::Check(cmd) => cmd.run(args.start_offset),
        Commands::Extract(cmd) => cmd.run(args.start_offset),
    };

    match result {
        Ok(()) => {
            println!();
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
