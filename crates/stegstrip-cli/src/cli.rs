use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Stream offset where the marker region begins
    #[arg(long = "start-offset", default_value = "0")]
    pub start_offset: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Strip(strip::StripArgs),
    Check(check::CheckArgs),
    Extract(extract::ExtractArgs),
}
