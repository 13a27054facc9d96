use std::path::PathBuf;

use clap::Args;

use stegstrip_core::{MismatchPolicy, StripOptions};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Stream suspected to contain stego data, used readonly
    pub input: PathBuf,
}

impl CheckArgs {
    pub fn run(self, start_offset: u64) -> crate::CliResult<()> {
        let options = StripOptions {
            start_from: start_offset,
            mismatch_policy: MismatchPolicy::Report,
            ..StripOptions::default()
        };

        let summary = stegstrip_core::commands::check(&self.input, &options)?;

        println!("{} bytes scanned", summary.bytes_processed);
        println!(
            "{} of {} header groups valid",
            summary.groups_valid, summary.groups_checked
        );
        if summary.partial_group_skipped {
            println!("trailing partial header group was not checked");
        }

        Ok(())
    }
}
