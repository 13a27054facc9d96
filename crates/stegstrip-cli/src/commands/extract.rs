use std::path::PathBuf;

use clap::Args;

use stegstrip_core::StripOptions;

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Stego stream holding the hidden payload, used readonly
    pub input: PathBuf,

    /// Assembled payload bytes will be stored as this binary file
    pub output: PathBuf,
}

impl ExtractArgs {
    pub fn run(self, start_offset: u64) -> crate::CliResult<()> {
        let options = StripOptions {
            start_from: start_offset,
            ..StripOptions::default()
        };

        let extracted = stegstrip_core::commands::extract(&self.input, &self.output, &options)?;
        println!("{extracted} payload bytes extracted");

        Ok(())
    }
}
