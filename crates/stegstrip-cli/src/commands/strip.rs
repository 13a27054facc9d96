use std::path::PathBuf;

use clap::{Args, ValueEnum};
use log::info;

use stegstrip_core::scrub::{OneBitMask, OneBitSet, RoundToExtreme};
use stegstrip_core::{MismatchPolicy, ScrubAlgorithms};

#[derive(Args, Debug)]
pub struct StripArgs {
    /// Stego stream to sanitize, used readonly
    pub input: PathBuf,

    /// Scrubbed stream will be stored as this file
    pub output: PathBuf,

    /// Keep marker region bytes instead of overwriting them
    #[arg(long)]
    pub keep_marker: bool,

    /// Keep header region bytes instead of overwriting them
    #[arg(long)]
    pub keep_header: bool,

    /// Keep payload region bytes instead of rewriting them
    #[arg(long)]
    pub keep_payload: bool,

    /// Payload rewrite algorithm
    #[arg(long, value_enum, default_value = "mask")]
    pub scrub_mode: ScrubMode,

    /// What to do when a header group fails its checksum
    #[arg(long, value_enum, default_value = "fail")]
    pub on_bad_header: HeaderAction,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ScrubMode {
    /// Clear the hidden bit, forcing even values
    Mask,
    /// Set the hidden bit unconditionally
    Set,
    /// Snap each byte to 0 or 255, for monochrome-extreme sources
    Round,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum HeaderAction {
    /// Abort the run, leaving the output truncated
    Fail,
    /// Report the mismatch and keep going
    Report,
}

impl StripArgs {
    pub fn run(self, start_offset: u64) -> crate::CliResult<()> {
        let scrub: ScrubAlgorithms = match self.scrub_mode {
            ScrubMode::Mask => OneBitMask.into(),
            ScrubMode::Set => OneBitSet.into(),
            ScrubMode::Round => RoundToExtreme.into(),
        };
        let policy = match self.on_bad_header {
            HeaderAction::Fail => MismatchPolicy::Fatal,
            HeaderAction::Report => MismatchPolicy::Report,
        };

        let summary = stegstrip_core::api::strip::prepare()
            .from_stego_file(self.input)
            .into_clean_file(self.output)
            .with_start_offset(start_offset)
            .keep_marker(self.keep_marker)
            .keep_header(self.keep_header)
            .keep_payload(self.keep_payload)
            .with_payload_scrub(scrub)
            .on_bad_header(policy)
            .execute()?;

        info!(
            "{} bytes scrubbed, {} of {} header groups valid",
            summary.bytes_processed, summary.groups_valid, summary.groups_checked
        );

        Ok(())
    }
}
