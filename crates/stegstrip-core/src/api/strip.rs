use std::path::{Path, PathBuf};

use crate::commands;
use crate::engine::StripSummary;
use crate::error::StripError;
use crate::header::MismatchPolicy;
use crate::options::StripOptions;
use crate::scrub::ScrubAlgorithms;

pub fn prepare() -> StripApi {
    StripApi::default()
}

#[derive(Default, Debug)]
pub struct StripApi {
    stego_file: Option<PathBuf>,
    clean_file: Option<PathBuf>,
    options: StripOptions,
}

impl StripApi {
    /// Use the given options wholesale, replacing anything set so far.
    pub fn with_options(mut self, options: StripOptions) -> Self {
        self.options = options;
        self
    }

    /// Stream offset where the marker region begins.
    pub fn with_start_offset(mut self, start_from: u64) -> Self {
        self.options.start_from = start_from;
        self
    }

    /// The rewrite strategy applied to payload bytes.
    pub fn with_payload_scrub(mut self, algorithm: ScrubAlgorithms) -> Self {
        self.options.payload_scrub = algorithm;
        self
    }

    /// What a header checksum mismatch does to the run.
    pub fn on_bad_header(mut self, policy: MismatchPolicy) -> Self {
        self.options.mismatch_policy = policy;
        self
    }

    pub fn keep_marker(mut self, keep: bool) -> Self {
        self.options.keep_marker = keep;
        self
    }

    pub fn keep_header(mut self, keep: bool) -> Self {
        self.options.keep_header = keep;
        self
    }

    pub fn keep_payload(mut self, keep: bool) -> Self {
        self.options.keep_payload = keep;
        self
    }

    /// This is the stego stream to sanitize.
    pub fn from_stego_file(mut self, stego_file: impl AsRef<Path>) -> Self {
        self.stego_file = Some(stego_file.as_ref().to_path_buf());
        self
    }

    /// This is where the scrubbed stream will be saved.
    pub fn into_clean_file(mut self, clean_file: impl AsRef<Path>) -> Self {
        self.clean_file = Some(clean_file.as_ref().to_path_buf());
        self
    }

    /// Execute the strip pass and block until it is finished.
    pub fn execute(self) -> Result<StripSummary, StripError> {
        let Some(stego_file) = self.stego_file else {
            return Err(StripError::CarrierNotSet);
        };
        let Some(clean_file) = self.clean_file else {
            return Err(StripError::TargetNotSet);
        };

        commands::strip(&stego_file, &clean_file, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_refuse_to_run_without_an_input() {
        let result = prepare().into_clean_file("/tmp/never-written.bin").execute();

        match result {
            Err(StripError::CarrierNotSet) => (),
            other => panic!("expected CarrierNotSet, got {other:?}"),
        }
    }

    #[test]
    fn should_refuse_to_run_without_an_output() {
        let result = prepare().from_stego_file("Cargo.toml").execute();

        match result {
            Err(StripError::TargetNotSet) => (),
            other => panic!("expected TargetNotSet, got {other:?}"),
        }
    }
}
