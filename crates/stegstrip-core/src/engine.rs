use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};
use log::{debug, warn};

use crate::error::StripError;
use crate::header::{HeaderValidator, MismatchPolicy};
use crate::options::StripOptions;
use crate::regions::{Region, RegionTracker};
use crate::result::Result;
use crate::scrub::scrub_byte;

/// What one completed pass saw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StripSummary {
    /// Total bytes consumed, which equals the bytes written.
    pub bytes_processed: u64,
    /// Completed 8-byte header groups that were checked.
    pub groups_checked: usize,
    /// Groups that accumulated to the sentinel.
    pub groups_valid: usize,
    /// Groups that did not. Nonzero only under the report policy.
    pub groups_invalid: usize,
    /// The stream ended inside the header region mid-group; those trailing
    /// bits were absorbed but never checked.
    pub partial_group_skipped: bool,
}

/// Single-pass strip driver.
///
/// Walks the input exactly once, byte by byte: classify the position,
/// let the validator consume header bits, then emit the original or the
/// scrubbed byte. All state lives for one pass; construct a fresh engine
/// per stream.
pub struct StripEngine {
    options: StripOptions,
    tracker: RegionTracker,
    validator: HeaderValidator,
}

impl StripEngine {
    pub fn new(options: StripOptions) -> Self {
        let tracker = RegionTracker::new(options.start_from);
        Self {
            options,
            tracker,
            validator: HeaderValidator::new(),
        }
    }

    /// Runs the pass. Consumes the engine, its state is meaningless after
    /// a run, completed or aborted.
    ///
    /// End of input ends the pass normally; the output always has exactly
    /// as many bytes as were consumed. Under [`MismatchPolicy::Fatal`] a
    /// bad header group aborts before the offending byte is written, so
    /// the output is left truncated at the mismatch point.
    pub fn process<R: Read, W: Write>(mut self, input: R, output: W) -> Result<StripSummary> {
        let mut reader = BufReader::new(input);
        let mut writer = BufWriter::new(output);
        let mut summary = StripSummary::default();
        let mut position: u64 = 0;

        loop {
            let byte = match reader.read_u8() {
                Ok(byte) => byte,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                Err(source) => return Err(StripError::ReadError { source }),
            };

            let region = self.tracker.classify(position);
            if region == Region::Header {
                if let Some(check) = self.validator.absorb(byte) {
                    summary.groups_checked += 1;
                    if check.is_valid() {
                        summary.groups_valid += 1;
                        debug!("header group {} accumulated to the sentinel", check.group);
                    } else {
                        summary.groups_invalid += 1;
                        warn!(
                            "header group {} checksum mismatch, accumulated {:#04x}",
                            check.group, check.found
                        );
                        if self.options.mismatch_policy == MismatchPolicy::Fatal {
                            let _ = writer.flush();
                            return Err(StripError::InvalidHeader {
                                found: check.found,
                                group: check.group,
                            });
                        }
                    }
                }
            }

            writer
                .write_u8(scrub_byte(byte, region, &self.options))
                .map_err(|source| StripError::WriteError { source })?;
            position += 1;
        }

        writer
            .flush()
            .map_err(|source| StripError::WriteError { source })?;

        summary.bytes_processed = position;
        summary.partial_group_skipped = self.validator.has_partial_group();
        if summary.partial_group_skipped {
            debug!("stream ended mid-group, trailing header bits were not checked");
        }

        Ok(summary)
    }
}
