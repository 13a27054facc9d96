use crate::header::MismatchPolicy;
use crate::scrub::ScrubAlgorithms;

/// Length of the marker run that follows the preamble. It carries no
/// checksum semantics, it only spaces the header away from the start offset.
pub const MARKER_LEN: usize = 27;

/// Length of the validated header run that follows the marker region.
/// A multiple of 8, so a complete header never ends mid-group.
pub const HEADER_LEN: usize = 64;

/// Expected XOR accumulation of every 8-byte header group.
pub const HEADER_SENTINEL: u8 = 0xA5;

/// Fill byte written over scrubbed marker bytes.
pub const MARKER_FILL: u8 = 1;

/// Fill byte written over scrubbed header bytes.
pub const HEADER_FILL: u8 = 0;

/// Immutable configuration for one strip pass.
///
/// Constructed once and handed to the engine; there is no mutable global
/// state anywhere in the pipeline.
#[derive(Debug, Clone)]
pub struct StripOptions {
    /// First stream position that belongs to the marker region.
    /// Everything before it is passed through untouched.
    pub start_from: u64,

    /// If true marker bytes are emitted as-is instead of being overwritten
    /// with [`MARKER_FILL`].
    pub keep_marker: bool,

    /// If true header bytes are emitted as-is instead of being overwritten
    /// with [`HEADER_FILL`]. Validation happens either way.
    pub keep_header: bool,

    /// If true payload bytes are emitted as-is, skipping the scrub algorithm.
    pub keep_payload: bool,

    /// The rewrite strategy applied to payload bytes.
    pub payload_scrub: ScrubAlgorithms,

    /// What a header checksum mismatch does to the run.
    pub mismatch_policy: MismatchPolicy,
}

impl Default for StripOptions {
    /// Mirrors the behavior of the classic destroyer tool: overwrite every
    /// stego-bearing region and abort on the first bad header group.
    fn default() -> Self {
        Self {
            start_from: 0,
            keep_marker: false,
            keep_header: false,
            keep_payload: false,
            payload_scrub: ScrubAlgorithms::default(),
            mismatch_policy: MismatchPolicy::default(),
        }
    }
}

impl StripOptions {
    /// Stream position of the first payload byte, assuming the stream is
    /// long enough to contain marker and header runs.
    pub fn payload_offset(&self) -> u64 {
        self.start_from + (MARKER_LEN + HEADER_LEN) as u64
    }
}
