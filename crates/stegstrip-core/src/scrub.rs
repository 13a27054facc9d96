use enum_dispatch::enum_dispatch;

use crate::options::{StripOptions, HEADER_FILL, MARKER_FILL};
use crate::regions::Region;

/// Values at or above this (in the unsigned two's-complement view) snap up
/// to 255, everything below snaps down to 0.
const EXTREME_THRESHOLD: u8 = 254;

/// Rewrite strategy for one payload carrier byte.
#[enum_dispatch]
pub trait ScrubAlgorithm {
    /// Produces the byte to emit in place of `carrier`.
    fn scrub(&self, carrier: u8) -> u8;
}

/// Clears bit 0, forcing even values. Idempotent, lossy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneBitMask;

impl ScrubAlgorithm for OneBitMask {
    #[inline(always)]
    fn scrub(&self, carrier: u8) -> u8 {
        carrier & (u8::MAX - 1)
    }
}

/// Sets bit 0 unconditionally. Idempotent, lossy with the opposite bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneBitSet;

impl ScrubAlgorithm for OneBitSet {
    #[inline(always)]
    fn scrub(&self, carrier: u8) -> u8 {
        carrier | 0x1
    }
}

/// Snaps the byte to the nearest extreme of its unsigned range.
///
/// In the two's-complement view a signed -2 reads as 254 and snaps up to
/// 255, while 1 snaps down to 0. This recovers original values only for
/// streams whose true bytes already sit at the extremes, such as pure
/// black/white monochrome imagery. It is a lossy heuristic, not a general
/// reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundToExtreme;

impl ScrubAlgorithm for RoundToExtreme {
    #[inline(always)]
    fn scrub(&self, carrier: u8) -> u8 {
        if carrier >= EXTREME_THRESHOLD {
            u8::MAX
        } else {
            0
        }
    }
}

#[enum_dispatch(ScrubAlgorithm)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubAlgorithms {
    OneBitMask,
    OneBitSet,
    RoundToExtreme,
}

impl Default for ScrubAlgorithms {
    fn default() -> Self {
        OneBitMask.into()
    }
}

/// Maps one byte to the byte to emit, given its region and the configured
/// policy. Pure: no state beyond what the caller already tracks.
pub fn scrub_byte(byte: u8, region: Region, options: &StripOptions) -> u8 {
    match region {
        Region::Preamble => byte,
        Region::Marker if options.keep_marker => byte,
        Region::Marker => MARKER_FILL,
        Region::Header if options.keep_header => byte,
        Region::Header => HEADER_FILL,
        Region::Payload if options.keep_payload => byte,
        Region::Payload => options.payload_scrub.scrub(byte),
    }
}
