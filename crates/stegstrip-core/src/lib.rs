//! # Stegstrip Core API
//!
//! Strips or reports on hidden payload bits embedded in the
//! least-significant bits of a raw byte stream. The scheme is fixed-format
//! and single-pass: an untouched preamble up to a configured start offset,
//! a 27-byte marker run, a 64-byte header run whose bit-0 XOR checksum must
//! accumulate to `0xA5` every 8 bytes, and a payload region carrying one
//! hidden bit per byte.
//!
//! The input is treated purely as an opaque byte sequence; no container or
//! image format is ever interpreted.
//!
//! # Usage Examples
//!
//! ## Strip a stego stream
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let stego = temp_dir.path().join("stego.bin");
//! std::fs::write(&stego, vec![0u8; 32]).expect("Failed to write fixture");
//!
//! stegstrip_core::api::strip::prepare()
//!     .from_stego_file(&stego)
//!     .into_clean_file(temp_dir.path().join("clean.bin"))
//!     .with_start_offset(4)
//!     .execute()
//!     .expect("Failed to strip the stream");
//! ```
//!
//! ## Drive the engine over in-memory bytes
//!
//! ```rust
//! use stegstrip_core::{StripEngine, StripOptions};
//!
//! let input = vec![7u8; 16];
//! let mut output = Vec::new();
//!
//! let options = StripOptions { start_from: 100, ..StripOptions::default() };
//! let summary = StripEngine::new(options)
//!     .process(input.as_slice(), &mut output)
//!     .expect("Failed to process the stream");
//!
//! assert_eq!(output, input); // stream ends before the marker region
//! assert_eq!(summary.bytes_processed, 16);
//! ```

pub mod api;
pub mod commands;
pub mod engine;
pub mod error;
pub mod extract;
pub mod header;
pub mod options;
pub mod regions;
pub mod result;
pub mod scrub;

pub use crate::engine::{StripEngine, StripSummary};
pub use crate::error::StripError;
pub use crate::header::{HeaderValidator, MismatchPolicy};
pub use crate::options::StripOptions;
pub use crate::regions::{Region, RegionTracker};
pub use crate::result::Result;
pub use crate::scrub::ScrubAlgorithms;
