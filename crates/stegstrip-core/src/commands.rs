use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::engine::{StripEngine, StripSummary};
use crate::error::StripError;
use crate::extract::{OneBitUnveil, PayloadDecoder};
use crate::options::StripOptions;
use crate::result::Result;

/// Runs the full sanitization pass, writing a scrubbed copy of the stream.
///
/// The output file is created before the pass starts; on a fatal header
/// mismatch it is left behind truncated at the mismatch point.
pub fn strip(input: &Path, output: &Path, options: &StripOptions) -> Result<StripSummary> {
    let reader = open(input)?;
    let writer = File::create(output).map_err(|source| StripError::OpenError {
        path: output.to_path_buf(),
        source,
    })?;

    StripEngine::new(options.clone()).process(reader, writer)
}

/// Validation-only pass. Every region is preserved and the output is
/// discarded, only the summary survives.
pub fn check(input: &Path, options: &StripOptions) -> Result<StripSummary> {
    let reader = open(input)?;
    let options = StripOptions {
        keep_marker: true,
        keep_header: true,
        keep_payload: true,
        ..options.clone()
    };

    StripEngine::new(options).process(reader, io::sink())
}

/// Dumps the payload-region hidden bits, assembled into bytes, without any
/// content interpretation. Just a raw binary dump of what the LSBs carry.
pub fn extract(input: &Path, output: &Path, options: &StripOptions) -> Result<u64> {
    let mut content = Vec::new();
    open(input)?
        .read_to_end(&mut content)
        .map_err(|source| StripError::ReadError { source })?;

    let payload_start = usize::try_from(options.payload_offset())
        .unwrap_or(usize::MAX)
        .min(content.len());

    let mut decoder = PayloadDecoder::new(content[payload_start..].iter().copied(), OneBitUnveil);
    let mut payload = Vec::new();
    decoder.read_to_end(&mut payload)?;

    let mut destination = File::create(output).map_err(|source| StripError::OpenError {
        path: output.to_path_buf(),
        source,
    })?;
    destination
        .write_all(&payload)
        .map_err(|source| StripError::WriteError { source })?;

    Ok(payload.len() as u64)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| StripError::OpenError {
        path: path.to_path_buf(),
        source,
    })
}
