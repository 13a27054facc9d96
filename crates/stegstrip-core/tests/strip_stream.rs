use std::fs;

use tempfile::TempDir;

use stegstrip_core::commands::{check, extract, strip};
use stegstrip_core::options::{
    HEADER_FILL, HEADER_LEN, HEADER_SENTINEL, MARKER_FILL, MARKER_LEN,
};
use stegstrip_core::{MismatchPolicy, Result, StripError, StripOptions};

const START_FROM: u64 = 100;

/// A 200-byte stream with a valid header embedded at bytes 127..191 and a
/// given byte value everywhere else.
fn stego_fixture(fill: u8) -> Vec<u8> {
    let mut bytes = vec![fill; 200];
    let header_start = (START_FROM as usize) + MARKER_LEN;
    for i in 0..HEADER_LEN {
        bytes[header_start + i] = (fill & !1) | ((HEADER_SENTINEL >> (i % 8)) & 0x1);
    }
    bytes
}

fn options() -> StripOptions {
    StripOptions {
        start_from: START_FROM,
        ..StripOptions::default()
    }
}

#[test]
fn should_strip_a_200_byte_stream_region_by_region() -> Result<()> {
    let dir = TempDir::new()?;
    let stego = dir.path().join("stego.bin");
    let clean = dir.path().join("clean.bin");
    fs::write(&stego, stego_fixture(0xCD))?;

    let summary = strip(&stego, &clean, &options())?;

    let output = fs::read(&clean)?;
    assert_eq!(output.len(), 200);
    assert!(output[..100].iter().all(|b| *b == 0xCD));
    assert!(output[100..127].iter().all(|b| *b == MARKER_FILL));
    assert!(output[127..191].iter().all(|b| *b == HEADER_FILL));
    assert!(output[191..].iter().all(|b| *b == 0xCD & !1));

    assert_eq!(summary.bytes_processed, 200);
    assert_eq!(summary.groups_valid, 8);
    Ok(())
}

#[test]
fn should_truncate_the_output_on_a_fatal_header_mismatch() -> Result<()> {
    let dir = TempDir::new()?;
    let stego = dir.path().join("stego.bin");
    let clean = dir.path().join("clean.bin");

    let mut bytes = stego_fixture(0xCD);
    bytes[(START_FROM as usize) + MARKER_LEN + 12] ^= 0x1;
    fs::write(&stego, bytes)?;

    let result = strip(&stego, &clean, &options());
    match result {
        Err(StripError::InvalidHeader { group, .. }) => assert_eq!(group, 1),
        other => panic!("expected InvalidHeader, got {other:?}"),
    }

    let written = fs::metadata(&clean)?.len();
    assert!(
        written < 200,
        "output must be truncated, but {written} bytes were written"
    );
    Ok(())
}

#[test]
fn should_leave_the_input_file_untouched_by_check() -> Result<()> {
    let dir = TempDir::new()?;
    let stego = dir.path().join("stego.bin");
    let original = stego_fixture(0x3C);
    fs::write(&stego, &original)?;

    let summary = check(&stego, &options())?;

    assert_eq!(fs::read(&stego)?, original);
    assert_eq!(summary.groups_checked, 8);
    assert_eq!(summary.groups_valid, 8);
    assert!(!summary.partial_group_skipped);
    Ok(())
}

#[test]
fn should_report_mismatches_without_failing_under_the_report_policy() -> Result<()> {
    let dir = TempDir::new()?;
    let stego = dir.path().join("stego.bin");

    let mut bytes = stego_fixture(0x3C);
    bytes[(START_FROM as usize) + MARKER_LEN] ^= 0x1;
    fs::write(&stego, bytes)?;

    let opts = StripOptions {
        mismatch_policy: MismatchPolicy::Report,
        ..options()
    };
    let summary = check(&stego, &opts)?;

    assert_eq!(summary.bytes_processed, 200);
    assert_eq!(summary.groups_invalid, 1);
    assert_eq!(summary.groups_valid, 7);
    Ok(())
}

#[test]
fn should_extract_the_payload_message_bits() -> Result<()> {
    let dir = TempDir::new()?;
    let stego = dir.path().join("stego.bin");
    let payload = dir.path().join("payload.bin");

    // 9 payload carrier bytes: one hidden 'K' (0x4B, LSB first) plus one
    // leftover carrier that cannot fill a byte
    let mut bytes = stego_fixture(0xA8);
    bytes.truncate((START_FROM as usize) + MARKER_LEN + HEADER_LEN);
    for bit in 0..8u8 {
        bytes.push(0xA8 | ((0x4B >> bit) & 0x1));
    }
    bytes.push(0xA9);
    fs::write(&stego, bytes)?;

    let extracted = extract(&stego, &payload, &options())?;

    assert_eq!(extracted, 1);
    assert_eq!(fs::read(&payload)?, b"K");
    Ok(())
}

#[test]
fn should_name_the_path_when_the_input_cannot_be_opened() {
    let missing = std::path::Path::new("/definitely/not/here.bin");
    let result = check(missing, &StripOptions::default());

    match result {
        Err(StripError::OpenError { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected OpenError, got {other:?}"),
    }
}
