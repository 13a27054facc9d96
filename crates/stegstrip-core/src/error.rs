use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StripError {
    /// Represents a checksum mismatch in an 8-byte header group. The stream
    /// does not carry stego data in the expected layout.
    #[error("Header group {group} does not accumulate to the sentinel, found {found:#04x}")]
    InvalidHeader { found: u8, group: usize },

    /// Represents a failure to open the named stream.
    #[error("Error opening file {}", path.display())]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Represents a failure to read from the input stream mid-pass.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target stream.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No input stream set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
