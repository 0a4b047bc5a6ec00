//! Error types and result handling for SWF header parsing and recompression.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the in-memory SWF transform.
#[derive(Debug)]
pub enum Error {
    /// Input is shorter than the fixed SWF header.
    TruncatedInput {
        /// Number of bytes actually available
        len: usize,
    },

    /// The first signature byte selects a body encoding we do not handle.
    UnsupportedSignature {
        /// The offending signature byte
        signature: u8,
    },

    /// The header declares a format version older than the minimum.
    UnsupportedVersion {
        /// Version byte found in the header
        version: u8,
    },

    /// The declared total length cannot even cover the header itself.
    CorruptHeader {
        /// Declared total file length from the header
        declared_length: u32,
    },

    /// The zlib body could not be inflated to exactly the declared size.
    DecompressionFailure {
        /// Reason reported by the decoder or the size check
        message: String,
    },

    /// The buffer sized from the header could not be reserved.
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },

    /// The recompressor reported a failure.
    Compression {
        /// Message from the compression backend
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TruncatedInput { len } => write!(
                f,
                "file is too short to hold an SWF header ({len} of {} bytes)",
                crate::header::HEADER_SIZE
            ),
            Error::UnsupportedSignature { signature } => {
                write!(f, "Unsupported SWF signature: {}", signature.escape_ascii())
            }
            Error::UnsupportedVersion { version } => write!(
                f,
                "Unsupported SWF version {version}: SWF version must be equal or greater than {}",
                crate::header::MIN_VERSION
            ),
            Error::CorruptHeader { declared_length } => write!(
                f,
                "corrupt SWF header: declared length {declared_length} is smaller than the header"
            ),
            Error::DecompressionFailure { message } => {
                write!(f, "Failed to uncompress zlib data: {message}")
            }
            Error::AllocationFailed { capacity } => {
                write!(f, "unable to allocate body buffer of {capacity} bytes")
            }
            Error::Compression { message } => write!(f, "compression failed: {message}"),
        }
    }
}

impl std::error::Error for Error {}
