//! Fixed SWF file header: parsing, validation and re-serialization.
//!
//! Layout (8 bytes, multi-byte fields little-endian):
//!
//! | offset | size | field             |
//! |--------|------|-------------------|
//! | 0      | 3    | signature (`?WS`) |
//! | 3      | 1    | version           |
//! | 4      | 4    | declared length   |

use tracing::trace;

use crate::error::{Error, Result};

/// Size of the SWF header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Oldest SWF version whose compressed variant players accept.
pub const MIN_VERSION: u8 = 6;

/// Signature byte of an uncompressed SWF file.
pub const SIGNATURE_UNCOMPRESSED: u8 = b'F';

/// Signature byte of a zlib-compressed SWF file.
pub const SIGNATURE_ZLIB: u8 = b'C';

/// Encoding of the body that follows the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `FWS`: the body is stored as-is.
    Uncompressed,
    /// `CWS`: the body is a zlib stream.
    Zlib,
}

/// Parsed SWF header.
///
/// Instances are read-only: the output header is derived with
/// [`SwfHeader::to_compressed`] instead of mutating the parsed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwfHeader {
    signature: [u8; 3],
    version: u8,
    declared_length: u32,
}

impl SwfHeader {
    /// Parses and validates the header at the start of `input`.
    ///
    /// Returns the header together with the offset at which the body starts.
    ///
    /// # Errors
    ///
    /// - [`Error::TruncatedInput`] if `input` is shorter than [`HEADER_SIZE`]
    /// - [`Error::UnsupportedSignature`] if the first byte is neither `F` nor `C`
    /// - [`Error::UnsupportedVersion`] if the version is below [`MIN_VERSION`]
    /// - [`Error::CorruptHeader`] if the declared length is below [`HEADER_SIZE`]
    pub fn parse(input: &[u8]) -> Result<(Self, usize)> {
        let Some(raw) = input.first_chunk::<HEADER_SIZE>() else {
            return Err(Error::TruncatedInput { len: input.len() });
        };

        let header = Self {
            signature: [raw[0], raw[1], raw[2]],
            version: raw[3],
            declared_length: u32::from_le_bytes([raw[4], raw[5], raw[6], raw[7]]),
        };

        if !matches!(header.signature[0], SIGNATURE_UNCOMPRESSED | SIGNATURE_ZLIB) {
            return Err(Error::UnsupportedSignature {
                signature: header.signature[0],
            });
        }
        if header.version < MIN_VERSION {
            return Err(Error::UnsupportedVersion {
                version: header.version,
            });
        }
        if (header.declared_length as usize) < HEADER_SIZE {
            return Err(Error::CorruptHeader {
                declared_length: header.declared_length,
            });
        }

        trace!(
            signature = %header.signature.escape_ascii(),
            version = header.version,
            declared_length = header.declared_length,
            "parsed SWF header"
        );

        Ok((header, HEADER_SIZE))
    }

    /// The three signature bytes as stored.
    pub fn signature(&self) -> [u8; 3] {
        self.signature
    }

    /// SWF format version.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Total file length declared by the source file, header included.
    pub fn declared_length(&self) -> u32 {
        self.declared_length
    }

    /// Encoding of the body, selected by the first signature byte.
    pub fn body_encoding(&self) -> BodyEncoding {
        if self.signature[0] == SIGNATURE_ZLIB {
            BodyEncoding::Zlib
        } else {
            BodyEncoding::Uncompressed
        }
    }

    /// Uncompressed body size implied by the declared length.
    pub fn expected_body_len(&self) -> usize {
        self.declared_length as usize - HEADER_SIZE
    }

    /// Builds the header for the recompressed output.
    ///
    /// Only the first signature byte changes. The declared length is carried
    /// over from the source file unchanged.
    #[must_use]
    pub fn to_compressed(&self) -> Self {
        let mut signature = self.signature;
        signature[0] = SIGNATURE_ZLIB;
        Self { signature, ..*self }
    }

    /// Serializes the header into its on-disk byte layout.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0_u8; HEADER_SIZE];
        out[..3].copy_from_slice(&self.signature);
        out[3] = self.version;
        out[4..].copy_from_slice(&self.declared_length.to_le_bytes());
        out
    }
}
