//! Extraction of the raw SWF body from either input variant.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::ZlibDecoder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::header::{BodyEncoding, SwfHeader, HEADER_SIZE};

/// Returns the raw (uncompressed) body of an SWF file.
///
/// For `FWS` input the body is borrowed straight from `input`, everything
/// after the header. For `CWS` input the zlib stream is inflated into a
/// buffer bounded by the header's declared length.
///
/// # Errors
///
/// Returns [`Error::DecompressionFailure`] or [`Error::AllocationFailed`] for
/// `CWS` input whose body does not inflate to exactly the declared size.
pub fn extract_body<'a>(header: &SwfHeader, input: &'a [u8]) -> Result<Cow<'a, [u8]>> {
    let body = input.get(HEADER_SIZE..).unwrap_or_default();

    match header.body_encoding() {
        BodyEncoding::Uncompressed => Ok(Cow::Borrowed(body)),
        BodyEncoding::Zlib => inflate_bounded(body, header.expected_body_len()).map(Cow::Owned),
    }
}

/// Inflates a zlib stream that must decode to exactly `expected_len` bytes.
///
/// The decoder is never allowed to produce more than `expected_len + 1`
/// bytes, which is enough to tell an oversized stream apart from an exact
/// one without following a decompression bomb any further. Trailing bytes
/// after the end of the zlib stream are ignored.
///
/// # Errors
///
/// - [`Error::AllocationFailed`] if a buffer of `expected_len` bytes cannot be reserved
/// - [`Error::DecompressionFailure`] if the stream is malformed or its decoded
///   size differs from `expected_len`
pub fn inflate_bounded(stream: &[u8], expected_len: usize) -> Result<Vec<u8>> {
    let mut body = Vec::new();
    body.try_reserve_exact(expected_len)
        .map_err(|_| Error::AllocationFailed {
            capacity: expected_len,
        })?;

    let limit = (expected_len as u64).saturating_add(1);
    ZlibDecoder::new(stream)
        .take(limit)
        .read_to_end(&mut body)
        .map_err(|err| Error::DecompressionFailure {
            message: err.to_string(),
        })?;

    if body.len() != expected_len {
        let message = if body.len() > expected_len {
            format!("data exceeds the declared size of {expected_len} bytes")
        } else {
            format!(
                "inflated {} bytes but the header declares {expected_len}",
                body.len()
            )
        };
        return Err(Error::DecompressionFailure { message });
    }

    debug!(
        compressed = stream.len(),
        inflated = body.len(),
        "inflated SWF body"
    );

    Ok(body)
}
