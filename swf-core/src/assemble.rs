//! Reassembly of the output SWF file.

use crate::header::{SwfHeader, HEADER_SIZE};

/// Concatenates the serialized `header` and the recompressed `body`.
///
/// The header is written with the same layout and size as it was read, so
/// the body always starts at [`HEADER_SIZE`].
pub fn assemble(header: &SwfHeader, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE + body.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(body);
    out
}
