//! In-memory transform from a source SWF file to its recompressed form.

use tracing::debug;

use crate::assemble::assemble;
use crate::error::Result;
use crate::extract::extract_body;
use crate::header::SwfHeader;
use crate::recompress::Recompressor;

/// Milestones reached by [`transcode_with`], in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The header was parsed and validated.
    HeaderParsed,
    /// The raw body is available.
    BodyExtracted,
    /// The body was recompressed and the output assembled.
    Recompressed,
}

/// Byte counts collected while transcoding one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeSummary {
    /// Size of the source file.
    pub input_len: usize,
    /// Size of the raw, uncompressed body.
    pub body_len: usize,
    /// Size of the recompressed zlib body.
    pub compressed_len: usize,
    /// Size of the assembled output file.
    pub output_len: usize,
}

/// Result of [`transcode`].
#[derive(Debug, Clone)]
pub struct Transcoded {
    /// Header parsed from the source file.
    pub source_header: SwfHeader,
    /// Complete output file: `CWS` header followed by the new zlib body.
    pub bytes: Vec<u8>,
    /// Size statistics.
    pub summary: TranscodeSummary,
}

/// Rewrites a complete SWF file with its body recompressed by `recompressor`.
///
/// Equivalent to [`transcode_with`] without a stage observer.
///
/// # Errors
///
/// Propagates the first failure from any stage; see [`crate::Error`].
pub fn transcode<R: Recompressor + ?Sized>(input: &[u8], recompressor: &R) -> Result<Transcoded> {
    transcode_with(input, recompressor, |_| {})
}

/// Rewrites a complete SWF file, reporting each completed [`Stage`].
///
/// Runs header parsing, body extraction, recompression and assembly in
/// order. Intermediate buffers are dropped as soon as the next stage owns
/// its result, whether the call succeeds or not.
///
/// # Errors
///
/// Propagates the first failure from any stage; see [`crate::Error`].
pub fn transcode_with<R, F>(input: &[u8], recompressor: &R, mut on_stage: F) -> Result<Transcoded>
where
    R: Recompressor + ?Sized,
    F: FnMut(Stage),
{
    let (source_header, body_offset) = SwfHeader::parse(input)?;
    debug!(
        version = source_header.version(),
        encoding = ?source_header.body_encoding(),
        body_offset,
        "header parsed"
    );
    on_stage(Stage::HeaderParsed);

    let body = extract_body(&source_header, input)?;
    let body_len = body.len();
    on_stage(Stage::BodyExtracted);

    let compressed = recompressor.compress(&body)?;
    let compressed_len = compressed.len();
    drop(body);

    let bytes = assemble(&source_header.to_compressed(), &compressed);
    on_stage(Stage::Recompressed);

    let summary = TranscodeSummary {
        input_len: input.len(),
        body_len,
        compressed_len,
        output_len: bytes.len(),
    };

    Ok(Transcoded {
        source_header,
        bytes,
        summary,
    })
}
