//! Recompression of a single loaded SWF file.

use swf_core::{transcode_with, Recompressor, Stage, TranscodeSummary, Transcoded};

use crate::config::CliConfig;
use crate::error::Result;
use crate::process::JobStage;

/// Recompresses a complete SWF file held in memory.
///
/// `stage` is advanced as the header is parsed, the body extracted and the
/// body recompressed, so a failure can be attributed to the step that
/// caused it.
///
/// # Errors
///
/// Returns [`crate::Error::Format`] wrapping the core failure.
pub fn recompress_swf<R: Recompressor + ?Sized>(
    input: &[u8],
    recompressor: &R,
    stage: &mut JobStage,
) -> Result<Transcoded> {
    let transcoded = transcode_with(input, recompressor, |reached| {
        *stage = match reached {
            Stage::HeaderParsed => JobStage::HeaderParsed,
            Stage::BodyExtracted => JobStage::BodyExtracted,
            Stage::Recompressed => JobStage::Recompressed,
        };
        tracing::debug!(stage = ?*stage, "job stage reached");
    })?;
    Ok(transcoded)
}

/// Emit verbose output for a completed recompression.
pub fn emit_summary(config: &CliConfig, summary: &TranscodeSummary) {
    if !config.verbose {
        return;
    }

    eprintln!(
        "Original Size: {}, Zopfli: {}, Compression: {:.1}% Removed",
        summary.body_len,
        summary.compressed_len,
        removed_percent(summary.body_len, summary.compressed_len)
    );
    eprintln!(
        "Recompressed {} bytes to {} bytes ({:.1}% of input, {} bytes uncompressed)",
        summary.input_len,
        summary.output_len,
        ratio(summary.output_len, summary.input_len),
        summary.body_len
    );
}

/// Output size as a percentage of the input size.
#[allow(clippy::cast_precision_loss)]
pub fn ratio(output: usize, input: usize) -> f64 {
    if input == 0 {
        return 0.0;
    }
    output as f64 / input as f64 * 100.0
}

/// Share of the raw body removed by recompression, in percent.
pub fn removed_percent(raw: usize, compressed: usize) -> f64 {
    if raw == 0 {
        return 0.0;
    }
    100.0 - ratio(compressed, raw)
}
