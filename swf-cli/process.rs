//! Per-file job orchestration and the batch driver.

use std::path::{Path, PathBuf};

use swf_core::{Recompressor, TranscodeSummary, ZopfliRecompressor};
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{InvocationError, JobFailure};
use crate::io::{load_input, output_path_for, write_output};
use crate::operations::{emit_summary, recompress_swf};

/// Progress of a single file job.
///
/// A job moves forward one stage at a time; any failure ends it at the
/// stage it had reached, without producing an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStage {
    /// Nothing has been done yet
    Start,
    /// Header parsed and validated
    HeaderParsed,
    /// Raw body extracted
    BodyExtracted,
    /// Body recompressed and output assembled
    Recompressed,
    /// Output file written
    Written,
    /// Job finished successfully
    Done,
}

/// Outcome of a successful file job.
#[derive(Debug, Clone)]
pub struct JobReport {
    /// Path of the input file
    pub input: PathBuf,
    /// Path of the written output file
    pub output: PathBuf,
    /// Size statistics
    pub summary: TranscodeSummary,
}

/// Outcome of a whole batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful jobs, in input order
    pub succeeded: Vec<JobReport>,
    /// Failed jobs, in input order
    pub failed: Vec<InvocationError>,
}

/// Processes a single file with a zopfli recompressor built from `config`.
///
/// # Errors
///
/// See [`process_file_with`].
pub fn process_file(input_path: &str, config: &CliConfig) -> Result<JobReport, JobFailure> {
    let recompressor = ZopfliRecompressor::new(config.recompress_options());
    process_file_with(input_path, config, &recompressor)
}

/// Processes a single file with the given recompressor.
///
/// This is the main entry point for file processing. It orchestrates the
/// complete workflow:
///
/// 1. Derives the output path from the input path and configured suffix
/// 2. Loads the input file into memory
/// 3. Parses the header, extracts and recompresses the body
/// 4. Writes the assembled output atomically
///
/// All buffers belong to this call and are released when it returns.
///
/// # Errors
///
/// Returns a [`JobFailure`] naming the last completed stage when:
///
/// - The input cannot be read, is empty or is a directory
/// - The header is truncated, corrupt or has an unsupported signature/version
/// - The zlib body does not inflate to the declared size
/// - The output file cannot be written
pub fn process_file_with<R: Recompressor + ?Sized>(
    input_path: &str,
    config: &CliConfig,
    recompressor: &R,
) -> Result<JobReport, JobFailure> {
    let mut stage = JobStage::Start;
    let fail = |stage| move |source| JobFailure { stage, source };

    let input = Path::new(input_path);
    let output = output_path_for(input, &config.suffix).map_err(fail(stage))?;
    let loaded = load_input(input).map_err(fail(stage))?;

    let transcoded =
        recompress_swf(&loaded.bytes, recompressor, &mut stage).map_err(fail(stage))?;
    let permissions = loaded.permissions;
    drop(loaded.bytes);

    write_output(&output, &transcoded.bytes, Some(permissions)).map_err(fail(stage))?;
    stage = JobStage::Written;
    debug!(?stage, output = %output.display(), "job stage reached");

    emit_summary(config, &transcoded.summary);
    stage = JobStage::Done;
    debug!(?stage, input = input_path, "job finished");

    Ok(JobReport {
        input: input.to_path_buf(),
        output,
        summary: transcoded.summary,
    })
}

/// Runs the recompressor over every input file.
///
/// Files are processed sequentially. A failing file is reported on stderr as
/// `program: file: message` and the batch moves on to the next file; no
/// failure aborts the run.
pub fn run_cli(files: &[String], config: &CliConfig, program: &str) -> BatchReport {
    let mut report = BatchReport::default();

    if files.is_empty() {
        eprintln!("Please provide filename\nFor help, type: {program} -h");
        return report;
    }

    let recompressor = ZopfliRecompressor::new(config.recompress_options());
    for file in files {
        if config.verbose {
            if let Ok(output) = output_path_for(Path::new(file), &config.suffix) {
                eprintln!("Saving to: {}", output.display());
            }
        }

        match process_file_with(file, config, &recompressor) {
            Ok(job) => report.succeeded.push(job),
            Err(source) => {
                let err = InvocationError {
                    program: program.to_string(),
                    file: file.clone(),
                    source,
                };
                eprintln!("{err}");
                report.failed.push(err);
            }
        }
    }

    report
}
