//! Error types for SWF recompressor CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::process::JobStage;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open or read the input file
    #[error("{source}")]
    UnreadableFile {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Input is a directory or holds no bytes at all
    #[error("Invalid filename (empty file or directory)")]
    EmptyOrDirectoryInput {
        /// Path to the input file
        path: PathBuf,
    },

    /// The file is not an SWF file we can recompress
    #[error(transparent)]
    Format(#[from] swf_core::Error),

    /// Failed to create or fully write the output file
    #[error("{}: {source}", path.display())]
    OutputWriteFailure {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The output suffix would make the output path equal to the input path
    #[error("Output suffix must not be empty")]
    InvalidSuffix,
}

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A failed file job together with the stage it had reached.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct JobFailure {
    /// Last stage the job completed before failing.
    pub stage: JobStage,
    /// Underlying error.
    pub source: Error,
}

/// A structured CLI error that preserves the underlying failure.
///
/// Adds the program name and input file so the failure can be reported as a
/// single stderr line.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output.
    pub program: String,
    /// Input file path.
    pub file: String,
    /// Underlying job failure.
    pub source: JobFailure,
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.program, self.file, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
