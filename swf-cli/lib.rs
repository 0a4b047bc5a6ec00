//! Shared functionality for the `swf-zopfli` command-line tool.
//!
//! This crate connects the in-memory transform from `swf-core` to the
//! filesystem: it loads input files, derives output paths, writes outputs
//! atomically and drives a batch of files with per-file failure isolation.

pub mod config;
pub mod error;
pub mod io;
pub mod operations;
pub mod process;

pub use config::{CliConfig, DEFAULT_SUFFIX};
pub use error::{Error, InvocationError, JobFailure, Result};
pub use io::{load_input, output_path_for, write_output, InputFile};
pub use operations::{emit_summary, ratio, recompress_swf, removed_percent};
pub use process::{process_file, process_file_with, run_cli, BatchReport, JobReport, JobStage};
