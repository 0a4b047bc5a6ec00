//! Configuration types and constants for the SWF recompressor CLI.

use swf_core::{Effort, RecompressOptions};

/// Suffix appended to the input path to form the output path.
pub const DEFAULT_SUFFIX: &str = ".zopfli";

/// Configuration for CLI operations
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Verbose output
    pub verbose: bool,
    /// Recompression effort preset
    pub effort: Effort,
    /// Suffix for output files
    pub suffix: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            effort: Effort::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl CliConfig {
    /// Recompressor settings derived from this configuration.
    pub fn recompress_options(&self) -> RecompressOptions {
        RecompressOptions::default()
            .with_effort(self.effort)
            .with_verbose(self.verbose)
    }
}
