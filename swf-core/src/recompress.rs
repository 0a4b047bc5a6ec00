//! High-ratio recompression of raw SWF bodies.

use std::num::NonZeroU64;

use tracing::{debug, info};
use zopfli::{Format, Options};

use crate::error::{Error, Result};

/// Turns a raw body into a zlib stream that any inflater can decode.
///
/// Implementations must be deterministic for a given input and
/// configuration; effort settings may change the size of the output but
/// never its decoded content.
pub trait Recompressor {
    /// Compresses `raw` into a complete zlib (RFC 1950) stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compression`] if the backend fails.
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>>;
}

/// Iteration counts of the [`Effort`] presets, checked at compile time.
const ITERATIONS: [NonZeroU64; 9] = [
    NonZeroU64::new(5).unwrap(),
    NonZeroU64::new(10).unwrap(),
    NonZeroU64::new(15).unwrap(),
    NonZeroU64::new(25).unwrap(),
    NonZeroU64::new(50).unwrap(),
    NonZeroU64::new(100).unwrap(),
    NonZeroU64::new(250).unwrap(),
    NonZeroU64::new(500).unwrap(),
    NonZeroU64::new(1000).unwrap(),
];

/// Preset effort tiers, expressed as zopfli iteration counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effort {
    /// 5 iterations: less compression, but faster
    I5,
    /// 10 iterations
    I10,
    /// 15 iterations (default)
    #[default]
    I15,
    /// 25 iterations: more compression, but slower
    I25,
    /// 50 iterations
    I50,
    /// 100 iterations
    I100,
    /// 250 iterations
    I250,
    /// 500 iterations
    I500,
    /// 1000 iterations
    I1000,
}

impl Effort {
    /// All presets from the cheapest to the most thorough.
    pub const ALL: [Effort; 9] = [
        Effort::I5,
        Effort::I10,
        Effort::I15,
        Effort::I25,
        Effort::I50,
        Effort::I100,
        Effort::I250,
        Effort::I500,
        Effort::I1000,
    ];

    /// Number of zopfli iterations for this preset.
    pub const fn iterations(self) -> NonZeroU64 {
        match self {
            Effort::I5 => ITERATIONS[0],
            Effort::I10 => ITERATIONS[1],
            Effort::I15 => ITERATIONS[2],
            Effort::I25 => ITERATIONS[3],
            Effort::I50 => ITERATIONS[4],
            Effort::I100 => ITERATIONS[5],
            Effort::I250 => ITERATIONS[6],
            Effort::I500 => ITERATIONS[7],
            Effort::I1000 => ITERATIONS[8],
        }
    }

    /// Looks up the preset with exactly `iterations` iterations.
    pub fn from_iterations(iterations: u64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|effort| effort.iterations().get() == iterations)
    }
}

/// Configuration builder for [`ZopfliRecompressor`].
#[derive(Debug, Clone)]
pub struct RecompressOptions {
    iterations: NonZeroU64,
    iterations_without_improvement: NonZeroU64,
    maximum_block_splits: u16,
    verbose: bool,
}

impl Default for RecompressOptions {
    fn default() -> Self {
        let defaults = Options::default();
        Self {
            iterations: Effort::default().iterations(),
            iterations_without_improvement: defaults.iterations_without_improvement,
            maximum_block_splits: defaults.maximum_block_splits,
            verbose: false,
        }
    }
}

impl RecompressOptions {
    /// Sets the iteration count from a preset tier.
    #[must_use]
    pub fn with_effort(mut self, effort: Effort) -> Self {
        self.iterations = effort.iterations();
        self
    }

    /// Sets an explicit iteration count.
    ///
    /// More iterations spend more CPU time searching for a smaller encoding.
    #[must_use]
    pub fn with_iterations(mut self, iterations: NonZeroU64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Stops the iterative search after this many rounds without a gain.
    #[must_use]
    pub fn with_iterations_without_improvement(mut self, limit: NonZeroU64) -> Self {
        self.iterations_without_improvement = limit;
        self
    }

    /// Caps the number of deflate blocks the input may be split into.
    ///
    /// Zero means no limit.
    #[must_use]
    pub fn with_maximum_block_splits(mut self, splits: u16) -> Self {
        self.maximum_block_splits = splits;
        self
    }

    /// Raises the per-body size event from `debug` to `info`.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Configured iteration count.
    pub fn iterations(&self) -> NonZeroU64 {
        self.iterations
    }

    /// Whether size events are logged at `info` level.
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// [`Recompressor`] backed by the zopfli deflate optimizer.
#[derive(Debug, Clone, Default)]
pub struct ZopfliRecompressor {
    options: RecompressOptions,
}

impl ZopfliRecompressor {
    /// Creates a recompressor with the given options.
    pub fn new(options: RecompressOptions) -> Self {
        Self { options }
    }

    /// Options this recompressor was built with.
    pub fn options(&self) -> &RecompressOptions {
        &self.options
    }

    fn zopfli_options(&self) -> Options {
        Options {
            iteration_count: self.options.iterations,
            iterations_without_improvement: self.options.iterations_without_improvement,
            maximum_block_splits: self.options.maximum_block_splits,
        }
    }
}

impl Recompressor for ZopfliRecompressor {
    fn compress(&self, raw: &[u8]) -> Result<Vec<u8>> {
        // Deflate rarely expands input by more than a few bytes per block.
        let mut out = Vec::with_capacity(raw.len() / 2 + 64);
        zopfli::compress(self.zopfli_options(), Format::Zlib, raw, &mut out).map_err(|err| {
            Error::Compression {
                message: err.to_string(),
            }
        })?;

        let iterations = self.options.iterations.get();
        if self.options.verbose {
            info!(raw = raw.len(), compressed = out.len(), iterations, "recompressed SWF body");
        } else {
            debug!(raw = raw.len(), compressed = out.len(), iterations, "recompressed SWF body");
        }

        Ok(out)
    }
}
