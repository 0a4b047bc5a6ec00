//! # swf-core
//!
//! Header codec and recompression pipeline for Macromedia Flash (SWF) files.
//!
//! The crate accepts uncompressed (`FWS`) and zlib-compressed (`CWS`) files,
//! extracts the raw body, recompresses it through a [`Recompressor`] and
//! reassembles a `CWS` file whose header matches the source byte for byte
//! apart from the signature. Everything operates on in-memory byte slices.

pub mod assemble;
pub mod error;
pub mod extract;
pub mod header;
pub mod pipeline;
pub mod recompress;

pub use assemble::assemble;
pub use error::{Error, Result};
pub use extract::{extract_body, inflate_bounded};
pub use header::{BodyEncoding, SwfHeader, HEADER_SIZE, MIN_VERSION};
pub use pipeline::{transcode, transcode_with, Stage, TranscodeSummary, Transcoded};
pub use recompress::{Effort, RecompressOptions, Recompressor, ZopfliRecompressor};
