//! Command line argument parsing for the swf-zopfli utility

use std::ffi::OsString;

use clap::Parser;

use swf_cli::{CliConfig, DEFAULT_SUFFIX};
use swf_core::Effort;

/// SWF recompression utility
///
/// Recompresses the body of uncompressed (FWS) or zlib-compressed (CWS) Flash
/// files with zopfli. Input files must declare SWF version 6 or greater.
#[derive(Parser, Debug)]
#[command(
    name = "swf-zopfli",
    version = "0.1.1",
    about = "Recompress SWF files with zopfli",
    long_about = "swf-zopfli rewrites each FILE as a zlib-compressed SWF with a smaller \
                 body and saves it next to the input with the .zopfli suffix. The input \
                 file is never modified."
)]
#[allow(clippy::struct_excessive_bools)]
pub struct SwfZopfliOpts {
    /// Files to process
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Verbose mode
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Less compression, but faster (5 iterations)
    #[arg(long = "i5", group = "effort")]
    pub i5: bool,

    /// Less compression, but faster (10 iterations)
    #[arg(long = "i10", group = "effort")]
    pub i10: bool,

    /// Default compression (15 iterations)
    #[arg(long = "i15", group = "effort")]
    pub i15: bool,

    /// More compression, but slower (25 iterations)
    #[arg(long = "i25", group = "effort")]
    pub i25: bool,

    /// More compression, but slower (50 iterations)
    #[arg(long = "i50", group = "effort")]
    pub i50: bool,

    /// More compression, but slower (100 iterations)
    #[arg(long = "i100", group = "effort")]
    pub i100: bool,

    /// More compression, but slower (250 iterations)
    #[arg(long = "i250", group = "effort")]
    pub i250: bool,

    /// More compression, but slower (500 iterations)
    #[arg(long = "i500", group = "effort")]
    pub i500: bool,

    /// More compression, but slower (1000 iterations)
    #[arg(long = "i1000", group = "effort")]
    pub i1000: bool,

    /// Use custom suffix on output files
    #[arg(short = 'S', long = "suffix", value_name = "SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,
}

/// Long options understood by [`SwfZopfliOpts`].
const LONG_FLAGS: &[&str] = &[
    "--verbose",
    "--help",
    "--version",
    "--suffix",
    "--i5",
    "--i10",
    "--i15",
    "--i25",
    "--i50",
    "--i100",
    "--i250",
    "--i500",
    "--i1000",
];

/// Short options that take no value.
const SHORT_FLAGS: &[char] = &['v', 'h', 'V'];

/// Short option that takes the output suffix.
const SHORT_SUFFIX: char = 'S';

/// Splits `args` into the arguments clap should see and unrecognized options.
///
/// Unknown options are dropped so the remaining files are still processed.
/// Everything after `--` and the value of `-S`/`--suffix` is kept verbatim.
pub fn split_unknown_flags<I>(args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut known = Vec::new();
    let mut ignored = Vec::new();
    let mut args = args.into_iter();

    // Program name
    known.extend(args.next());

    let mut expect_value = false;
    let mut positional_only = false;
    for arg in args {
        if expect_value || positional_only {
            expect_value = false;
            known.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            known.push(arg);
            continue;
        };

        if text == "--" {
            positional_only = true;
            known.push(arg);
        } else if let Some(long) = text.strip_prefix("--") {
            let name = long.split('=').next().unwrap_or(long);
            if LONG_FLAGS.contains(&format!("--{name}").as_str()) {
                expect_value = name == "suffix" && !long.contains('=');
                known.push(arg);
            } else {
                ignored.push(arg);
            }
        } else if let Some(cluster) = text.strip_prefix('-').filter(|c| !c.is_empty()) {
            match short_cluster_takes_value(cluster) {
                Some(takes_value) => {
                    expect_value = takes_value;
                    known.push(arg);
                }
                None => ignored.push(arg),
            }
        } else {
            known.push(arg);
        }
    }

    (known, ignored)
}

/// Checks a cluster of short options such as `vS.min`.
///
/// Returns `None` if it holds an unknown option, otherwise whether the next
/// argument is the value of a trailing `-S`.
fn short_cluster_takes_value(cluster: &str) -> Option<bool> {
    for (idx, c) in cluster.char_indices() {
        if c == SHORT_SUFFIX {
            return Some(idx + c.len_utf8() == cluster.len());
        }
        if !SHORT_FLAGS.contains(&c) {
            return None;
        }
    }
    Some(false)
}

impl SwfZopfliOpts {
    /// Parse command line arguments without exiting on failure
    ///
    /// Unrecognized options are skipped and returned alongside the parsed
    /// options.
    pub fn try_parse() -> Result<(Self, Vec<OsString>), clap::Error> {
        let (args, ignored) = split_unknown_flags(std::env::args_os());
        Ok((Self::try_parse_from(args)?, ignored))
    }

    /// Get the effort preset from the iteration flags
    pub fn effort(&self) -> Effort {
        [
            (self.i5, Effort::I5),
            (self.i10, Effort::I10),
            (self.i15, Effort::I15),
            (self.i25, Effort::I25),
            (self.i50, Effort::I50),
            (self.i100, Effort::I100),
            (self.i250, Effort::I250),
            (self.i500, Effort::I500),
            (self.i1000, Effort::I1000),
        ]
        .iter()
        .find_map(|&(flag, effort)| flag.then_some(effort))
        .unwrap_or_default()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            verbose: self.verbose,
            effort: self.effort(),
            suffix: self.suffix.clone(),
        }
    }
}
