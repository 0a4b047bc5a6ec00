//! SWF recompression utility
//!
//! Rewrites Flash SWF files with their body recompressed by zopfli. Every
//! `FILE` is written to `FILE.zopfli` next to the original.

mod opts;

use opts::SwfZopfliOpts;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use swf_cli::run_cli;

const PROGRAM_NAME: &str = "swf-zopfli";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    // Failures are reported on stderr only; the exit status is always success.
    let (opts, ignored) = match SwfZopfliOpts::try_parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            // Covers `-h` and `-V` as well as invalid arguments.
            let _ = err.print();
            return;
        }
    };

    init_tracing(opts.verbose);
    for arg in &ignored {
        debug!(arg = %arg.to_string_lossy(), "ignoring unknown option");
    }

    let config = opts.config();
    let report = run_cli(&opts.files, &config, PROGRAM_NAME);
    debug!(
        succeeded = report.succeeded.len(),
        failed = report.failed.len(),
        "batch finished"
    );
}
