//! Diagnostic logging setup
//!
//! Diagnostics are written to stdout alongside the report, like the rest of
//! the tool's output. `RUST_LOG` takes precedence over the CLI verbosity.

use tracing_subscriber::EnvFilter;

/// Log level derived from CLI flags
pub fn default_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global tracing subscriber
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("spmup={}", default_level(verbose, quiet))));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .try_init();
}
