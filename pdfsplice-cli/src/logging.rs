//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence. Otherwise library debug events are shown
/// with `--verbose` and only warnings without it.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "pdfsplice=debug,pdfsplice_cli=debug,warn"
        } else {
            "warn"
        })
    });

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    if let Err(err) = result {
        eprintln!("Warning: failed to initialize logging: {err}");
    }
}
