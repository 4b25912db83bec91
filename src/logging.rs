//! Logging init: diagnostics go to stderr so stdout carries only progress lines.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info,sound_fetcher=debug")
    } else {
        EnvFilter::new("warn,sound_fetcher=info")
    }
}

/// Initialize structured logging to stderr.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
