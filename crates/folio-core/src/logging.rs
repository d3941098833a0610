//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: 0 warn, 1 info, 2 debug, 3+ trace
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this twice keeps the
/// first subscriber.
pub fn setup_logging(verbosity: u8) {
    let filter = verbosity_filter(verbosity);

    let result = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
