use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for the application
///
/// Diagnostics go to stderr so stdout stays reserved for the run report.
/// `RUST_LOG` overrides `level` when set.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Ignore the error from a second init (tests driving `run` more than once).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
