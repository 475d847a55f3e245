use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`), so
/// they never mix with the tool's own stdout output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(layer).with(filter).try_init();
}
