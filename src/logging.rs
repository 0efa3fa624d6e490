use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; stdout is reserved for
/// the JSON result line. `RUST_LOG` overrides the default `warn` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
