use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to stdout.
///
/// The level comes from `RUST_LOG` and defaults to `info`, so the per-request and
/// per-poll lines are visible without any configuration.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
