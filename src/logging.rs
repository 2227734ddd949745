use aulog_diag::Severity;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber that backs the system log sink.
///
/// `RUST_LOG` wins over the configured level when set.
pub fn init(level: Severity) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
