use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Respects `RUST_LOG` when set; otherwise logs this crate at debug and
/// everything else at info. Transport errors land here with full detail,
/// the user-facing alerts stay generic.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,secure_file_guard=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
