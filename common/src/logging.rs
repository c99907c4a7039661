//! Process-wide `tracing` subscriber bootstrap shared by every binary.

/// Initializes the process-wide `tracing` subscriber.
///
/// Mirrors the reference server's startup sequence: an `EnvFilter` read from
/// `RUST_LOG`, falling back to a sensible default, feeding an `fmt` layer.
pub fn init_tracing(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
