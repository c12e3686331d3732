//! Structured logging setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for applications embedding the
/// crate. Honors `RUST_LOG`; defaults to info-level events from this
/// crate. Does nothing if a subscriber is already installed.
pub fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subdomain_rewriter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
