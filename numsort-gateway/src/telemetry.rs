//! `tracing` subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over
/// `default_filter`.
///
/// # Panics
/// Panics if a global subscriber is already installed.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(build_filter(default_filter))
        .with(fmt::layer())
        .init();
}

fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
