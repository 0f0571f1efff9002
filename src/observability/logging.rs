//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Take the log level from `RUST_LOG`, falling back to a default filter
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Secret header values are never passed as log fields

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "otelcol_auth_headers=info";

/// Build the filter for `level`, or `RUST_LOG` when set.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => format!("otelcol_auth_headers={level}").into(),
        None => DEFAULT_FILTER.into(),
    })
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init_logging(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
