//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader / watcher / conversion
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (stderr)
//! ```

pub mod logging;

pub use logging::init_logging;
