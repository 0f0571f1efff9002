//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → subscribers (watch loop) stop
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
