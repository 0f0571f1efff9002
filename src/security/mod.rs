//! Security subsystem.
//!
//! Holds the secret wrapper used for header values. Redaction beyond
//! `Debug` output is left to the extension consuming the configuration.

pub mod secret;

pub use secret::OptionalSecret;
