//! Configuration core of the `otelcol.auth.headers` component.
//!
//! Decodes `[[header]]` blocks, validates them, and converts them into the
//! configuration of the `headers_setter` extension.

pub mod auth;
pub mod config;
pub mod extension;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use auth::AuthArguments;
pub use config::schema::{Header, HeadersArguments};
pub use extension::HeadersSetterConfig;
