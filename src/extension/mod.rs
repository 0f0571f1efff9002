//! Downstream extension configuration.
//!
//! # Data Flow
//! ```text
//! HeadersArguments (validated)
//!     → auth::AuthArguments::convert
//!     → HeadersSetterConfig
//!     → extension factory (external)
//! ```

pub mod headers_setter;

pub use headers_setter::{ComponentId, HeaderConfig, HeadersSetterConfig, EXTENSION_ID};
