//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, [[header]] blocks)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (per-header structural checks)
//!     → HeadersArguments (validated, immutable)
//!     → auth::AuthArguments::convert
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads and validates
//!     → converted config sent to the receiver
//!     → invalid files are logged and skipped
//! ```
//!
//! # Design Decisions
//! - Arguments are immutable once loaded; changes require full reload
//! - Decoding never enforces invariants; validation is a separate step

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{Header, HeadersArguments};
pub use validation::{validate_config, validate_header, InvalidConfiguration, ValidationError};
