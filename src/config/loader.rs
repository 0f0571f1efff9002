//! Configuration loading from disk.
//!
//! Decoding and validation are two explicit steps: serde builds the plain
//! [`HeadersArguments`], then [`validate_config`] checks it.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HeadersArguments;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode and validate configuration text.
pub fn parse_config(content: &str) -> Result<HeadersArguments, ConfigError> {
    let args: HeadersArguments = toml::from_str(content)?;

    validate_config(&args).map_err(ConfigError::Validation)?;

    tracing::debug!(headers = args.len(), "Configuration validated");
    Ok(args)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HeadersArguments, ConfigError> {
    let content = fs::read_to_string(path)?;
    let args = parse_config(&content)?;

    tracing::info!(path = %path.display(), headers = args.len(), "Configuration loaded");
    Ok(args)
}
