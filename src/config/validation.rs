//! Configuration validation.
//!
//! # Responsibilities
//! - Reject headers with an empty key
//! - Require exactly one value source per header (`value` or `from_context`)
//!
//! # Design Decisions
//! - Checks run in a fixed order: key, missing source, conflicting sources
//! - `validate_config` returns all validation errors, not just the first
//! - Validation is a pure function over already-decoded data

use thiserror::Error;

use crate::config::schema::{Header, HeadersArguments};

/// A structural rule violated by a single header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("key must be set to a non-empty string")]
    EmptyKey,

    #[error("either value or from_context must be provided")]
    MissingValueSource,

    #[error("either value or from_context must be provided, not both")]
    ConflictingValueSources,
}

/// An [`InvalidConfiguration`] located within a header set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("header[{index}] ({key:?}): {reason}")]
pub struct ValidationError {
    /// Position of the offending header block.
    pub index: usize,
    pub key: String,
    pub reason: InvalidConfiguration,
}

/// Validate one header.
pub fn validate_header(header: &Header) -> Result<(), InvalidConfiguration> {
    if header.key.is_empty() {
        return Err(InvalidConfiguration::EmptyKey);
    }

    match (&header.value, &header.from_context) {
        (None, None) => Err(InvalidConfiguration::MissingValueSource),
        (Some(_), Some(_)) => Err(InvalidConfiguration::ConflictingValueSources),
        (Some(_), None) | (None, Some(_)) => Ok(()),
    }
}

/// Validate every header of a set, collecting all failures.
pub fn validate_config(args: &HeadersArguments) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = args
        .headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            validate_header(header).err().map(|reason| ValidationError {
                index,
                key: header.key.clone(),
                reason,
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Header {
    /// See [`validate_header`].
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        validate_header(self)
    }
}

impl HeadersArguments {
    /// See [`validate_config`].
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        validate_config(self)
    }
}
