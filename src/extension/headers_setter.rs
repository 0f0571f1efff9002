//! Configuration consumed by the `headers_setter` extension.
//!
//! This is the target shape of [`crate::auth::AuthArguments::convert`]. The
//! extension itself (which injects the headers into outgoing requests) is
//! not part of this crate.

use std::fmt;

use serde::Serialize;

/// Identity the extension framework uses to address the converted
/// configuration.
pub const EXTENSION_ID: &str = "headers";

/// Identifies the component a configuration is addressed to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId {
    kind: String,
}

impl ComponentId {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    /// The fixed identity of the headers extension.
    pub fn headers() -> Self {
        Self::new(EXTENSION_ID)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind)
    }
}

impl Serialize for ComponentId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One header the extension will set.
///
/// Exactly one of `value` and `from_context` is expected to be populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderConfig {
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_context: Option<String>,
}

/// Root configuration of the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadersSetterConfig {
    pub id: ComponentId,

    pub headers: Vec<HeaderConfig>,
}
