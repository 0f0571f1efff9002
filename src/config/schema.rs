//! Configuration schema definitions.
//!
//! Plain data decoded from the component's TOML block. Semantic checks
//! live in [`crate::config::validation`]; nothing here enforces them.
//!
//! ```toml
//! [[header]]
//! key = "Authorization"
//! value = { secret = "Bearer xyz" }
//!
//! [[header]]
//! key = "X-Tenant"
//! from_context = "tenant_id"
//! ```

use serde::Deserialize;

use crate::security::secret::OptionalSecret;

/// Arguments of the `otelcol.auth.headers` component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadersArguments {
    /// Headers to attach, in the order they are applied.
    #[serde(rename = "header", default)]
    pub headers: Vec<Header>,
}

impl HeadersArguments {
    pub fn new(headers: Vec<Header>) -> Self {
        Self { headers }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

/// A single header to send along with requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Header {
    /// Header name.
    pub key: String,

    /// Literal value, possibly secret.
    #[serde(default)]
    pub value: Option<OptionalSecret>,

    /// Name of the context attribute that supplies the value at request time.
    #[serde(default)]
    pub from_context: Option<String>,
}

impl Header {
    /// Header with a plain literal value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(OptionalSecret::plain(value)),
            from_context: None,
        }
    }

    /// Header with a secret literal value.
    pub fn with_secret(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(OptionalSecret::secret(value)),
            from_context: None,
        }
    }

    /// Header whose value comes from a context attribute.
    pub fn from_context(key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            from_context: Some(attribute.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_blocks_in_order() {
        let args: HeadersArguments = toml::from_str(
            r#"
            [[header]]
            key = "Authorization"
            value = "Bearer xyz"

            [[header]]
            key = "X-Tenant"
            from_context = "tenant_id"

            [[header]]
            key = "X-Api-Key"
            value = { secret = "k" }
            "#,
        )
        .unwrap();

        assert_eq!(args.len(), 3);
        assert_eq!(args.headers[0], Header::with_value("Authorization", "Bearer xyz"));
        assert_eq!(args.headers[1], Header::from_context("X-Tenant", "tenant_id"));
        assert_eq!(args.headers[2], Header::with_secret("X-Api-Key", "k"));
    }

    #[test]
    fn test_decode_empty() {
        let args: HeadersArguments = toml::from_str("").unwrap();
        assert!(args.is_empty());
    }

    #[test]
    fn test_decode_keeps_both_sources() {
        // Decoding does not enforce the single-source rule.
        let args: HeadersArguments = toml::from_str(
            r#"
            [[header]]
            key = "X"
            value = "x"
            from_context = "y"
            "#,
        )
        .unwrap();
        assert!(args.headers[0].value.is_some());
        assert!(args.headers[0].from_context.is_some());
    }

    #[test]
    fn test_decode_rejects_missing_key() {
        let res: Result<HeadersArguments, _> = toml::from_str(
            r#"
            [[header]]
            value = "x"
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_decode_rejects_unknown_field() {
        let res: Result<HeadersArguments, _> = toml::from_str(
            r#"
            [[header]]
            key = "X"
            value = "x"
            fromContext = "y"
            "#,
        );
        assert!(res.is_err());
    }
}
