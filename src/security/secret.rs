//! Optional secret values.
//!
//! A header value is either plain text or a secret. Secrets are held in a
//! [`SecretString`] so that `Debug` output (and therefore any `tracing`
//! field formatted with `?`) never shows them.
//!
//! In TOML a bare string is a plain value and an inline table marks it
//! secret:
//!
//! ```toml
//! value = "Bearer abc"            # plain
//! value = { secret = "s3cr3t" }   # secret
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

/// A header value which may be marked secret.
#[derive(Debug, Clone)]
pub enum OptionalSecret {
    /// Value that may be shown in diagnostics.
    Plain(String),
    /// Value whose contents must not be shown in diagnostics.
    Secret(SecretString),
}

impl OptionalSecret {
    /// Create a plain value.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    /// Create a secret value.
    pub fn secret(value: impl Into<String>) -> Self {
        Self::Secret(SecretString::from(value.into()))
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret(_))
    }

    /// Borrow the underlying string regardless of secrecy.
    pub fn expose(&self) -> &str {
        match self {
            Self::Plain(v) => v,
            Self::Secret(s) => s.expose_secret(),
        }
    }

    /// Strip the wrapper, dropping the secrecy marking.
    pub fn into_inner(self) -> String {
        match self {
            Self::Plain(v) => v,
            Self::Secret(s) => s.expose_secret().to_string(),
        }
    }
}

impl PartialEq for OptionalSecret {
    fn eq(&self, other: &Self) -> bool {
        self.is_secret() == other.is_secret() && self.expose() == other.expose()
    }
}

impl Eq for OptionalSecret {}

impl From<&str> for OptionalSecret {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for OptionalSecret {
    fn from(value: String) -> Self {
        Self::Plain(value)
    }
}

/// Wire forms accepted for a value.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Plain(String),
    Secret(RawSecret),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSecret {
    secret: String,
}

impl<'de> Deserialize<'de> for OptionalSecret {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Plain(v) => Self::Plain(v),
            RawValue::Secret(RawSecret { secret }) => Self::secret(secret),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        value: OptionalSecret,
    }

    #[test]
    fn test_plain_from_string() {
        let h: Holder = toml::from_str(r#"value = "abc""#).unwrap();
        assert!(!h.value.is_secret());
        assert_eq!(h.value.expose(), "abc");
    }

    #[test]
    fn test_secret_from_table() {
        let h: Holder = toml::from_str(r#"value = { secret = "hunter2" }"#).unwrap();
        assert!(h.value.is_secret());
        assert_eq!(h.value.expose(), "hunter2");
    }

    #[test]
    fn test_secret_not_in_debug() {
        let s = OptionalSecret::secret("hunter2");
        assert!(!format!("{:?}", s).contains("hunter2"));

        let p = OptionalSecret::plain("visible");
        assert!(format!("{:?}", p).contains("visible"));
    }

    #[test]
    fn test_into_inner_drops_marking() {
        assert_eq!(OptionalSecret::secret("x").into_inner(), "x");
        assert_eq!(OptionalSecret::plain("y").into_inner(), "y");
    }

    #[test]
    fn test_equality_considers_kind() {
        assert_eq!(OptionalSecret::plain("a"), OptionalSecret::from("a"));
        assert_ne!(OptionalSecret::plain("a"), OptionalSecret::secret("a"));
        assert_eq!(OptionalSecret::secret("a"), OptionalSecret::secret("a"));
    }

    #[test]
    fn test_unknown_table_field_rejected() {
        let res: Result<Holder, _> = toml::from_str(r#"value = { secrett = "x" }"#);
        assert!(res.is_err());
    }
}
