//! The `otelcol.auth.headers` component.
//!
//! Converts [`HeadersArguments`] into a [`HeadersSetterConfig`]:
//! - one `HeaderConfig` per header, same order
//! - `value` is unwrapped; the secret marking is not carried over
//! - `from_context` is copied as-is
//! - the result is stamped with [`EXTENSION_ID`]

use crate::auth::AuthArguments;
use crate::config::schema::{Header, HeadersArguments};
use crate::extension::{ComponentId, HeaderConfig, HeadersSetterConfig, EXTENSION_ID};
use crate::security::secret::OptionalSecret;

/// Name the component is registered under.
pub const COMPONENT_NAME: &str = "otelcol.auth.headers";

impl AuthArguments for HeadersArguments {
    type Config = HeadersSetterConfig;

    fn convert(&self) -> HeadersSetterConfig {
        HeadersSetterConfig {
            id: ComponentId::new(EXTENSION_ID),
            headers: self.headers.iter().map(convert_header).collect(),
        }
    }
}

fn convert_header(header: &Header) -> HeaderConfig {
    // Unvalidated input is passed through field by field; nothing picks a winner.
    if header.value.is_some() == header.from_context.is_some() {
        tracing::warn!(
            component = COMPONENT_NAME,
            key = %header.key,
            "Converting header without exactly one value source"
        );
    }

    HeaderConfig {
        key: header.key.clone(),
        value: header.value.clone().map(OptionalSecret::into_inner),
        from_context: header.from_context.clone(),
    }
}
