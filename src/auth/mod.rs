//! Authentication components.
//!
//! An auth component owns a block of arguments and knows how to turn it
//! into the configuration of the extension that does the actual work at
//! request time. The component framework calls into [`AuthArguments`]
//! after the arguments have been decoded and validated.

pub mod headers;

use std::collections::BTreeMap;

use crate::extension::ComponentId;

pub use headers::COMPONENT_NAME;

/// Telemetry signal an exporter handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataType {
    Traces,
    Metrics,
    Logs,
}

/// Arguments of an auth component.
pub trait AuthArguments {
    /// Extension configuration produced by [`convert`](Self::convert).
    type Config;

    /// Build the extension configuration equivalent to these arguments.
    ///
    /// Arguments must already be validated.
    fn convert(&self) -> Self::Config;

    /// Other extensions the converted configuration depends on.
    fn extensions(&self) -> Vec<ComponentId> {
        Vec::new()
    }

    /// Exporters the converted configuration depends on, by signal.
    fn exporters(&self) -> BTreeMap<DataType, Vec<ComponentId>> {
        BTreeMap::new()
    }
}
