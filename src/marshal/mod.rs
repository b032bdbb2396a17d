//! Boundary Marshalling
//!
//! Converts the native command model into host objects. A conversion
//! either hands back a fully owned host value or fails after emitting
//! exactly one diagnostic, with every host object it created released.

mod command;
mod error;
mod value;

pub use error::{ErrorKind, MarshalError};

use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::host::{Host, HostError};

/// Conversion of a native value into an owned host object
pub trait ToHostValue {
    fn to_host_value<H: Host>(
        &self,
        host: &H,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<H::Object, MarshalError>;

    /// Convert, reporting diagnostics through the `log` facade
    fn to_host<H: Host>(&self, host: &H) -> Result<H::Object, MarshalError> {
        self.to_host_value(host, &mut LogSink)
    }
}

/// Text conversions fail with an encoding error unless the host ran out of room
fn string_failure_kind(error: &HostError) -> ErrorKind {
    match error {
        HostError::Encoding(_) => ErrorKind::EncodingFailure,
        _ => ErrorKind::CompositionFailure,
    }
}
