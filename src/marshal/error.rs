//! Marshalling errors

use std::fmt;

use crate::diagnostics::DiagnosticSink;

/// Why a conversion was abandoned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Text that the host cannot represent
    EncodingFailure,
    /// The host could not allocate or assemble a container or scalar
    CompositionFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EncodingFailure => f.write_str("encoding failure"),
            ErrorKind::CompositionFailure => f.write_str("composition failure"),
        }
    }
}

/// A failed conversion; its message has already been sent to a sink
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct MarshalError {
    pub kind: ErrorKind,
    pub message: String,
}

impl MarshalError {
    /// Emit `message` to the sink and build the matching error
    pub(crate) fn diagnose(
        sink: &mut dyn DiagnosticSink,
        kind: ErrorKind,
        message: String,
    ) -> Self {
        sink.emit(&message);
        Self { kind, message }
    }
}
