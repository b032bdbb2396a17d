//! Host Runtimes
//!
//! A host is the dynamically-typed environment on the far side of the
//! boundary. Host objects are owned values: dropping one releases the
//! reference it holds, so an early return releases every intermediate.

pub mod heap;
pub mod json;
#[cfg(feature = "python")]
pub mod python;

pub use heap::{Heap, HeapRef, HeapStats};
pub use json::JsonHost;
#[cfg(feature = "python")]
pub use python::PythonHost;

/// Failures a host can report while building objects
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("text cannot be represented by the host: {0}")]
    Encoding(String),

    #[error("host allocation failed")]
    Allocation,

    #[error("value out of host range: {0}")]
    OutOfRange(String),

    #[error("object is not a mapping")]
    NotAMapping,

    #[error("host runtime error: {0}")]
    Runtime(String),
}

/// Object factory of a dynamically-typed host runtime
pub trait Host {
    /// An owned reference to a host object
    type Object;

    fn string(&self, text: &str) -> Result<Self::Object, HostError>;

    /// The host's canonical "no value" singleton
    fn none(&self) -> Self::Object;

    fn float(&self, value: f64) -> Result<Self::Object, HostError>;

    fn unsigned(&self, value: u64) -> Result<Self::Object, HostError>;

    /// Create an empty name-keyed mapping
    fn mapping(&self) -> Result<Self::Object, HostError>;

    /// Insert `value` under `key`, replacing any previous entry.
    ///
    /// The value is consumed either way; on failure the host releases it.
    fn insert(
        &self,
        mapping: &mut Self::Object,
        key: &str,
        value: Self::Object,
    ) -> Result<(), HostError>;

    /// Pack three objects into a tuple that takes ownership of them
    fn triple(
        &self,
        first: Self::Object,
        second: Self::Object,
        third: Self::Object,
    ) -> Result<Self::Object, HostError>;
}
