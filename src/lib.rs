//! GCode Marshal
//!
//! Typed G-code commands and their export to dynamically-typed hosts.
//!
//! This library provides:
//! - A command model with a tagged-union parameter value
//! - A line tokenizer producing that model
//! - Boundary marshalling into host tuples/mappings with leak-free failure
//! - Hosts: JSON, a counted object heap, and CPython (feature `python`)

pub mod config;
pub mod diagnostics;
pub mod export;
pub mod host;
pub mod marshal;
pub mod model;
pub mod parser;

// Re-exports for clean public API
pub use config::Config;
pub use diagnostics::{DiagnosticSink, LogSink, RecordingSink};
pub use host::{Heap, Host, HostError, JsonHost};
pub use marshal::{ErrorKind, MarshalError, ToHostValue};
pub use model::{ParameterValue, ParsedCommand, ParsedParameter, ValueKind};
pub use parser::parse_line;
