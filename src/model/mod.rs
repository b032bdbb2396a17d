//! Command Model
//!
//! Strongly-typed representation of a tokenized G-code command.
//! Pure data - no host or marshalling concerns.

pub mod command;
pub mod value;

pub use command::{ParsedCommand, ParsedParameter};
pub use value::{ParameterValue, ValueKind};
