//! Parameter Values
//!
//! A closed sum type over the value shapes a tokenizer can classify.
//! No coercion happens here - a value keeps the variant it was built with.

use std::fmt;

/// A typed parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// Free text, e.g. the printer model of `M862.3 PMK3S`
    String(String),
    /// The parameter is present but carries no value (e.g. the `X` in `G28 X`)
    None,
    /// A signed or fractional number
    Float(f64),
    /// A non-negative integral number
    UnsignedInteger(u64),
}

/// Discriminator of a [`ParameterValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    None,
    Float,
    UnsignedInteger,
}

impl ParameterValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ParameterValue::String(_) => ValueKind::String,
            ParameterValue::None => ValueKind::None,
            ParameterValue::Float(_) => ValueKind::Float,
            ParameterValue::UnsignedInteger(_) => ValueKind::UnsignedInteger,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ParameterValue::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::String(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_unsigned(&self) -> Option<u64> {
        match self {
            ParameterValue::UnsignedInteger(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::None => "none",
            ValueKind::Float => "float",
            ValueKind::UnsignedInteger => "unsigned",
        };
        f.write_str(name)
    }
}

/// Textual rendering used in diagnostics: strings verbatim, `None` literally
impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::String(text) => f.write_str(text),
            ParameterValue::None => f.write_str("None"),
            ParameterValue::Float(value) => write!(f, "{}", value),
            ParameterValue::UnsignedInteger(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(from: f64) -> Self {
        Self::Float(from)
    }
}

impl From<u64> for ParameterValue {
    fn from(from: u64) -> Self {
        Self::UnsignedInteger(from)
    }
}

impl From<u32> for ParameterValue {
    fn from(from: u32) -> Self {
        Self::UnsignedInteger(from as u64)
    }
}

impl From<String> for ParameterValue {
    fn from(from: String) -> Self {
        Self::String(from)
    }
}

impl From<&str> for ParameterValue {
    fn from(from: &str) -> Self {
        Self::String(from.to_string())
    }
}
