//! JSON Host
//!
//! Exports commands as `serde_json::Value`: the absent value is `null`,
//! mappings are objects and tuples are arrays.

use serde_json::{Map, Number, Value};

use super::{Host, HostError};

/// Host that builds `serde_json` values
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonHost;

impl JsonHost {
    pub fn new() -> Self {
        Self
    }
}

impl Host for JsonHost {
    type Object = Value;

    fn string(&self, text: &str) -> Result<Value, HostError> {
        Ok(Value::String(text.to_string()))
    }

    fn none(&self) -> Value {
        Value::Null
    }

    fn float(&self, value: f64) -> Result<Value, HostError> {
        Number::from_f64(value)
            .map(Value::Number)
            .ok_or_else(|| HostError::OutOfRange(format!("JSON has no encoding for {}", value)))
    }

    fn unsigned(&self, value: u64) -> Result<Value, HostError> {
        Ok(Value::from(value))
    }

    fn mapping(&self) -> Result<Value, HostError> {
        Ok(Value::Object(Map::new()))
    }

    fn insert(&self, mapping: &mut Value, key: &str, value: Value) -> Result<(), HostError> {
        match mapping {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
                Ok(())
            }
            _ => Err(HostError::NotAMapping),
        }
    }

    fn triple(&self, first: Value, second: Value, third: Value) -> Result<Value, HostError> {
        Ok(Value::Array(vec![first, second, third]))
    }
}
