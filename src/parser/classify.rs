//! Value classification
//!
//! Decides which [`ParameterValue`] variant a parameter's text becomes.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ParameterValue;

static UNSIGNED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());
static FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)$").unwrap());

/// Classify the text following a parameter letter
///
/// - empty → `None`
/// - plain digits → `UnsignedInteger` (or `Float` past `u64::MAX`)
/// - signed or decimal number → `Float`
/// - anything else → `String`
pub fn classify_value(text: &str) -> ParameterValue {
    if text.is_empty() {
        return ParameterValue::None;
    }

    if UNSIGNED.is_match(text) {
        if let Ok(value) = text.parse::<u64>() {
            return ParameterValue::UnsignedInteger(value);
        }
    }

    if FLOAT.is_match(text) {
        if let Ok(value) = text.parse::<f64>() {
            return ParameterValue::Float(value);
        }
    }

    ParameterValue::String(text.to_string())
}
