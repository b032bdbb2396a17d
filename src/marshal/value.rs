//! Value Marshaller

use super::{ErrorKind, MarshalError, ToHostValue, string_failure_kind};
use crate::diagnostics::DiagnosticSink;
use crate::host::Host;
use crate::model::ParameterValue;

impl ToHostValue for ParameterValue {
    fn to_host_value<H: Host>(
        &self,
        host: &H,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<H::Object, MarshalError> {
        match self {
            ParameterValue::String(text) => host.string(text).map_err(|e| {
                MarshalError::diagnose(
                    sink,
                    string_failure_kind(&e),
                    format!(
                        "Unable to convert the string parameter value to a host string: {} ({})",
                        text, e
                    ),
                )
            }),
            ParameterValue::None => Ok(host.none()),
            ParameterValue::Float(value) => host.float(*value).map_err(|e| {
                MarshalError::diagnose(
                    sink,
                    ErrorKind::CompositionFailure,
                    format!(
                        "Unable to convert the float parameter value to a host scalar: {} ({})",
                        value, e
                    ),
                )
            }),
            ParameterValue::UnsignedInteger(value) => host.unsigned(*value).map_err(|e| {
                MarshalError::diagnose(
                    sink,
                    ErrorKind::CompositionFailure,
                    format!(
                        "Unable to convert the unsigned parameter value to a host scalar: {} ({})",
                        value, e
                    ),
                )
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingSink;
    use crate::host::{Heap, JsonHost};
    use serde_json::{Value, json};

    #[test]
    fn test_json_variants() {
        let host = JsonHost::new();
        let mut sink = RecordingSink::new();

        let cases = [
            (ParameterValue::from("PLA"), json!("PLA")),
            (ParameterValue::None, Value::Null),
            (ParameterValue::Float(-2.5), json!(-2.5)),
            (ParameterValue::UnsignedInteger(255), json!(255)),
        ];
        for (value, expected) in cases {
            assert_eq!(value.to_host_value(&host, &mut sink).unwrap(), expected);
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn test_non_finite_float_is_a_composition_failure() {
        let host = JsonHost::new();
        let mut sink = RecordingSink::new();

        let err = ParameterValue::Float(f64::NAN)
            .to_host_value(&host, &mut sink)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::CompositionFailure);
        assert_eq!(sink.len(), 1);
        assert!(sink.messages[0].contains("NaN"));
    }

    #[test]
    fn test_unencodable_string_is_an_encoding_failure() {
        let heap = Heap::new();
        let mut sink = RecordingSink::new();

        let err = ParameterValue::from("bad\0text")
            .to_host_value(&heap, &mut sink)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::EncodingFailure);
        assert_eq!(sink.len(), 1);
        assert!(sink.messages[0].contains("bad\0text"));
        assert_eq!(heap.live_objects(), 0);
    }

    #[test]
    fn test_none_never_allocates() {
        let heap = Heap::new();
        heap.fail_allocation_after(0);
        let mut sink = RecordingSink::new();

        let object = ParameterValue::None.to_host_value(&heap, &mut sink).unwrap();
        assert!(object.is_none());
        assert!(sink.is_empty());
    }
}
