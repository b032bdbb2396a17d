//! End-to-end tests: raw G-code through the tokenizer into JSON tuples
use gcode_marshal::{
    ErrorKind, JsonHost, ParameterValue, ParsedCommand, RecordingSink, ToHostValue, parse_line,
};
use serde_json::{Value, json};

fn export(line: &str) -> Value {
    let cmd = parse_line(line).expect("command");
    let mut sink = RecordingSink::new();
    let value = cmd
        .to_host_value(&JsonHost::new(), &mut sink)
        .expect("export");
    assert!(sink.is_empty());
    value
}

#[test]
fn test_parameter_free_command_exports_absent() {
    let cmd = ParsedCommand::new("G1", "G1 X10 Y20");
    let mut sink = RecordingSink::new();

    let value = cmd.to_host_value(&JsonHost::new(), &mut sink).unwrap();
    assert_eq!(value, json!(["G1", null, "G1 X10 Y20"]));
}

#[test]
fn test_float_parameters_export_as_mapping() {
    let cmd = ParsedCommand::new("G1", "G1 X10 Y20")
        .with_parameter("X", 10.0)
        .with_parameter("Y", 20.0);
    let mut sink = RecordingSink::new();

    let value = cmd.to_host_value(&JsonHost::new(), &mut sink).unwrap();
    let mapping = value[1].as_object().expect("mapping");
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping["X"].as_f64(), Some(10.0));
    assert_eq!(mapping["Y"].as_f64(), Some(20.0));
}

#[test]
fn test_none_parameter_is_null_not_string() {
    let value = export("G28 F");
    assert_eq!(value[1], json!({"F": null}));
    assert!(value[1].as_object().unwrap().contains_key("F"));
}

#[test]
fn test_tokenized_types_survive_export() {
    let value = export("M104 S210 T1 ; heat");
    assert_eq!(value, json!(["M104", {"S": 210, "T": 1}, "M104 S210 T1 ; heat"]));
    assert!(value[1]["S"].is_u64());

    let value = export("G1 X-1.25 Y.5 Z3.");
    assert!(value[1]["X"].is_f64());
    assert_eq!(value[1]["X"].as_f64(), Some(-1.25));
    assert_eq!(value[1]["Y"].as_f64(), Some(0.5));
    assert_eq!(value[1]["Z"].as_f64(), Some(3.0));

    let value = export("M862.3 PMK3S");
    assert_eq!(value[1], json!({"P": "MK3S"}));
}

#[test]
fn test_copy_exports_independently() {
    let source = parse_line("G1 X10 Y20").expect("command");
    let mut copy = source.clone();
    *copy.parameter_mut("X").unwrap() = ParameterValue::from("moved");
    copy.set_keyword("G0");

    let mut sink = RecordingSink::new();
    let host = JsonHost::new();
    assert_eq!(
        source.to_host_value(&host, &mut sink).unwrap(),
        json!(["G1", {"X": 10, "Y": 20}, "G1 X10 Y20"])
    );
    assert_eq!(
        copy.to_host_value(&host, &mut sink).unwrap(),
        json!(["G0", {"X": "moved", "Y": 20}, "G1 X10 Y20"])
    );
}

#[test]
fn test_cleared_command_exports_empty_tuple() {
    let mut cmd = parse_line("G1 X10 Y20").expect("command");
    cmd.clear();
    cmd.clear();

    let mut sink = RecordingSink::new();
    let value = cmd.to_host_value(&JsonHost::new(), &mut sink).unwrap();
    assert_eq!(value, json!(["", null, ""]));
}

#[test]
fn test_overflowing_number_fails_cleanly() {
    // Too many digits for u64 and too large for a finite f64
    let line = format!("G1 X{}", "9".repeat(400));
    let cmd = parse_line(&line).expect("command");
    assert_eq!(cmd.parameter("X"), Some(&ParameterValue::Float(f64::INFINITY)));

    let mut sink = RecordingSink::new();
    let err = cmd.to_host_value(&JsonHost::new(), &mut sink).unwrap_err();
    assert_eq!(err.kind, ErrorKind::CompositionFailure);
    assert_eq!(sink.len(), 1);
    assert_eq!(err.message, sink.messages[0]);
}
