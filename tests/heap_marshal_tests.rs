//! Ownership tests against the counted heap: every failure path must leave
//! zero live objects behind and emit exactly one diagnostic.
use gcode_marshal::host::Heap;
use gcode_marshal::{ErrorKind, Host, ParameterValue, ParsedCommand, RecordingSink, ToHostValue};

fn move_command() -> ParsedCommand {
    ParsedCommand::new("G1", "G1 X10 Y20 E F1500")
        .with_parameter("X", 10.0)
        .with_parameter("Y", 20.0)
        .with_parameter("E", ParameterValue::None)
        .with_parameter("F", 1500u32)
}

/// Allocations a successful export of `move_command` performs
fn successful_allocations() -> usize {
    let heap = Heap::new();
    let mut sink = RecordingSink::new();
    let result = move_command().to_host_value(&heap, &mut sink).expect("export");
    drop(result);
    assert_eq!(heap.live_objects(), 0);
    heap.stats().allocations
}

#[test]
fn test_success_owns_every_part() {
    let heap = Heap::new();
    let mut sink = RecordingSink::new();

    let result = move_command().to_host_value(&heap, &mut sink).expect("export");

    // name, gcode, mapping, 3 values (E is the singleton), 4 keys, tuple
    assert_eq!(heap.live_objects(), 11);
    assert_eq!(result.ref_count(), 1);
    let mapping = result.item(1).expect("mapping");
    assert_eq!(mapping.ref_count(), 2);
    drop(mapping);

    drop(result);
    assert_eq!(heap.live_objects(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_every_allocation_failure_releases_everything() {
    let total = successful_allocations();
    assert_eq!(total, 11);

    for successful in 0..total {
        let heap = Heap::new();
        let mut sink = RecordingSink::new();
        heap.fail_allocation_after(successful);

        let result = move_command().to_host_value(&heap, &mut sink);

        assert!(result.is_err(), "allocation #{} should fail", successful + 1);
        assert_eq!(
            result.unwrap_err().kind,
            ErrorKind::CompositionFailure,
            "allocation #{}",
            successful + 1
        );
        assert_eq!(sink.len(), 1, "allocation #{}: {:?}", successful + 1, sink);
        assert_eq!(
            heap.live_objects(),
            0,
            "allocation #{} leaked objects",
            successful + 1
        );
    }
}

#[test]
fn test_failure_inserting_kth_parameter() {
    let heap = Heap::new();
    let mut sink = RecordingSink::new();

    // name, gcode, mapping, X value, X key, Y value -> Y key fails
    heap.fail_allocation_after(6);
    let err = move_command().to_host_value(&heap, &mut sink).unwrap_err();

    assert_eq!(err.kind, ErrorKind::CompositionFailure);
    assert_eq!(sink.len(), 1);
    assert!(sink.messages[0].contains("Parameter Name: Y"));
    assert!(sink.messages[0].contains("Value Type: float"));
    assert!(sink.messages[0].contains("Value: 20"));
    assert_eq!(heap.stats().allocations, 6);
    assert_eq!(heap.live_objects(), 0);
}

#[test]
fn test_failure_converting_value_stops_iteration() {
    let heap = Heap::new();
    let mut sink = RecordingSink::new();
    let cmd = ParsedCommand::new("M117", "M117 bad")
        .with_parameter("A", 1u32)
        .with_parameter("B", "bad\0value")
        .with_parameter("C", 3u32);

    let err = cmd.to_host_value(&heap, &mut sink).unwrap_err();

    assert_eq!(err.kind, ErrorKind::EncodingFailure);
    assert_eq!(sink.len(), 1);
    assert!(sink.messages[0].contains("string parameter value"));
    // name, gcode, mapping, A value, A key; C never touched
    assert_eq!(heap.stats().allocations, 5);
    assert_eq!(heap.live_objects(), 0);
}

#[test]
fn test_parameter_free_command_failures() {
    let cmd = ParsedCommand::new("G28", "G28");

    for successful in 0..3 {
        let heap = Heap::new();
        let mut sink = RecordingSink::new();
        heap.fail_allocation_after(successful);

        assert!(cmd.to_host_value(&heap, &mut sink).is_err());
        assert_eq!(sink.len(), 1);
        assert_eq!(heap.live_objects(), 0);
    }

    let heap = Heap::new();
    let mut sink = RecordingSink::new();
    let result = cmd.to_host_value(&heap, &mut sink).expect("export");
    assert_eq!(result.item(0).unwrap().as_str(), Some("G28"));
    assert!(result.item(1).unwrap().ptr_eq(&heap.none()));
    assert_eq!(result.item(2).unwrap().as_str(), Some("G28"));
    assert_eq!(heap.live_objects(), 3);
}

#[test]
fn test_none_parameter_is_absent_singleton_entry() {
    let heap = Heap::new();
    let mut sink = RecordingSink::new();

    let result = move_command().to_host_value(&heap, &mut sink).expect("export");
    let mapping = result.item(1).expect("mapping");

    assert_eq!(mapping.len(), 4);
    assert_eq!(mapping.keys(), ["X", "Y", "E", "F"]);
    let e = mapping.get("E").expect("E present");
    assert!(e.is_none());
    assert!(e.ptr_eq(&heap.none()));
    assert_eq!(e.as_str(), None);
}

#[test]
fn test_round_trip_is_exact() {
    let floats = [
        0.1,
        -0.0,
        f64::MIN_POSITIVE,
        f64::MAX,
        5e-324,
        123.456_789_012_345_68,
    ];
    let unsigned = [0u64, 1, 255, u32::MAX as u64 + 1, u64::MAX];
    let strings = ["", "PLA", "héllo ✓", "semi;colon (paren)"];

    let heap = Heap::new();
    let mut sink = RecordingSink::new();

    for value in floats {
        let object = ParameterValue::Float(value)
            .to_host_value(&heap, &mut sink)
            .expect("float");
        assert_eq!(object.as_float().map(f64::to_bits), Some(value.to_bits()));
    }
    for value in unsigned {
        let object = ParameterValue::UnsignedInteger(value)
            .to_host_value(&heap, &mut sink)
            .expect("unsigned");
        assert_eq!(object.as_unsigned(), Some(value));
    }
    for value in strings {
        let object = ParameterValue::from(value)
            .to_host_value(&heap, &mut sink)
            .expect("string");
        assert_eq!(object.as_str().map(str::as_bytes), Some(value.as_bytes()));
    }

    assert!(sink.is_empty());
    assert_eq!(heap.live_objects(), 0);
}
