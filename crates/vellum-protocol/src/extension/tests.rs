//! Unit tests for extension descriptors.

use super::{ExtensionSpec, StateMode};

#[test]
fn minimal_spec_serialises_compactly() {
    let json = serde_json::to_string(&ExtensionSpec::new("custom.cmd")).expect("serialise");
    assert_eq!(json, r#"{"id":"custom.cmd","stateMode":"toggle"}"#);
}

#[test]
fn full_spec_round_trips() {
    let spec = ExtensionSpec::new("custom.heading")
        .with_target("formatBlock")
        .with_state_mode(StateMode::Value)
        .with_value_template("<{}>");
    let json = serde_json::to_string(&spec).expect("serialise");
    let parsed: ExtensionSpec = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, spec);
    assert_eq!(parsed.value_template(), Some("<{}>"));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed: ExtensionSpec = serde_json::from_str(r#"{"id":"x"}"#).expect("parse");
    assert_eq!(parsed.state_mode(), StateMode::Toggle);
    assert_eq!(parsed.target(), None);
}
