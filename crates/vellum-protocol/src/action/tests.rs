//! Unit tests for action wire encoding.

use rstest::rstest;

use super::{Action, ActionMeta};
use crate::error::ProtocolError;

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn bare_action_omits_payload_and_meta() {
    let wire = Action::new("bold").to_wire().expect("serialise");
    assert_eq!(wire, r#"{"type":"bold"}"#);
}

#[test]
fn meta_serialises_only_set_flags() {
    let wire = Action::new("bold")
        .with_meta(ActionMeta::focus_and_select())
        .to_wire()
        .expect("serialise");
    assert_eq!(wire, r#"{"type":"bold","meta":{"focusable":true,"selectable":true}}"#);
}

#[test]
fn payload_is_carried_verbatim() {
    let action = Action::new("formatBlock").with_payload("h1");
    let wire = action.to_wire().expect("serialise");
    assert_eq!(wire, r#"{"type":"formatBlock","payload":"h1"}"#);
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[rstest]
#[case::bare(r#"{"type":"italic"}"#, "italic")]
#[case::with_whitespace("  {\"type\":\"undo\"}\n", "undo")]
#[case::unknown_extra_fields(r#"{"type":"redo","extra":1}"#, "redo")]
fn parses_valid_actions(#[case] raw: &str, #[case] expected: &str) {
    let action = Action::from_wire(raw).expect("parse");
    assert_eq!(action.kind(), expected);
}

#[test]
fn parses_meta_flags() {
    let action = Action::from_wire(r#"{"type":"focus","meta":{"focusable":true}}"#).expect("parse");
    let meta = action.meta().expect("meta present");
    assert!(meta.focusable);
    assert!(!meta.selectable);
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   \n")]
#[case::not_json("bold")]
#[case::missing_type(r#"{"payload":1}"#)]
#[case::non_object("[1,2]")]
fn rejects_malformed_input(#[case] raw: &str) {
    let err = Action::from_wire(raw).expect_err("should reject");
    assert!(matches!(err, ProtocolError::Malformed { .. }));
}

#[test]
fn round_trips_payload_and_meta() {
    let action = Action::new("custom.cmd")
        .with_payload(serde_json::json!({"depth": 2}))
        .with_meta(ActionMeta::select_only());
    let wire = action.to_wire().expect("serialise");
    let parsed = Action::from_wire(&wire).expect("parse");
    assert_eq!(parsed, action);
}
