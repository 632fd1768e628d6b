use aneura_core::form::FormState;

#[test]
fn empty_state_serializes_to_empty_object() {
    let state = FormState::new();
    assert_eq!(state.to_json().unwrap(), "{}");
}

#[test]
fn json_round_trip_preserves_values() {
    let mut state = FormState::new();
    state.set("age", "71-80");
    state.set("riskFactors", vec!["sah", "hypertension"]);
    state.set("maximumDiameter", 12.0);

    let json = state.to_json().unwrap();
    let decoded = FormState::from_json(&json).unwrap();
    assert_eq!(decoded, state);
}

#[test]
fn untagged_shapes_decode_from_frontend_json() {
    let state = FormState::from_json(
        r#"{"age":"<40","symptoms":["seizures"],"maximumDiameter":6.5}"#,
    )
    .unwrap();

    assert_eq!(state.choice("age"), Some("<40"));
    assert_eq!(state.choices("symptoms"), ["seizures"]);
    assert_eq!(state.number("maximumDiameter"), Some(6.5));
}

#[test]
fn wrong_shape_access_returns_nothing() {
    let mut state = FormState::new();
    state.set("age", 42.0);
    assert_eq!(state.choice("age"), None);
    assert!(state.choices("age").is_empty());

    state.set("riskFactors", "sah");
    assert!(state.choices("riskFactors").is_empty());
    assert_eq!(state.number("riskFactors"), None);
}

#[test]
fn set_then_unset_leaves_state_empty() {
    let mut state = FormState::new();
    state.set("age", "61-70");
    assert!(!state.is_empty());

    state.unset("age");
    assert!(state.is_empty());
}

#[test]
fn overwriting_a_value_keeps_the_latest() {
    let mut state = FormState::new();
    state.set("age", "41-60");
    state.set("age", ">80");
    assert_eq!(state.choice("age"), Some(">80"));
}

#[test]
fn malformed_json_reports_serialization_error() {
    let err = FormState::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("serialization error"));
}
