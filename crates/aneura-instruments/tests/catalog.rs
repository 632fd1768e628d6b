use aneura_core::form::FormState;
use aneura_instruments::catalog::{InputKind, form_item, form_items};
use aneura_instruments::scores::uiats::uiats_items;
use aneura_instruments::{all_scores, calculate_uiats_scores, get_score};

#[test]
fn catalog_keeps_display_order() {
    let ids: Vec<&str> = form_items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "age",
            "riskFactors",
            "symptoms",
            "otherUiatsFactors",
            "lifeExpectancy",
            "comorbidity",
            "maximumDiameter",
            "morphology",
            "location",
            "additionalFindings",
            "aneurysmComplexity",
        ]
    );
}

#[test]
fn catalog_ids_are_unique() {
    let items = form_items();
    for (i, item) in items.iter().enumerate() {
        assert!(
            items.iter().skip(i + 1).all(|other| other.id != item.id),
            "duplicate id {}",
            item.id
        );
    }
}

#[test]
fn numeric_items_carry_no_options() {
    let item = form_item("maximumDiameter").unwrap();
    assert_eq!(item.kind, InputKind::Number);
    assert!(item.options.is_empty());
}

#[test]
fn uiats_table_ids_all_exist_in_the_catalog() {
    for item in uiats_items() {
        assert!(form_item(item.id).is_some(), "{} missing from catalog", item.id);
    }
}

#[test]
fn registry_resolves_scores_by_id() {
    assert_eq!(all_scores().len(), 2);
    assert!(get_score("uiats").is_some());
    assert!(get_score("phases").is_some());
    assert!(get_score("uaits").is_none());
}

#[test]
fn phases_reads_a_subset_of_the_form() {
    let phases = get_score("phases").unwrap();
    let ids: Vec<&str> = phases.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["age", "riskFactors", "maximumDiameter", "location"]);
}

#[test]
fn validation_flags_unknown_tokens_while_scoring_stays_fail_open() {
    let mut state = FormState::new();
    state.set("location", "left_ear");
    state.set("riskFactors", vec!["sah", "not_a_token"]);

    let uiats = get_score("uiats").unwrap();
    let errors = uiats.validate_values(&state);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.attribute_id == "location"));
    assert!(
        errors
            .iter()
            .any(|e| e.attribute_id == "riskFactors" && e.message.contains("not_a_token"))
    );

    // The same junk scores without raising: only the known token counts.
    assert_eq!(calculate_uiats_scores(&state).intervention, 4);
}

#[test]
fn validation_flags_shape_mismatch_and_bad_measurements() {
    let mut state = FormState::new();
    state.set("age", 55.0);
    state.set("maximumDiameter", -3.0);

    let uiats = get_score("uiats").unwrap();
    let errors = uiats.validate_values(&state);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.attribute_id == "age"));
    assert!(errors.iter().any(|e| e.attribute_id == "maximumDiameter"));
}

#[test]
fn complete_well_formed_state_validates_clean() {
    let mut state = FormState::new();
    state.set("age", "61-70");
    state.set("riskFactors", vec!["smoker", "hypertension"]);
    state.set("symptoms", vec!["seizures"]);
    state.set("otherUiatsFactors", vec!["fear_rupture"]);
    state.set("lifeExpectancy", ">10");
    state.set("comorbidity", vec!["dementia"]);
    state.set("maximumDiameter", 4.5);
    state.set("morphology", vec!["irregular_lobulated"]);
    state.set("location", "mca");
    state.set("additionalFindings", vec!["growth_over_time"]);
    state.set("aneurysmComplexity", "low_complexity");

    for score in all_scores() {
        assert!(
            score.validate_values(&state).is_empty(),
            "{} flagged a clean form",
            score.id()
        );
    }
}
