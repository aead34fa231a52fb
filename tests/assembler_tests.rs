use checkout_qa::template::library::default_templates;
use checkout_qa::template::matcher::match_templates;
use checkout_qa::testcase::assembler::{assemble, format_test_id};
use checkout_qa::testcase::grounding::grounding_label;
use checkout_qa::testcase::testcase_model::{DEFAULT_GROUNDING, TestCase};

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_ids_are_zero_padded() {
    assert_eq!(format_test_id(1), "TC-001");
    assert_eq!(format_test_id(42), "TC-042");
    assert_eq!(format_test_id(1234), "TC-1234");
}

#[test]
fn fallback_assembles_single_tc_001() {
    let matched = match_templates("", &default_templates());
    let cases = assemble(&matched, DEFAULT_GROUNDING);
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].test_id, "TC-001");
    assert_eq!(cases[0].feature, "Checkout System");
    assert_eq!(cases[0].grounded_in, "documentation");
}

#[test]
fn ids_are_sequential_in_match_order() {
    let templates = default_templates();
    let cases = assemble(&templates, "product_specs.md");
    assert_eq!(cases.len(), templates.len());
    for (i, (case, template)) in cases.iter().zip(&templates).enumerate() {
        assert_eq!(case.test_id, format!("TC-{:03}", i + 1));
        assert_eq!(case.scenario, template.scenario);
        assert_eq!(case.steps, template.steps);
        assert_eq!(case.selectors_used, template.selectors_used);
        assert_eq!(case.grounded_in, "product_specs.md");
    }
}

#[test]
fn counter_restarts_for_every_batch() {
    let templates = default_templates();
    let first = assemble(&templates[..3], "a");
    let second = assemble(&templates[3..5], "b");
    assert_eq!(first[0].test_id, "TC-001");
    assert_eq!(second[0].test_id, "TC-001");
    assert_eq!(second[1].test_id, "TC-002");
}

#[test]
fn assemble_of_nothing_is_empty() {
    assert!(assemble(&[], "x").is_empty());
}

// ============================================================================
// Grounding label
// ============================================================================

#[test]
fn grounding_rules_apply_in_priority_order() {
    assert_eq!(grounding_label("Use SAVE15 at checkout", &[]), "product_specs.md");
    assert_eq!(grounding_label("Netflix palette", &[]), "ui_ux_guide.txt");
    assert_eq!(grounding_label("POST to the API", &[]), "api_endpoints.json");
    assert_eq!(grounding_label("see product_specs", &[]), "product_specs.md");
    // Coupon beats colour when both appear.
    assert_eq!(grounding_label("coupon color", &[]), "product_specs.md");
}

#[test]
fn grounding_matches_substrings() {
    // "red" hides inside "required".
    assert_eq!(grounding_label("all fields are required", &[]), "ui_ux_guide.txt");
}

#[test]
fn grounding_falls_back_to_uploaded_name_then_default() {
    let uploaded = vec!["notes.txt".to_string(), "faq.md".to_string()];
    assert_eq!(grounding_label("from FAQ.md: shipping times", &uploaded), "faq.md");
    assert_eq!(grounding_label("shipping times", &uploaded), DEFAULT_GROUNDING);
    assert_eq!(grounding_label("", &[]), DEFAULT_GROUNDING);
}

// ============================================================================
// Serialized form
// ============================================================================

#[test]
fn test_case_uses_caller_field_names() {
    let cases = assemble(&default_templates()[..1], "product_specs.md");
    let json = serde_json::to_value(&cases[0]).unwrap();
    assert_eq!(json["Test_ID"], "TC-001");
    assert_eq!(json["Feature"], "Discount Code");
    assert_eq!(json["Steps"].as_array().unwrap().len(), 8);
    assert_eq!(json["Grounded_In"], "product_specs.md");
    assert_eq!(json["Selectors_Used"]["apply_button"], "#apply-coupon");
    assert!(json.get("Test_Scenario").is_some());
    assert!(json.get("Expected_Result").is_some());
}

#[test]
fn partial_test_case_gets_defaults() {
    let tc: TestCase = serde_json::from_str(r#"{"Steps": ["Navigate to checkout"]}"#).unwrap();
    assert_eq!(tc.test_id, "TC-000");
    assert_eq!(tc.feature, "Test");
    assert_eq!(tc.grounded_in, "documentation");
    assert!(tc.selectors_used.is_empty());
    assert_eq!(tc.steps.len(), 1);
}
