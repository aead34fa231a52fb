use checkout_qa::script::action::ScriptAction;
use checkout_qa::script::renderer::{
    ScriptRenderer, SeleniumRenderer, class_name, method_name, py_str,
};
use checkout_qa::script::synthesizer::{synthesize, synthesize_with};
use checkout_qa::template::library::default_templates;
use checkout_qa::template::matcher::match_templates;
use checkout_qa::testcase::assembler::assemble;
use checkout_qa::testcase::testcase_model::TestCase;

use crate::common::utils::sample_case;

mod common;

// ============================================================================
// End-to-end discount scenario
// ============================================================================

#[test]
fn discount_prompt_yields_runnable_coupon_script() {
    let matched = match_templates("I want to test discount codes", &default_templates());
    let cases = assemble(&matched, "product_specs.md");
    let tc = &cases[0];

    assert_eq!(tc.test_id, "TC-001");
    assert_eq!(tc.feature, "Discount Code");
    assert_eq!(tc.steps.len(), 8);
    assert_eq!(tc.selectors_used["apply_button"], "#apply-coupon");

    let script = synthesize(tc);
    assert!(script.contains("coupon"));
    assert!(script.contains("apply-coupon"));
    assert!(script.contains("sys.exit(0 if result else 1)"));
    assert!(script.contains("if __name__ == \"__main__\":"));
}

// ============================================================================
// Skeleton
// ============================================================================

#[test]
fn script_sections_appear_in_fixed_order() {
    let script = synthesize(&sample_case("TC-007", &["Navigate to checkout page"]));

    let markers = [
        "Test ID: TC-007",
        "Grounded In: product_specs.md",
        "from selenium import webdriver",
        "self.driver.implicitly_wait(2)",
        "def log(self, message):",
        "def assert_element(self, by, selector",
        "def test_tc_007(self):",
        "# Step 1: Navigate to checkout page",
        "# Final verification",
        "except TimeoutException as e:",
        "driver.save_screenshot(\"TC-007_timeout.png\")",
        "except Exception as e:",
        "driver.save_screenshot(\"TC-007_error.png\")",
        "finally:",
        "driver.quit()",
        "def main():",
        "test = TC_007()",
        "result = test.test_tc_007()",
    ];

    let mut last = 0;
    for marker in markers {
        let pos = script[last..]
            .find(marker)
            .map(|p| p + last)
            .unwrap_or_else(|| panic!("{marker:?} missing or out of order"));
        last = pos;
    }
}

#[test]
fn header_carries_test_case_fields() {
    let tc = sample_case("TC-002", &[]);
    let header = SeleniumRenderer::default().header(&tc);
    assert!(header.starts_with("\"\"\"\n"));
    assert!(header.contains("Feature: Discount Code"));
    assert!(header.contains("Scenario: Apply a valid discount code 'SAVE15'"));
    assert!(header.contains("Expected Result: Total price is reduced by 15%."));
}

#[test]
fn steps_render_in_listed_order() {
    let steps = [
        "Navigate to checkout page",
        "Click 'Pay Now' button",
        "Enter discount code 'SAVE15' in the coupon field",
        "Verify success message displayed",
    ];
    let script = synthesize(&sample_case("TC-001", &steps));

    let positions: Vec<usize> = (1..=steps.len())
        .map(|n| script.find(&format!("# Step {}:", n)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let pay = script.find("pay_btn.click()").unwrap();
    let coupon = script.find("coupon_input.send_keys(\"SAVE15\")").unwrap();
    assert!(positions[1] < pay && pay < positions[2]);
    assert!(positions[2] < coupon && coupon < positions[3]);
}

#[test]
fn body_without_steps_still_has_trailer() {
    let script = synthesize(&sample_case("TC-001", &[]));
    assert!(!script.contains("# Step 1:"));
    assert!(script.contains("return self.test_passed"));
    assert!(script.contains("driver.quit()"));
}

#[test]
fn base_url_is_configurable() {
    let renderer = SeleniumRenderer::new("https://shop.example/checkout");
    let script = synthesize_with(&sample_case("TC-001", &[]), &renderer);
    assert!(script.contains("self.base_url = \"https://shop.example/checkout\""));

    let default = synthesize(&sample_case("TC-001", &[]));
    assert!(default.contains("self.base_url = \"file:///target_site/checkout.html\""));
}

#[test]
fn hostile_text_is_quoted() {
    let mut tc = sample_case("TC-001", &["Type \"quoted\" \\ text"]);
    tc.expected_result = "Ends with \"\"\" quotes".into();
    let script = synthesize(&tc);
    assert!(script.contains(r#"self.log("Step 1: Type \"quoted\" \\ text")"#));
    assert!(!script.contains("Ends with \"\"\" quotes"));
}

// ============================================================================
// Renderer pieces
// ============================================================================

#[test]
fn wait_renders_note_and_sleep() {
    let code = SeleniumRenderer::default().actions(&[ScriptAction::Wait {
        ms: 1500,
        note: Some("settle".into()),
    }]);
    assert_eq!(code, "            # settle\n            time.sleep(1.5)\n");
}

#[test]
fn python_names_from_test_ids() {
    assert_eq!(class_name("TC-001"), "TC_001");
    assert_eq!(method_name("TC-001"), "test_tc_001");
    assert_eq!(class_name("7 up"), "T_7_up");
    assert_eq!(py_str("a\"b\nc"), "\"a\\\"b\\nc\"");
}

/// A renderer that only lists step numbers, to check the synthesizer drives
/// any backend the same way.
struct Outline;

impl ScriptRenderer for Outline {
    fn header(&self, tc: &TestCase) -> String {
        format!("[{}]", tc.test_id)
    }
    fn prelude(&self, _: &TestCase) -> String {
        String::new()
    }
    fn actions(&self, actions: &[ScriptAction]) -> String {
        actions.len().to_string()
    }
    fn trailer(&self, _: &TestCase) -> String {
        "|end".into()
    }
    fn entry_point(&self, _: &TestCase) -> String {
        "|main".into()
    }
    fn step(&self, number: usize, _step: &str, actions: &[ScriptAction]) -> String {
        format!(" {}:{}", number, self.actions(actions))
    }
}

#[test]
fn synthesizer_drives_custom_backend() {
    let tc = sample_case("TC-003", &["Navigate", "Click 'Pay Now'"]);
    assert_eq!(synthesize_with(&tc, &Outline), "[TC-003] 1:1 2:1|end|main");
}
