use checkout_qa::catalog::catalog_model::LocatorKind;
use checkout_qa::script::action::{Locator, ScriptAction};
use checkout_qa::script::compiler::{compile, compile_step};
use checkout_qa::template::library::{default_templates, fallback_template};

fn only(step: &str) -> ScriptAction {
    let actions = compile_step(step);
    assert_eq!(actions.len(), 1, "expected one action for {step:?}");
    actions.into_iter().next().unwrap()
}

fn target(step: &str) -> Locator {
    match only(step) {
        ScriptAction::Click { locator, .. }
        | ScriptAction::Fill { locator, .. }
        | ScriptAction::AssertSelected { locator, .. }
        | ScriptAction::AssertText { locator, .. }
        | ScriptAction::LogText { locator, .. } => locator,
        other => panic!("no locator in {other:?}"),
    }
}

// ============================================================================
// Phrase rules
// ============================================================================

#[test]
fn navigation_steps() {
    assert_eq!(only("Navigate to NetCart checkout page"), ScriptAction::Navigate { settle_ms: 1000 });
    assert_eq!(only("OPEN the page"), ScriptAction::Navigate { settle_ms: 1000 });
}

#[test]
fn add_to_cart_uses_button_class() {
    let locator = target("Click 'Add to Cart' button for any product");
    assert_eq!(locator.kind, LocatorKind::Class);
    assert_eq!(locator.css(), ".btn-add");
}

#[test]
fn coupon_entry_and_apply() {
    match only("Enter discount code 'SAVE15' in the coupon field") {
        ScriptAction::Fill { locator, value, .. } => {
            assert_eq!(locator.css(), "#coupon");
            assert_eq!(value, "SAVE15");
        }
        other => panic!("expected Fill, got {other:?}"),
    }
    assert_eq!(target("Apply coupon code").css(), "#apply-coupon");
}

#[test]
fn form_fields() {
    assert_eq!(target("Fill in name: 'John Doe'").css(), "#name");
    assert_eq!(target("Fill in email: 'john.doe@example.com'").css(), "#email");
    assert_eq!(target("Fill in address: '123 Main Street'").css(), "#address");
}

#[test]
fn shipping_and_payment_selection() {
    assert_eq!(target("Select Express Shipping ($10)").css(), "#ship-express");
    assert!(matches!(
        only("Verify Standard shipping radio is checked"),
        ScriptAction::AssertSelected { .. }
    ));
    assert_eq!(target("Select Credit Card payment").css(), "#pay-card");
    assert_eq!(target("Enter card number: '4111111111111111'").css(), "#card-number");
}

#[test]
fn pay_now_and_result_checks() {
    match only("Click 'Pay Now' button") {
        ScriptAction::Click { locator, settle_ms, .. } => {
            assert_eq!(locator.css(), "#pay-now");
            assert_eq!(settle_ms, 2000);
        }
        other => panic!("expected Click, got {other:?}"),
    }
    match only("Verify success message displayed (id='payment-result')") {
        ScriptAction::AssertText { locator, expected, .. } => {
            assert_eq!(locator.css(), "#payment-result");
            assert_eq!(expected, "Successful");
        }
        other => panic!("expected AssertText, got {other:?}"),
    }
    assert!(matches!(
        only("Verify 15% discount applied"),
        ScriptAction::LogText { .. }
    ));
}

// ============================================================================
// Rule order
// ============================================================================

#[test]
fn first_matching_rule_wins() {
    // Navigation outranks add-to-cart.
    assert!(matches!(only("Open cart and add item"), ScriptAction::Navigate { .. }));
    // Add-to-cart outranks the total check.
    assert!(matches!(
        only("Verify cart total after add"),
        ScriptAction::Click { .. }
    ));
    // Coupon entry outranks coupon apply when both phrases appear.
    assert!(matches!(
        only("Enter and apply coupon"),
        ScriptAction::Fill { .. }
    ));
}

// ============================================================================
// Fallbacks
// ============================================================================

#[test]
fn unmatched_verify_step_is_generic_wait() {
    assert_eq!(
        only("Verify field accepts the input"),
        ScriptAction::Wait {
            ms: 500,
            note: Some("Verification step".into()),
        }
    );
}

#[test]
fn unrecognized_step_is_annotated_placeholder() {
    assert_eq!(
        only("Scroll to   Payment\nsection"),
        ScriptAction::Wait {
            ms: 500,
            note: Some("Scroll to Payment section".into()),
        }
    );
}

#[test]
fn compile_never_fails() {
    for step in ["", " ", "\"\"\"", "\\", "日本語のステップ", "verify", "VERIFY"] {
        let fragment = compile(step);
        assert!(fragment.contains("time.sleep"), "{step:?} -> {fragment}");
    }
    assert!(compile("verify").contains("# Verification step"));
}

#[test]
fn every_library_step_compiles() {
    for template in default_templates().iter().chain([fallback_template()].iter()) {
        for step in &template.steps {
            assert!(!compile_step(step).is_empty());
            assert!(!compile(step).is_empty());
        }
    }
}

#[test]
fn compiled_fragment_is_selenium_code() {
    let fragment = compile("Click 'Apply' coupon button (id='apply-coupon')");
    assert!(fragment.contains("self.assert_element(By.ID, \"apply-coupon\""));
    assert!(fragment.contains("apply_btn.click()"));

    let fragment = compile("Click 'Add to Cart' button");
    assert!(fragment.contains("By.CSS_SELECTOR, \".btn-add\""));
}
