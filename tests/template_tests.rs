use checkout_qa::template::library::{default_templates, fallback_template};
use checkout_qa::template::matcher::match_templates;
use checkout_qa::template::template_model::TemplateCategory;

fn categories(prompt: &str) -> Vec<TemplateCategory> {
    match_templates(prompt, &default_templates())
        .iter()
        .map(|t| t.category)
        .collect()
}

// ============================================================================
// Template library
// ============================================================================

#[test]
fn library_is_in_category_order() {
    let cats: Vec<TemplateCategory> = default_templates().iter().map(|t| t.category).collect();
    let mut sorted = cats.clone();
    sorted.sort();
    assert_eq!(cats, sorted);
    assert_eq!(cats.len(), 11);
    assert!(!cats.contains(&TemplateCategory::Fallback));
}

#[test]
fn library_locators_are_css_ids_or_classes() {
    for template in default_templates().iter().chain([fallback_template()].iter()) {
        assert!(!template.steps.is_empty(), "{} has no steps", template.scenario);
        for locator in template.selectors_used.values() {
            assert!(
                locator.starts_with('#') || locator.starts_with('.'),
                "unexpected locator {locator}"
            );
        }
    }
}

#[test]
fn valid_coupon_template_has_eight_steps() {
    let coupon = &default_templates()[0];
    assert_eq!(coupon.feature, "Discount Code");
    assert_eq!(coupon.steps.len(), 8);
    assert_eq!(
        coupon.selectors_used.get("apply_button").map(String::as_str),
        Some("#apply-coupon")
    );
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn coupon_prompt_selects_coupon_templates_in_any_case() {
    for prompt in ["coupon", "Test the COUPON box", "weird cOuPoN stuff and shipping"] {
        let cats = categories(prompt);
        assert_eq!(&cats[..2], &[TemplateCategory::Coupon, TemplateCategory::Coupon]);
    }
}

#[test]
fn discount_prompt_matches_only_coupon_templates() {
    let matched = match_templates("I want to test discount codes", &default_templates());
    assert_eq!(matched.len(), 2);
    assert!(matched.iter().all(|t| t.category == TemplateCategory::Coupon));
    assert_eq!(matched[0].scenario, "Apply a valid discount code 'SAVE15'");
}

#[test]
fn matches_follow_library_order_not_prompt_order() {
    assert_eq!(
        categories("validation of the shipping form"),
        vec![
            TemplateCategory::Shipping,
            TemplateCategory::Shipping,
            TemplateCategory::Validation,
            TemplateCategory::Validation,
        ]
    );
}

#[test]
fn substring_hits_double_match_categories() {
    // "card" is a payment keyword, and "add" hides inside "address".
    let cats = categories("card address");
    assert!(cats.contains(&TemplateCategory::Cart));
    assert!(cats.contains(&TemplateCategory::Payment));
}

#[test]
fn unrelated_prompt_falls_back() {
    for prompt in ["", "   ", "hello world"] {
        let matched = match_templates(prompt, &default_templates());
        assert_eq!(matched, vec![fallback_template()]);
        assert_eq!(matched[0].feature, "Checkout System");
    }
}

#[test]
fn empty_template_list_falls_back() {
    let matched = match_templates("coupon", &[]);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].category, TemplateCategory::Fallback);
}

#[test]
fn matching_is_repeatable() {
    let templates = default_templates();
    for prompt in ["complete checkout", "pay with upi", "xyz", "Express DELIVERY"] {
        assert_eq!(
            match_templates(prompt, &templates),
            match_templates(prompt, &templates)
        );
    }
}

#[test]
fn complete_flow_prompt_includes_payment_through_checkout_keyword() {
    let cats = categories("complete checkout");
    assert_eq!(cats.last(), Some(&TemplateCategory::CompleteFlow));
    assert!(cats.contains(&TemplateCategory::Payment));
}
