use checkout_qa::catalog::builder::build;
use checkout_qa::catalog::catalog_model::PageCatalog;
use checkout_qa::report::console::{format_catalog, format_test_case, format_test_suite};

use crate::common::utils::{checkout_markup, sample_case};

mod common;

// ============================================================================
// Test cases
// ============================================================================

#[test]
fn test_case_lists_numbered_steps() {
    let tc = sample_case("TC-001", &["Navigate to checkout", "Click Apply"]);
    let out = format_test_case(&tc);
    assert!(out.starts_with("Test_ID: TC-001\nFeature: Discount Code\n"));
    assert!(out.contains("Steps:\n  1. Navigate to checkout\n  2. Click Apply\n"));
    assert!(out.ends_with("Grounded_In: product_specs.md\n"));
}

#[test]
fn test_case_without_steps_omits_steps_block() {
    let out = format_test_case(&sample_case("TC-001", &[]));
    assert!(!out.contains("Steps:"));
}

#[test]
fn suite_ends_with_count() {
    let cases = vec![sample_case("TC-001", &[]), sample_case("TC-002", &[])];
    let out = format_test_suite(&cases);
    assert!(out.contains("Test_ID: TC-001"));
    assert!(out.contains("\nTest_ID: TC-002"));
    assert!(out.ends_with("=== Generated 2 test case(s) ===\n"));
}

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn catalog_sections_follow_category_order() {
    let out = format_catalog(&build(&checkout_markup()));
    let order = ["[buttons]", "[inputs]", "[product_cards]", "[cart_elements]", "[features]"];
    let positions: Vec<usize> = order.iter().map(|s| out.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(out.contains("#apply-coupon"));
    assert!(out.contains("(data-id=p1)"));
    assert!(out.contains("  - Form Validation\n"));
}

#[test]
fn empty_catalog_is_labelled() {
    assert_eq!(format_catalog(&PageCatalog::empty()), "(empty catalog)\n");
}

#[test]
fn empty_categories_are_skipped() {
    let out = format_catalog(&build(r#"<ul id="cart-items"></ul>"#));
    assert!(out.starts_with("[cart_elements]\n"));
    assert!(!out.contains("[buttons]"));
    assert!(!out.contains("[features]"));
}
