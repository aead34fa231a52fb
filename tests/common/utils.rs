#![allow(dead_code)]

use std::path::PathBuf;

use checkout_qa::testcase::testcase_model::TestCase;

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn checkout_markup() -> String {
    std::fs::read_to_string(fixture("checkout.html")).unwrap()
}

pub fn sample_case(id: &str, steps: &[&str]) -> TestCase {
    TestCase {
        test_id: id.into(),
        feature: "Discount Code".into(),
        scenario: "Apply a valid discount code 'SAVE15'".into(),
        steps: steps.iter().map(|s| s.to_string()).collect(),
        expected_result: "Total price is reduced by 15%.".into(),
        grounded_in: "product_specs.md".into(),
        selectors_used: Default::default(),
    }
}
