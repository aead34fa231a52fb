use crate::catalog::catalog_model::{Category, PageCatalog};
use crate::testcase::testcase_model::TestCase;

// ============================================================================
// Console formatting for generated test cases and the page catalog
// ============================================================================

/// Format one test case for terminal output.
///
/// Produces output like:
/// ```text
/// Test_ID: TC-001
/// Feature: Discount Code
/// Test_Scenario: Apply a valid discount code 'SAVE15'
/// Steps:
///   1. Navigate to NetCart checkout page
///   2. ...
/// Expected_Result: Total price is reduced by 15%.
/// Grounded_In: product_specs.md
/// ```
pub fn format_test_case(tc: &TestCase) -> String {
    let mut out = String::new();

    out.push_str(&format!("Test_ID: {}\n", tc.test_id));
    out.push_str(&format!("Feature: {}\n", tc.feature));
    out.push_str(&format!("Test_Scenario: {}\n", tc.scenario));

    if !tc.steps.is_empty() {
        out.push_str("Steps:\n");
        for (i, step) in tc.steps.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, step));
        }
    }

    out.push_str(&format!("Expected_Result: {}\n", tc.expected_result));
    out.push_str(&format!("Grounded_In: {}\n", tc.grounded_in));

    out
}

/// Format a batch of test cases separated by blank lines, with a count line.
pub fn format_test_suite(cases: &[TestCase]) -> String {
    let mut out = cases
        .iter()
        .map(format_test_case)
        .collect::<Vec<_>>()
        .join("\n");

    out.push_str(&format!("\n=== Generated {} test case(s) ===\n", cases.len()));
    out
}

/// Format the page catalog: one section per non-empty category, then features.
pub fn format_catalog(catalog: &PageCatalog) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        out.push_str("(empty catalog)\n");
        return out;
    }

    for category in Category::ALL {
        let entries = catalog.selectors.entries(category);
        if entries.is_empty() {
            continue;
        }

        out.push_str(&format!("[{}]\n", category.label()));
        for entry in entries {
            out.push_str(&format!("  {:<24} {}", entry.role, entry.css()));
            if !entry.attributes.is_empty() {
                let attrs: Vec<String> = entry
                    .attributes
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, v))
                    .collect();
                out.push_str(&format!("  ({})", attrs.join(", ")));
            }
            out.push('\n');
        }
    }

    if !catalog.features.is_empty() {
        out.push_str("[features]\n");
        for feature in &catalog.features {
            out.push_str(&format!("  - {}\n", feature));
        }
    }

    out
}
