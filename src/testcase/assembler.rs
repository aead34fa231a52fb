use crate::template::template_model::TestCaseTemplate;
use crate::testcase::testcase_model::TestCase;

/// Format a 1-based position as `TC-001`.
pub fn format_test_id(n: usize) -> String {
    format!("TC-{:03}", n)
}

/// Instantiate matched templates as test cases.
///
/// Ids start at `TC-001` for every call and follow the order of `matched`.
/// They are unique within one batch only.
pub fn assemble(matched: &[TestCaseTemplate], grounding_label: &str) -> Vec<TestCase> {
    matched
        .iter()
        .enumerate()
        .map(|(i, t)| TestCase {
            test_id: format_test_id(i + 1),
            feature: t.feature.clone(),
            scenario: t.scenario.clone(),
            steps: t.steps.clone(),
            expected_result: t.expected_result.clone(),
            grounded_in: grounding_label.to_string(),
            selectors_used: t.selectors_used.clone(),
        })
        .collect()
}
