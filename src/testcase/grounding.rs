use crate::rules::phrase::{Phrase, Rule, first_rule};
use crate::testcase::testcase_model::DEFAULT_GROUNDING;

/// Keyword -> document name, checked in order against retrieved context.
const GROUNDING_RULES: &[Rule<&str>] = &[
    Rule { when: Phrase::Any(&["save15", "discount", "coupon"]), then: "product_specs.md" },
    Rule { when: Phrase::Any(&["netflix", "red", "color"]), then: "ui_ux_guide.txt" },
    Rule { when: Phrase::Any(&["api", "endpoint"]), then: "api_endpoints.json" },
    Rule { when: Phrase::Any(&["product_specs"]), then: "product_specs.md" },
    Rule { when: Phrase::Any(&["ui_ux"]), then: "ui_ux_guide.txt" },
];

/// Pick the document label a batch of test cases is grounded in.
///
/// The fixed keyword rules win; otherwise the first uploaded document whose
/// name appears in the context; otherwise the generic label.
pub fn grounding_label(context: &str, uploaded: &[String]) -> String {
    if let Some(label) = first_rule(GROUNDING_RULES, context) {
        return label.to_string();
    }

    let lowered = context.to_lowercase();
    uploaded
        .iter()
        .find(|name| !name.is_empty() && lowered.contains(&name.to_lowercase()))
        .cloned()
        .unwrap_or_else(|| DEFAULT_GROUNDING.to_string())
}
