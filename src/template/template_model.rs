use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::rules::phrase::KeywordSet;

/// Feature area a template belongs to. Declaration order is match order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Coupon,
    Cart,
    Shipping,
    Payment,
    Validation,
    CompleteFlow,
    Fallback,
}

/// A statically authored test scenario and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseTemplate {
    pub category: TemplateCategory,

    /// Any keyword found in the prompt selects this template
    pub trigger_keywords: KeywordSet,

    pub feature: String,
    pub scenario: String,

    /// Ordered natural-language steps
    pub steps: Vec<String>,

    pub expected_result: String,

    /// Local reference name -> CSS locator (`#id` or `.class`)
    pub selectors_used: BTreeMap<String, String>,
}

impl TestCaseTemplate {
    /// Whether the template is selected by an already lowercased prompt.
    pub fn is_triggered_by(&self, lowered_prompt: &str) -> bool {
        self.trigger_keywords.hits(lowered_prompt)
    }
}
