use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A template instantiated for one generation request.
///
/// Serialized with the field names callers consume (`Test_ID`, `Feature`, ...).
/// Missing fields take the defaults a hand-written test case would get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "Test_ID", default = "default_test_id")]
    pub test_id: String,

    #[serde(rename = "Feature", default = "default_feature")]
    pub feature: String,

    #[serde(rename = "Test_Scenario", default)]
    pub scenario: String,

    #[serde(rename = "Steps", default)]
    pub steps: Vec<String>,

    #[serde(rename = "Expected_Result", default)]
    pub expected_result: String,

    #[serde(rename = "Grounded_In", default = "default_grounding")]
    pub grounded_in: String,

    #[serde(rename = "Selectors_Used", default)]
    pub selectors_used: BTreeMap<String, String>,
}

/// Label used when no document grounds a test case.
pub const DEFAULT_GROUNDING: &str = "documentation";

fn default_test_id() -> String { "TC-000".to_string() }
fn default_feature() -> String { "Test".to_string() }
fn default_grounding() -> String { DEFAULT_GROUNDING.to_string() }
