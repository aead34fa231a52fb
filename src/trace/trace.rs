use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::testcase::testcase_model::TestCase;

/// One line of the generation trace file.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    /// `generate_tests` or `generate_script`
    pub kind: String,

    pub prompt: Option<String>,

    pub features: Vec<String>,
    pub test_ids: Vec<String>,

    pub grounded_in: Option<String>,

    pub catalog_selectors: usize,
    pub context_chars: usize,
}

impl TraceEvent {
    pub fn now(kind: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            kind: kind.to_string(),
            prompt: None,
            features: vec![],
            test_ids: vec![],
            grounded_in: None,
            catalog_selectors: 0,
            context_chars: 0,
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Self {
        self.prompt = Some(prompt.to_string());
        self
    }

    pub fn with_test_cases(mut self, cases: &[TestCase]) -> Self {
        self.test_ids = cases.iter().map(|c| c.test_id.clone()).collect();
        self.features = cases.iter().map(|c| c.feature.clone()).collect();
        self.features.dedup();
        self.grounded_in = cases.first().map(|c| c.grounded_in.clone());
        self
    }

    pub fn with_catalog_size(mut self, selectors: usize) -> Self {
        self.catalog_selectors = selectors;
        self
    }

    pub fn with_context_chars(mut self, chars: usize) -> Self {
        self.context_chars = chars;
        self
    }
}
