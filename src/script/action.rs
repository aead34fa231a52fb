use serde::{Deserialize, Serialize};

use crate::catalog::catalog_model::LocatorKind;

// ============================================================================
// Browser action vocabulary
// ============================================================================

/// How a generated script finds an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    pub kind: LocatorKind,
    pub value: String,
}

impl Locator {
    pub fn id(value: &str) -> Self {
        Self { kind: LocatorKind::Id, value: value.to_string() }
    }

    pub fn class(value: &str) -> Self {
        Self { kind: LocatorKind::Class, value: value.to_string() }
    }

    pub fn css(&self) -> String {
        self.kind.css(&self.value)
    }
}

/// One typed browser action. A compiled step is an ordered list of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Load the page under test
    Navigate { settle_ms: u64 },

    /// Wait for the element, then click it
    Click {
        binding: String,
        locator: Locator,
        description: String,
        settle_ms: u64,
    },

    /// Wait for the element, clear it and type `value`
    Fill {
        binding: String,
        locator: Locator,
        description: String,
        value: String,
        settle_ms: u64,
    },

    /// The element must be selected (radio/checkbox)
    AssertSelected {
        binding: String,
        locator: Locator,
        pass_message: String,
        fail_message: String,
    },

    /// Wait for the element; its text must contain `expected`
    AssertText {
        binding: String,
        locator: Locator,
        description: String,
        expected: String,
        pass_message: String,
        fail_message: String,
    },

    /// Read the element text and log it
    LogText {
        binding: String,
        locator: Locator,
        label: String,
    },

    /// Pause, optionally annotated with a comment
    Wait { ms: u64, note: Option<String> },
}
