use crate::catalog::catalog_model::LocatorKind;
use crate::script::action::{Locator, ScriptAction};
use crate::testcase::testcase_model::TestCase;

// ============================================================================
// ScriptRenderer trait: one implementation per automation backend
// ============================================================================

/// Renders the fixed script skeleton and compiled actions for one backend.
///
/// The synthesizer calls these in order: header, prelude, one `step` per test
/// step, trailer, entry point.
pub trait ScriptRenderer {
    /// Comment block describing the test case
    fn header(&self, test_case: &TestCase) -> String;

    /// Imports, driver setup, logging and element-presence helpers, and the
    /// opening of the guarded test body
    fn prelude(&self, test_case: &TestCase) -> String;

    /// Code for the actions of a single step, without the step banner
    fn actions(&self, actions: &[ScriptAction]) -> String;

    /// Pass/fail reporting, failure screenshots and guaranteed driver release
    fn trailer(&self, test_case: &TestCase) -> String;

    /// Runs the test and sets the process exit status
    fn entry_point(&self, test_case: &TestCase) -> String;

    /// Step banner (comment + log line) followed by the step's actions.
    fn step(&self, number: usize, step: &str, actions: &[ScriptAction]) -> String;
}

// ============================================================================
// Selenium (Python) backend
// ============================================================================

/// Page loaded by generated scripts unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "file:///target_site/checkout.html";

/// Explicit wait window for element presence, in seconds.
const ELEMENT_WAIT_SECS: u64 = 10;

/// Implicit wait applied to every lookup, in seconds.
const IMPLICIT_WAIT_SECS: u64 = 2;

/// Indentation of statements inside the test method's `try:` block.
const BODY: usize = 12;

/// Renders Python scripts for Selenium WebDriver (Chrome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeleniumRenderer {
    pub base_url: String,
}

impl Default for SeleniumRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SeleniumRenderer {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn action(&self, out: &mut String, action: &ScriptAction) {
        match action {
            ScriptAction::Navigate { settle_ms } => {
                line(out, BODY, "driver.get(self.base_url)");
                sleep(out, BODY, *settle_ms);
            }

            ScriptAction::Click {
                binding,
                locator,
                description,
                settle_ms,
            } => {
                locate(out, binding, locator, description);
                line(out, BODY, &format!("if {}:", binding));
                line(out, BODY + 4, &format!("{}.click()", binding));
                sleep(out, BODY + 4, *settle_ms);
            }

            ScriptAction::Fill {
                binding,
                locator,
                description,
                value,
                settle_ms,
            } => {
                locate(out, binding, locator, description);
                line(out, BODY, &format!("if {}:", binding));
                line(out, BODY + 4, &format!("{}.clear()", binding));
                line(out, BODY + 4, &format!("{}.send_keys({})", binding, py_str(value)));
                sleep(out, BODY + 4, *settle_ms);
            }

            ScriptAction::AssertSelected {
                binding,
                locator,
                pass_message,
                fail_message,
            } => {
                line(
                    out,
                    BODY,
                    &format!("{} = driver.find_element({})", binding, by(locator)),
                );
                line(out, BODY, &format!("if {}.is_selected():", binding));
                line(out, BODY + 4, &log_call(&format!("\u{2713} {}", pass_message)));
                line(out, BODY, "else:");
                fail(out, fail_message);
            }

            ScriptAction::AssertText {
                binding,
                locator,
                description,
                expected,
                pass_message,
                fail_message,
            } => {
                locate(out, binding, locator, description);
                line(
                    out,
                    BODY,
                    &format!("if {} and {} in {}.text:", binding, py_str(expected), binding),
                );
                line(out, BODY + 4, &log_call(&format!("\u{2713} {}", pass_message)));
                line(out, BODY, "else:");
                fail(out, fail_message);
            }

            ScriptAction::LogText {
                binding,
                locator,
                label,
            } => {
                line(
                    out,
                    BODY,
                    &format!("{} = driver.find_element({})", binding, by(locator)),
                );
                line(
                    out,
                    BODY,
                    &format!("self.log({} + {}.text)", py_str(&format!("{}: ", label)), binding),
                );
            }

            ScriptAction::Wait { ms, note } => {
                if let Some(note) = note {
                    line(out, BODY, &format!("# {}", single_line(note)));
                }
                line(out, BODY, &format!("time.sleep({})", secs(*ms)));
            }
        }
    }
}

impl ScriptRenderer for SeleniumRenderer {
    fn header(&self, tc: &TestCase) -> String {
        let mut out = String::new();
        line(&mut out, 0, "\"\"\"");
        line(&mut out, 0, "NetCart Checkout - Automated Test");
        line(&mut out, 0, "=====================================");
        line(&mut out, 0, &format!("Test ID: {}", py_doc(&tc.test_id)));
        line(&mut out, 0, &format!("Feature: {}", py_doc(&tc.feature)));
        line(&mut out, 0, &format!("Scenario: {}", py_doc(&tc.scenario)));
        line(&mut out, 0, &format!("Expected Result: {}", py_doc(&tc.expected_result)));
        line(&mut out, 0, &format!("Grounded In: {}", py_doc(&tc.grounded_in)));
        line(&mut out, 0, "");
        line(&mut out, 0, "Generated from a documentation-grounded test case.");
        line(&mut out, 0, "Selectors target the NetCart checkout page markup.");
        line(&mut out, 0, "\"\"\"");
        out
    }

    fn prelude(&self, tc: &TestCase) -> String {
        let class = class_name(&tc.test_id);
        let method = method_name(&tc.test_id);
        let mut out = String::new();

        line(&mut out, 0, "");
        line(&mut out, 0, "from selenium import webdriver");
        line(&mut out, 0, "from selenium.webdriver.common.by import By");
        line(&mut out, 0, "from selenium.webdriver.support.ui import WebDriverWait");
        line(&mut out, 0, "from selenium.webdriver.support import expected_conditions as EC");
        line(&mut out, 0, "from selenium.common.exceptions import TimeoutException");
        line(&mut out, 0, "import time");
        line(&mut out, 0, "import sys");
        line(&mut out, 0, "");
        line(&mut out, 0, "");
        line(&mut out, 0, &format!("class {}:", class));
        line(&mut out, 4, &format!("\"\"\"Test class for {}\"\"\"", py_doc(&tc.feature)));
        line(&mut out, 0, "");
        line(&mut out, 4, "def __init__(self):");
        line(&mut out, 8, "self.driver = webdriver.Chrome()");
        line(&mut out, 8, "self.driver.maximize_window()");
        line(&mut out, 8, &format!("self.driver.implicitly_wait({})", IMPLICIT_WAIT_SECS));
        line(&mut out, 8, &format!("self.wait = WebDriverWait(self.driver, {})", ELEMENT_WAIT_SECS));
        line(&mut out, 8, &format!("self.base_url = {}", py_str(&self.base_url)));
        line(&mut out, 8, "self.test_passed = True");
        line(&mut out, 8, "self.errors = []");
        line(&mut out, 0, "");
        line(&mut out, 4, "def log(self, message):");
        line(&mut out, 8, &format!("print({} + message)", py_str(&format!("[{}] ", tc.test_id))));
        line(&mut out, 0, "");
        line(&mut out, 4, "def assert_element(self, by, selector, message=\"Element should be present\"):");
        line(&mut out, 8, "try:");
        line(&mut out, 12, "element = self.wait.until(EC.presence_of_element_located((by, selector)))");
        line(&mut out, 12, "self.log(\"\u{2713} \" + message)");
        line(&mut out, 12, "return element");
        line(&mut out, 8, "except TimeoutException:");
        line(&mut out, 12, "self.log(\"\u{2717} FAILED: \" + message + \" - Selector: \" + selector)");
        line(&mut out, 12, "self.errors.append(\"Element not found: \" + selector)");
        line(&mut out, 12, "self.test_passed = False");
        line(&mut out, 12, "return None");
        line(&mut out, 0, "");
        line(&mut out, 4, &format!("def {}(self):", method));
        line(&mut out, 8, "\"\"\"");
        line(&mut out, 8, &format!("Test Scenario: {}", py_doc(&tc.scenario)));
        line(&mut out, 0, "");
        line(&mut out, 8, &format!("Expected Result: {}", py_doc(&tc.expected_result)));
        line(&mut out, 8, "\"\"\"");
        line(&mut out, 8, "driver = self.driver");
        line(&mut out, 0, "");
        line(&mut out, 8, "try:");
        line(&mut out, BODY, "self.log(\"=\" * 60)");
        line(&mut out, BODY, &log_call(&format!("Starting Test: {}", tc.test_id)));
        line(&mut out, BODY, &log_call(&format!("Feature: {}", tc.feature)));
        line(&mut out, BODY, "self.log(\"=\" * 60)");
        line(&mut out, 0, "");
        out
    }

    fn actions(&self, actions: &[ScriptAction]) -> String {
        let mut out = String::new();
        for action in actions {
            self.action(&mut out, action);
        }
        out
    }

    fn step(&self, number: usize, step: &str, actions: &[ScriptAction]) -> String {
        let mut out = String::new();
        line(&mut out, BODY, &format!("# Step {}: {}", number, single_line(step)));
        line(&mut out, BODY, &log_call(&format!("Step {}: {}", number, single_line(step))));
        out.push_str(&self.actions(actions));
        line(&mut out, 0, "");
        out
    }

    fn trailer(&self, tc: &TestCase) -> String {
        let timeout_shot = format!("{}_timeout.png", file_stem(&tc.test_id));
        let error_shot = format!("{}_error.png", file_stem(&tc.test_id));
        let mut out = String::new();

        line(&mut out, BODY, "# Final verification");
        line(&mut out, BODY, "self.log(\"=\" * 60)");
        line(&mut out, BODY, "if self.test_passed:");
        line(&mut out, BODY + 4, "self.log(\"\u{2713}\u{2713}\u{2713} TEST PASSED \u{2713}\u{2713}\u{2713}\")");
        line(
            &mut out,
            BODY + 4,
            &log_call(&format!("Expected Result Achieved: {}", tc.expected_result)),
        );
        line(&mut out, BODY, "else:");
        line(&mut out, BODY + 4, "self.log(\"\u{2717}\u{2717}\u{2717} TEST FAILED \u{2717}\u{2717}\u{2717}\")");
        line(&mut out, BODY + 4, "for error in self.errors:");
        line(&mut out, BODY + 8, "self.log(\"  - \" + error)");
        line(&mut out, 0, "");
        line(&mut out, BODY, "self.log(\"=\" * 60)");
        line(&mut out, BODY, "time.sleep(2)");
        line(&mut out, 0, "");
        line(&mut out, BODY, "return self.test_passed");
        line(&mut out, 0, "");
        line(&mut out, 8, "except TimeoutException as e:");
        line(&mut out, BODY, "self.log(\"\u{2717} Test Failed - Element Timeout: \" + str(e))");
        line(&mut out, BODY, &format!("driver.save_screenshot({})", py_str(&timeout_shot)));
        line(&mut out, BODY, &log_call(&format!("Screenshot saved: {}", timeout_shot)));
        line(&mut out, BODY, "return False");
        line(&mut out, 0, "");
        line(&mut out, 8, "except Exception as e:");
        line(&mut out, BODY, "self.log(\"\u{2717} Test Failed - Unexpected Error: \" + str(e))");
        line(&mut out, BODY, &format!("driver.save_screenshot({})", py_str(&error_shot)));
        line(&mut out, BODY, &log_call(&format!("Screenshot saved: {}", error_shot)));
        line(&mut out, BODY, "return False");
        line(&mut out, 0, "");
        line(&mut out, 8, "finally:");
        line(&mut out, BODY, "self.log(\"Closing browser...\")");
        line(&mut out, BODY, "driver.quit()");
        out
    }

    fn entry_point(&self, tc: &TestCase) -> String {
        let mut out = String::new();
        line(&mut out, 0, "");
        line(&mut out, 0, "");
        line(&mut out, 0, "def main():");
        line(&mut out, 4, &format!("test = {}()", class_name(&tc.test_id)));
        line(&mut out, 4, &format!("result = test.{}()", method_name(&tc.test_id)));
        line(&mut out, 0, "");
        line(&mut out, 4, "sys.exit(0 if result else 1)");
        line(&mut out, 0, "");
        line(&mut out, 0, "");
        line(&mut out, 0, "if __name__ == \"__main__\":");
        line(&mut out, 4, "main()");
        out
    }
}

// ============================================================================
// Python text helpers
// ============================================================================

fn line(out: &mut String, indent: usize, text: &str) {
    if !text.is_empty() {
        out.push_str(&" ".repeat(indent));
        out.push_str(text);
    }
    out.push('\n');
}

fn sleep(out: &mut String, indent: usize, ms: u64) {
    if ms > 0 {
        line(out, indent, &format!("time.sleep({})", secs(ms)));
    }
}

/// `binding = self.assert_element(By..., "...", "description")`
fn locate(out: &mut String, binding: &str, locator: &Locator, description: &str) {
    line(
        out,
        BODY,
        &format!(
            "{} = self.assert_element({}, {})",
            binding,
            by(locator),
            py_str(description)
        ),
    );
}

fn fail(out: &mut String, message: &str) {
    line(out, BODY + 4, &log_call(&format!("\u{2717} {}", message)));
    line(out, BODY + 4, &format!("self.errors.append({})", py_str(message)));
    line(out, BODY + 4, "self.test_passed = False");
}

fn log_call(message: &str) -> String {
    format!("self.log({})", py_str(message))
}

/// Selenium `By` strategy and value for a locator.
fn by(locator: &Locator) -> String {
    match locator.kind {
        LocatorKind::Id => format!("By.ID, {}", py_str(&locator.value)),
        LocatorKind::Class => format!("By.CSS_SELECTOR, {}", py_str(&locator.css())),
        LocatorKind::Name => format!("By.NAME, {}", py_str(&locator.value)),
    }
}

/// Milliseconds as a Python seconds literal (`1`, `0.5`).
fn secs(ms: u64) -> String {
    if ms % 1000 == 0 {
        (ms / 1000).to_string()
    } else {
        format!("{}", ms as f64 / 1000.0)
    }
}

/// Double-quoted Python string literal.
pub fn py_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Text safe inside a triple-quoted docstring line.
fn py_doc(text: &str) -> String {
    single_line(&text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\""))
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Python class name for a test id: `TC-001` -> `TC_001`.
pub fn class_name(test_id: &str) -> String {
    let ident: String = test_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    match ident.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => ident,
        _ => format!("T_{}", ident),
    }
}

/// Python test method name for a test id: `TC-001` -> `test_tc_001`.
pub fn method_name(test_id: &str) -> String {
    format!("test_{}", class_name(test_id).to_lowercase())
}

fn file_stem(test_id: &str) -> String {
    test_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
