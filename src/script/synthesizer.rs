use crate::script::compiler::compile_step;
use crate::script::renderer::{ScriptRenderer, SeleniumRenderer};
use crate::testcase::testcase_model::TestCase;

/// Produce the Selenium (Python) script for one test case.
pub fn synthesize(test_case: &TestCase) -> String {
    synthesize_with(test_case, &SeleniumRenderer::default())
}

/// Produce a script for one test case with the given backend.
///
/// Pure text assembly. Steps are compiled and emitted in the order the test
/// case lists them, between the prelude and the trailer. Nothing is executed.
pub fn synthesize_with(test_case: &TestCase, renderer: &dyn ScriptRenderer) -> String {
    let mut script = renderer.header(test_case);
    script.push_str(&renderer.prelude(test_case));

    for (i, step) in test_case.steps.iter().enumerate() {
        let actions = compile_step(step);
        script.push_str(&renderer.step(i + 1, step, &actions));
    }

    script.push_str(&renderer.trailer(test_case));
    script.push_str(&renderer.entry_point(test_case));
    script
}
