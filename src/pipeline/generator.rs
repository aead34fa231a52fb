use serde::{Deserialize, Serialize};

use crate::docs::retriever::ContextRetriever;
use crate::pipeline::context::GenerationContext;
use crate::script::renderer::ScriptRenderer;
use crate::script::synthesizer::synthesize_with;
use crate::template::library::default_templates;
use crate::template::matcher::match_templates;
use crate::testcase::assembler::assemble;
use crate::testcase::grounding::grounding_label;
use crate::testcase::testcase_model::TestCase;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// Test cases produced for one prompt, with the inputs that shaped them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub tests: Vec<TestCase>,

    /// Retrieved context the grounding label was chosen from
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub context: String,

    /// Feature strings of the loaded page, for display
    #[serde(default)]
    pub page_features: Vec<String>,
}

/// Prompt -> test cases: retrieve context, pick the grounding label, match
/// templates and assemble them.
///
/// Always produces at least one test case.
pub fn generate_test_cases(
    prompt: &str,
    ctx: &GenerationContext,
    retriever: &dyn ContextRetriever,
    tracer: &TraceLogger,
) -> GenerationOutcome {
    let context = retriever.retrieve(prompt, &ctx.documents);
    let label = grounding_label(&context, &ctx.documents.labels());

    let matched = match_templates(prompt, &default_templates());
    let tests = assemble(&matched, &label);

    tracing::info!(
        tests = tests.len(),
        grounded_in = %label,
        context_chars = context.len(),
        "generated test cases"
    );
    report_missing_selectors(ctx, &tests);

    tracer.log(
        &TraceEvent::now("generate_tests")
            .with_prompt(prompt)
            .with_test_cases(&tests)
            .with_catalog_size(ctx.catalog.selectors.len())
            .with_context_chars(context.len()),
    );

    GenerationOutcome {
        tests,
        context,
        page_features: ctx.catalog.features.clone(),
    }
}

/// Test case -> automation script text.
pub fn generate_script(
    test_case: &TestCase,
    renderer: &dyn ScriptRenderer,
    tracer: &TraceLogger,
) -> String {
    let script = synthesize_with(test_case, renderer);

    tracing::info!(
        test_id = %test_case.test_id,
        steps = test_case.steps.len(),
        bytes = script.len(),
        "synthesized script"
    );
    tracer.log(
        &TraceEvent::now("generate_script").with_test_cases(std::slice::from_ref(test_case)),
    );

    script
}

/// Log selectors referenced by test cases that the loaded page lacks.
fn report_missing_selectors(ctx: &GenerationContext, tests: &[TestCase]) {
    if ctx.catalog.selectors.is_empty() {
        return;
    }
    for test in tests {
        for (name, locator) in &test.selectors_used {
            if !ctx.catalog.selectors.contains_locator(locator) {
                tracing::debug!(
                    test_id = %test.test_id,
                    selector = %name,
                    %locator,
                    "selector not in page catalog"
                );
            }
        }
    }
}
