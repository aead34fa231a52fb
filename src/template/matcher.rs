use crate::rules::phrase::all_matches;
use crate::template::library::fallback_template;
use crate::template::template_model::TestCaseTemplate;

/// Select the templates whose trigger keywords occur in `prompt`.
///
/// Matching is a case-insensitive substring test. Every hit is returned in
/// the order of `templates`; there is no ranking. When nothing matches the
/// result is the single fallback template.
pub fn match_templates(prompt: &str, templates: &[TestCaseTemplate]) -> Vec<TestCaseTemplate> {
    let matched: Vec<TestCaseTemplate> =
        all_matches(templates, prompt, |t, lowered| t.is_triggered_by(lowered))
            .into_iter()
            .cloned()
            .collect();

    if matched.is_empty() {
        tracing::debug!("no template matched the prompt, using fallback");
        return vec![fallback_template()];
    }

    matched
}
