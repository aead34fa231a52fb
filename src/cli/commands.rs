use std::path::Path;

use crate::catalog::builder::load_page;
use crate::catalog::catalog_model::PageCatalog;
use crate::cli::config::{
    AppConfig, build_retriever, resolve_base_url, resolve_docs, resolve_page,
};
use crate::docs::document::DocumentSet;
use crate::error::QaError;
use crate::pipeline::context::GenerationContext;
use crate::pipeline::generator::{generate_script, generate_test_cases};
use crate::report::console::{format_catalog, format_test_case, format_test_suite};
use crate::script::renderer::{SeleniumRenderer, method_name};
use crate::testcase::testcase_model::TestCase;
use crate::trace::logger::TraceLogger;

// ============================================================================
// catalog subcommand
// ============================================================================

pub fn cmd_catalog(
    page: Option<&str>,
    json: bool,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(resolve_page(page, config).as_deref());

    if json {
        let text = serde_json::to_string_pretty(&catalog).map_err(|e| QaError::Serialize {
            context: "catalog".into(),
            source: e,
        })?;
        println!("{}", text);
    } else {
        print!("{}", format_catalog(&catalog));
    }

    Ok(())
}

// ============================================================================
// generate subcommand
// ============================================================================

pub fn cmd_generate(
    prompt: &str,
    page: Option<&str>,
    docs: &[String],
    format: &str,
    output_dir: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = build_context(page, docs, config)?;
    let tracer = build_tracer(config);
    let outcome = generate_test_cases(prompt, &ctx, &build_retriever(config), &tracer);

    match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| QaError::io(dir, e))?;
            for tc in &outcome.tests {
                let (content, ext) = render_test_case(tc, format)?;
                let filename = format!("{}.{}", sanitize_filename(&tc.test_id), ext);
                let path = Path::new(dir).join(&filename);
                std::fs::write(&path, content).map_err(|e| QaError::io(&path, e))?;
                tracing::info!(path = %path.display(), "wrote test case");
            }
            println!("Generated {} test cases in {}/", outcome.tests.len(), dir);
        }
        None => print!("{}", render_suite(&outcome.tests, format)?),
    }

    Ok(())
}

// ============================================================================
// script subcommand
// ============================================================================

#[allow(clippy::too_many_arguments)]
pub fn cmd_script(
    test_case: Option<&str>,
    prompt: Option<&str>,
    index: Option<usize>,
    docs: &[String],
    base_url: Option<&str>,
    page: Option<&str>,
    output_dir: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracer = build_tracer(config);
    let page = resolve_page(page, config);

    let cases = match (test_case, prompt) {
        (Some(path), _) => load_test_cases(Path::new(path))?,
        (None, Some(prompt)) => {
            let ctx = build_context(page.as_deref(), docs, config)?;
            generate_test_cases(prompt, &ctx, &build_retriever(config), &tracer).tests
        }
        (None, None) => Vec::new(),
    };

    let selected = select_cases(cases, index)?;
    let renderer = SeleniumRenderer::new(&resolve_base_url(base_url, page.as_deref(), config));

    if let Some(dir) = output_dir {
        std::fs::create_dir_all(dir).map_err(|e| QaError::io(dir, e))?;
    }

    for tc in &selected {
        let script = generate_script(tc, &renderer, &tracer);
        match output_dir {
            Some(dir) => {
                let path = Path::new(dir).join(format!("{}.py", method_name(&tc.test_id)));
                std::fs::write(&path, &script).map_err(|e| QaError::io(&path, e))?;
                println!("Wrote {}", path.display());
            }
            None => {
                println!("# ---- {} ----", tc.test_id);
                print!("{}", script);
            }
        }
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn load_catalog(page: Option<&str>) -> PageCatalog {
    match page {
        Some(path) => load_page(path),
        None => {
            tracing::warn!("no checkout page configured, using empty catalog");
            PageCatalog::empty()
        }
    }
}

/// Snapshot of page catalog and uploaded documents for one request.
pub fn build_context(
    page: Option<&str>,
    docs: &[String],
    config: &AppConfig,
) -> Result<GenerationContext, QaError> {
    let catalog = load_catalog(resolve_page(page, config).as_deref());
    let documents = DocumentSet::from_paths(&resolve_docs(docs, config))?;
    Ok(GenerationContext::new(catalog, documents))
}

fn build_tracer(config: &AppConfig) -> TraceLogger {
    match &config.trace.path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    }
}

/// Read one test case or a JSON list of test cases.
pub fn load_test_cases(path: &Path) -> Result<Vec<TestCase>, QaError> {
    let content = std::fs::read_to_string(path).map_err(|e| QaError::io(path, e))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| QaError::JsonParse {
            context: path.display().to_string(),
            source: e,
        })?;

    // Accept a bare list, a single case, or the `{"tests": [...]}` envelope.
    let list = match value {
        serde_json::Value::Object(mut map) if map.contains_key("tests") => {
            map.remove("tests").unwrap_or_default()
        }
        serde_json::Value::Array(items) => serde_json::Value::Array(items),
        single => serde_json::Value::Array(vec![single]),
    };

    serde_json::from_value(list).map_err(|e| QaError::JsonParse {
        context: path.display().to_string(),
        source: e,
    })
}

/// Keep only the `index`-th (1-based) case when requested.
pub fn select_cases(
    cases: Vec<TestCase>,
    index: Option<usize>,
) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    match index {
        None => Ok(cases),
        Some(n) => {
            let total = cases.len();
            match cases.into_iter().nth(n.wrapping_sub(1)) {
                Some(tc) => Ok(vec![tc]),
                None => Err(format!("test case index {} out of range (1..={})", n, total).into()),
            }
        }
    }
}

fn render_suite(cases: &[TestCase], format: &str) -> Result<String, QaError> {
    match format {
        "json" => {
            let envelope = serde_json::json!({ "tests": cases });
            serde_json::to_string_pretty(&envelope)
                .map(|s| s + "\n")
                .map_err(|e| QaError::Serialize {
                    context: "test cases".into(),
                    source: e,
                })
        }
        "yaml" => serde_yaml::to_string(cases).map_err(|e| QaError::Yaml {
            context: "test cases".into(),
            source: e,
        }),
        _ => Ok(format_test_suite(cases)),
    }
}

fn render_test_case(tc: &TestCase, format: &str) -> Result<(String, &'static str), QaError> {
    match format {
        "json" => serde_json::to_string_pretty(tc)
            .map(|s| (s + "\n", "json"))
            .map_err(|e| QaError::Serialize {
                context: tc.test_id.clone(),
                source: e,
            }),
        "yaml" => serde_yaml::to_string(tc)
            .map(|s| (s, "yaml"))
            .map_err(|e| QaError::Yaml {
                context: tc.test_id.clone(),
                source: e,
            }),
        _ => Ok((format_test_case(tc), "txt")),
    }
}

/// Sanitize a test id into a safe filename.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}
