use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::docs::retriever::KeywordRetriever;
use crate::script::renderer::DEFAULT_BASE_URL;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "checkout-qa",
    version,
    about = "Generate QA test cases and Selenium scripts for the NetCart checkout page"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: checkout-qa.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the checkout page and print its selector catalog
    Catalog {
        /// Checkout page markup (HTML file)
        #[arg(long)]
        page: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate test cases from a free-text prompt
    Generate {
        /// What to test, e.g. "discount codes"
        #[arg(long)]
        prompt: String,

        /// Checkout page markup (HTML file)
        #[arg(long)]
        page: Option<String>,

        /// Support documents (files or directories) used for grounding
        #[arg(long, num_args = 1..)]
        docs: Vec<String>,

        /// Output format: text, json, yaml
        #[arg(long, default_value = "text")]
        format: String,

        /// Write one file per test case into this directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Generate Selenium scripts for test cases
    Script {
        /// JSON file holding one test case or a list of test cases
        #[arg(long, conflicts_with = "prompt")]
        test_case: Option<String>,

        /// Generate test cases from this prompt first
        #[arg(long, required_unless_present = "test_case")]
        prompt: Option<String>,

        /// Only the Nth test case (1-based)
        #[arg(long)]
        index: Option<usize>,

        /// Support documents used for grounding when --prompt is given
        #[arg(long, num_args = 1..)]
        docs: Vec<String>,

        /// URL the generated scripts open
        #[arg(long)]
        base_url: Option<String>,

        /// Checkout page markup (HTML file)
        #[arg(long)]
        page: Option<String>,

        /// Write one .py file per script into this directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `checkout-qa.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Checkout page markup used when `--page` is not given
    #[serde(default)]
    pub page: Option<String>,

    /// Support documents used when `--docs` is not given
    #[serde(default)]
    pub docs: Vec<String>,

    #[serde(default)]
    pub retrieval: RetrievalConfig,

    #[serde(default)]
    pub script: ScriptConfig,

    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self { top_n: default_top_n() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// JSONL trace file; tracing is off when unset
    pub path: Option<String>,
}

// Serde default helpers
fn default_top_n() -> usize { 5 }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if the file is missing or
/// malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("checkout-qa.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Resolution (CLI > config > defaults)
// ============================================================================

pub fn resolve_page(cli_page: Option<&str>, config: &AppConfig) -> Option<String> {
    cli_page.map(str::to_string).or_else(|| config.page.clone())
}

pub fn resolve_docs(cli_docs: &[String], config: &AppConfig) -> Vec<String> {
    if cli_docs.is_empty() {
        config.docs.clone()
    } else {
        cli_docs.to_vec()
    }
}

pub fn build_retriever(config: &AppConfig) -> KeywordRetriever {
    KeywordRetriever {
        top_n: config.retrieval.top_n,
    }
}

/// URL for generated scripts: flag, then config, then the page file itself.
pub fn resolve_base_url(cli_url: Option<&str>, page: Option<&str>, config: &AppConfig) -> String {
    if let Some(url) = cli_url.map(str::to_string).or_else(|| config.script.base_url.clone()) {
        return url;
    }

    page.and_then(|p| std::fs::canonicalize(p).ok())
        .map(|abs| format!("file://{}", abs.display()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
