use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::form::filter::FieldFilter;
use crate::form::form_model::DuplicatePolicy;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "objectform",
    version,
    about = "Extract form inputs into a JSON object, or fill them from one"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: objectform.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace of per-field outcomes to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read every named input in a scope into a JSON object
    Extract {
        /// Scope file: HTML fragment (.html/.htm) or JSON snapshot
        #[arg(long)]
        scope: String,

        /// Existing JSON object to extract into
        #[arg(long)]
        into: Option<String>,

        /// Field name to leave out (repeatable)
        #[arg(long)]
        skip: Vec<String>,

        /// Restrict extraction to this field name (repeatable)
        #[arg(long)]
        only: Vec<String>,

        /// Leave out text fields with an empty value
        #[arg(long)]
        skip_empty: bool,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Write a JSON object's values into the inputs of a scope
    Fill {
        /// Scope file: HTML fragment (.html/.htm) or JSON snapshot
        #[arg(long)]
        scope: String,

        /// JSON object of field name to string/boolean
        #[arg(long)]
        values: String,

        /// Which inputs to write when a name repeats: all or first
        #[arg(long)]
        duplicates: Option<DuplicatePolicy>,

        /// Output file path for the filled snapshot (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `objectform.yaml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub extract: FieldFilter,
    #[serde(default)]
    pub fill: FillConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    pub file: Option<String>,
}

pub const DEFAULT_CONFIG_PATH: &str = "objectform.yaml";

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// CLI skip/only lists extend the config's; `--skip-empty` can only turn it on.
pub fn build_field_filter(
    config: &FieldFilter,
    skip: &[String],
    only: &[String],
    skip_empty: bool,
) -> FieldFilter {
    let mut filter = config.clone();
    filter.skip.extend(skip.iter().cloned());
    filter.only.extend(only.iter().cloned());
    filter.skip_empty |= skip_empty;
    filter
}

pub fn resolve_duplicate_policy(cli: Option<DuplicatePolicy>, config: &FillConfig) -> DuplicatePolicy {
    cli.unwrap_or(config.duplicates)
}

pub fn resolve_trace_path<'a>(cli: Option<&'a str>, config: &'a TraceConfig) -> Option<&'a str> {
    cli.or(config.file.as_deref())
}
