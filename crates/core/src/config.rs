//! Configuration file parsing for .mentor.toml

use crate::finding::{FindingKind, Severity};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`MentorConfig::find_and_load`]
pub const CONFIG_FILE_NAME: &str = ".mentor.toml";

/// A user-defined regex line rule in `.mentor.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    /// Optional human-readable identifier (e.g., "no-console-log")
    #[serde(default)]
    pub id: Option<String>,

    /// Regex pattern (Rust `regex` crate syntax), matched per line
    pub pattern: String,

    /// Message shown when the pattern matches
    pub message: String,

    #[serde(default, rename = "type")]
    pub kind: FindingKind,

    #[serde(default)]
    pub severity: Severity,

    /// Fix suggestion shown to the user
    #[serde(default)]
    pub suggestion: Option<String>,

    /// Glob patterns on the file name (e.g., `["*.ts", "*.js"]`); empty
    /// matches everything, including snippets with no file name
    #[serde(default)]
    pub paths: Vec<String>,

    /// If the matched line contains this substring, skip it
    #[serde(default)]
    pub reject_if_contains: Option<String>,
}

/// Main configuration structure for .mentor.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub ai: AIConfig,

    #[serde(default)]
    pub review: ReviewConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// User-defined custom rules
    #[serde(default, rename = "rules")]
    pub rules: Vec<CustomRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Finding kind threshold for a non-zero exit code from `review`
    #[serde(default = "default_fail_on")]
    pub fail_on: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AIConfig {
    /// LLM provider: "deepseek", "openai", "anthropic" or "ollama"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; can also be set via DEEPSEEK_API_KEY / OPENAI_API_KEY /
    /// ANTHROPIC_API_KEY
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Override the provider endpoint (e.g. a local ollama or a proxy)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Conversation turns kept in memory (0 disables memory)
    #[serde(default = "default_memory_turns")]
    pub memory_turns: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Built-in rule ids that must not fire (e.g. "magic-number")
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// Paths skipped when a directory is reviewed
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "terminal" or "json"
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable color output
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of pretty console output
    #[serde(default)]
    pub json: bool,
}

// Default functions
fn default_fail_on() -> String {
    "error".to_string()
}

fn default_true() -> bool {
    true
}

fn default_provider() -> String {
    "deepseek".to_string()
}

fn default_model() -> String {
    "deepseek-chat".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_temperature() -> f32 {
    0.7
}

fn default_memory_turns() -> usize {
    20
}

fn default_ignore_paths() -> Vec<String> {
    vec![
        "vendor/".to_string(),
        "node_modules/".to_string(),
        "dist/".to_string(),
        "build/".to_string(),
        "target/".to_string(),
        "__pycache__/".to_string(),
        ".venv/".to_string(),
        "venv/".to_string(),
    ]
}

fn default_format() -> String {
    "terminal".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            api_key: None,
            base_url: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            memory_turns: default_memory_turns(),
        }
    }
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            ignore_paths: default_ignore_paths(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            color: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl MentorConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: MentorConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Find and load .mentor.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
