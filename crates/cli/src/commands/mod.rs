//! CLI commands

pub mod ask;
pub mod chat;
pub mod init;
pub mod review;
pub mod run;

use anyhow::Result;
use mentor_core::MentorConfig;
use std::io::Read;

use crate::{Cli, OutputFormat};

/// Per-invocation state shared by all commands
pub struct Context {
    pub config: MentorConfig,
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Terminal,
    Json,
}

impl Context {
    /// Load config (explicit `--config`, else `.mentor.toml` search) and
    /// resolve output settings
    pub fn load(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => MentorConfig::from_file(path)?,
            None => MentorConfig::find_and_load(&std::env::current_dir()?)?,
        };

        if cli.no_color || !config.output.color {
            colored::control::set_override(false);
        }

        let format = resolve_format(cli.format, &config);
        Ok(Self { config, format })
    }
}

pub fn resolve_format(flag: Option<OutputFormat>, config: &MentorConfig) -> Format {
    if let Some(f) = flag {
        return match f {
            OutputFormat::Json => Format::Json,
            OutputFormat::Terminal => Format::Terminal,
        };
    }
    match config.output.format.as_str() {
        "json" => Format::Json,
        _ => Format::Terminal,
    }
}

/// Read all of stdin
pub(crate) fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
