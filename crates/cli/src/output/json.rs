//! JSON output formatting

use anyhow::Result;
use mentor_core::{AnalysisResult, ReviewSummary};
use serde::{Deserialize, Serialize};

/// Multi-file review output
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReview {
    pub files: Vec<JsonFileReview>,
    pub summary: ReviewSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFileReview {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalysisResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
