//! Request schemas checked at the boundary
//!
//! Every request type rejects unknown fields and enum values outside the
//! declared set. Once a request has been parsed the core trusts it and does
//! no further validation.

use crate::error::MentorError;
use crate::estimate::Difficulty;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Which pipeline a workflow request runs through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Question,
    CodeReview,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Question => "question",
            RequestType::CodeReview => "code_review",
        }
    }
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Workflow input: `{ userInput, requestType? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkflowInput {
    pub user_input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type: Option<RequestType>,
}

impl WorkflowInput {
    pub fn new(user_input: impl Into<String>, request_type: Option<RequestType>) -> Self {
        Self {
            user_input: user_input.into(),
            request_type,
        }
    }
}

/// Q&A tool input: `{ question, subject?, difficulty? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QaRequest {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// Review tool input: `{ code, language?, context? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewRequest {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Free-form description of what the code does; not used by the rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl ReviewRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
            context: None,
        }
    }
}

/// Parse and validate a JSON request
pub fn parse_request<T: DeserializeOwned>(json: &str) -> Result<T, MentorError> {
    Ok(serde_json::from_str(json)?)
}
