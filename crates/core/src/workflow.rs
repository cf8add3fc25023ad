//! Workflow dispatcher: routes user input to the Q&A or code-review path
//!
//! The generative-text [`Collaborator`] is injected at construction and is
//! the only source of the natural-language `response`. The rule-based review
//! runs independently on the original input and is attached alongside.

use crate::error::MentorError;
use crate::schema::{RequestType, WorkflowInput};
use crate::table::{Classifier, KeywordRule};
use crate::tools::ReviewTool;
use serde::{Deserialize, Serialize};

/// Instruction prepended to the input of a code-review request
pub const REVIEW_INSTRUCTION: &str = "请审查以下代码并提供改进建议：";

/// Confidence reported on every workflow response
pub const WORKFLOW_CONFIDENCE: f64 = 0.9;

/// An external capability that turns a prompt into generated text.
///
/// Implementations may keep conversation history; the workflow does not
/// care. Errors are fatal for the request and are not retried.
pub trait Collaborator: Send + Sync {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

impl<C: Collaborator + ?Sized> Collaborator for &C {
    fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        (**self).generate(prompt)
    }
}

impl<C: Collaborator + ?Sized> Collaborator for Box<C> {
    fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        (**self).generate(prompt)
    }
}

/// Structured analysis attached to a code-review response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Workflow output: `{ response, analysis?, relatedTopics, confidence }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutput {
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    pub related_topics: Vec<String>,
    pub confidence: f64,
}

/// Tokens that mark input as code, checked case-insensitively
static REQUEST_TYPES: Classifier<RequestType> = Classifier::new(
    &[KeywordRule {
        category: RequestType::CodeReview,
        keywords: &["function ", "def ", "class ", "const ", "public ", "#include"],
    }],
    RequestType::Question,
);

pub fn detect_request_type(input: &str) -> RequestType {
    REQUEST_TYPES.classify(input)
}

/// Prompt forwarded to the collaborator
pub fn build_prompt(input: &str, request_type: RequestType) -> String {
    match request_type {
        RequestType::CodeReview => format!("{}\n\n{}", REVIEW_INSTRUCTION, input),
        RequestType::Question => input.to_string(),
    }
}

const TOPIC_SUBJECTS: &[&str] = &["数学", "物理", "化学", "编程", "算法", "数据结构"];
const TOPIC_LANGUAGES: &[&str] = &["python", "javascript", "java", "cpp", "c++", "typescript"];

/// Subject then language keywords found in the input, in table order
pub fn related_topics(input: &str) -> Vec<String> {
    let lower = input.to_lowercase();
    TOPIC_SUBJECTS
        .iter()
        .chain(TOPIC_LANGUAGES)
        .filter(|kw| lower.contains(*kw))
        .map(|kw| kw.to_string())
        .collect()
}

/// One-step workflow over an injected collaborator
pub struct Workflow<C: Collaborator> {
    collaborator: C,
    reviewer: ReviewTool,
}

impl<C: Collaborator> Workflow<C> {
    pub fn new(collaborator: C, reviewer: ReviewTool) -> Self {
        Self {
            collaborator,
            reviewer,
        }
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    /// Handle one validated request.
    ///
    /// Makes exactly one collaborator call; its failure is returned as
    /// [`MentorError::Collaborator`] with no partial result.
    pub fn handle(&self, input: &WorkflowInput) -> Result<WorkflowOutput, MentorError> {
        let request_type = input
            .request_type
            .unwrap_or_else(|| detect_request_type(&input.user_input));
        tracing::info!(%request_type, explicit = input.request_type.is_some(), "dispatching request");

        let prompt = build_prompt(&input.user_input, request_type);
        let response = self
            .collaborator
            .generate(&prompt)
            .map_err(|e| MentorError::Collaborator(e.into()))?;

        let analysis = match request_type {
            RequestType::CodeReview => {
                let review = self.reviewer.review_source(&input.user_input, None, None);
                Some(Analysis {
                    kind: RequestType::CodeReview.as_str().to_string(),
                    score: Some(review.overall_score),
                    suggestions: Some(review.improvements),
                })
            }
            RequestType::Question => None,
        };

        Ok(WorkflowOutput {
            response,
            analysis,
            related_topics: related_topics(&input.user_input),
            confidence: WORKFLOW_CONFIDENCE,
        })
    }
}
