//! Mentor Core - rule-based classification and scoring engine
//!
//! This crate provides the analysis pipeline behind the Mentor study
//! assistant:
//! - Ordered keyword classifiers for subject area and source language
//! - Difficulty, confidence and overall-score estimators
//! - A line/document rule analyzer with built-in and config-defined rules
//! - The Q&A and code-review tools, and the workflow dispatcher that pairs
//!   them with an injected generative-text collaborator

pub mod analyzer;
pub mod category;
pub mod config;
pub mod discovery;
pub mod error;
pub mod estimate;
pub mod finding;
pub mod report;
pub mod schema;
pub mod table;
pub mod tools;
pub mod workflow;

pub use analyzer::{ComplexityMetrics, Maintainability, PerformanceMetrics, Rule, RuleSet};
pub use category::{detect_language, detect_subject, Language, Subject};
pub use config::MentorConfig;
pub use discovery::discover_sources;
pub use error::MentorError;
pub use estimate::{assess_difficulty, overall_score, CodeStats, Difficulty};
pub use finding::{Finding, FindingKind, ReviewSummary, Severity};
pub use report::{aggregate, AnalysisResult};
pub use schema::{parse_request, QaRequest, RequestType, ReviewRequest, WorkflowInput};
pub use tools::{answer_question, QaAnswer, ReviewTool};
pub use workflow::{Analysis, Collaborator, Workflow, WorkflowOutput};

/// Mentor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
