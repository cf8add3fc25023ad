//! Error types surfaced at the request boundary

use thiserror::Error;

/// Errors a request can fail with.
///
/// Classification, estimation and rule analysis are total over any text
/// input and never produce one of these.
#[derive(Error, Debug)]
pub enum MentorError {
    /// The request did not match its declared schema
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The generative-text collaborator failed; fatal for the request
    #[error("Collaborator failed: {0}")]
    Collaborator(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
}

impl From<serde_json::Error> for MentorError {
    fn from(err: serde_json::Error) -> Self {
        MentorError::Validation(err.to_string())
    }
}
