//! The two study-assistant tools: question answering and code review

pub mod qa;
pub mod review;

pub use qa::{answer_question, QaAnswer};
pub use review::{FileReview, ReviewTool};
