//! Answer a study question with the offline Q&A tool

use anyhow::Result;
use mentor_core::{answer_question, parse_request, QaRequest};

use super::{Context, Format};
use crate::output;
use crate::DifficultyArg;

pub fn run(
    ctx: &Context,
    question: Option<&str>,
    subject: Option<&str>,
    difficulty: Option<DifficultyArg>,
    json: Option<&str>,
) -> Result<()> {
    let request: QaRequest = match json {
        Some(json) => parse_request(json)?,
        None => QaRequest {
            question: question.unwrap_or_default().to_string(),
            subject: subject.map(str::to_string),
            difficulty: difficulty.map(Into::into),
        },
    };

    let answer = answer_question(&request);

    match ctx.format {
        Format::Json => output::json::print(&answer)?,
        Format::Terminal => output::terminal::print_qa(&answer),
    }

    Ok(())
}
