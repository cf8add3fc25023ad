//! Send one request through the workflow

use anyhow::Result;
use mentor_core::{parse_request, ReviewTool, Workflow, WorkflowInput};

use super::{read_stdin, Context, Format};
use crate::ai::Agent;
use crate::output;
use crate::progress::Step;
use crate::RequestTypeArg;

pub fn run(
    ctx: &Context,
    input: Option<&str>,
    request_type: Option<RequestTypeArg>,
    json: Option<&str>,
) -> Result<()> {
    let request: WorkflowInput = match json {
        Some(json) => parse_request(json)?,
        None => {
            let text = match input {
                Some(text) => text.to_string(),
                None => read_stdin()?,
            };
            WorkflowInput::new(text, request_type.map(Into::into))
        }
    };

    let agent = Agent::from_config(&ctx.config.ai)?;
    let workflow = Workflow::new(agent, ReviewTool::from_config(&ctx.config));

    let step = Step::new(format!(
        "Asking {} ({})",
        workflow.collaborator().provider().name(),
        workflow.collaborator().model()
    ));
    let result = match workflow.handle(&request) {
        Ok(result) => {
            let summary = match &result.analysis {
                Some(analysis) => format!("{} analysis attached", analysis.kind),
                None => format!("{} related topic(s)", result.related_topics.len()),
            };
            step.finish(&summary);
            result
        }
        Err(e) => {
            step.fail();
            return Err(e.into());
        }
    };

    match ctx.format {
        Format::Json => output::json::print(&result)?,
        Format::Terminal => output::terminal::print_workflow(&result),
    }

    Ok(())
}
