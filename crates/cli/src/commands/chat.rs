//! Interactive session over a single agent
//!
//! Every line is one workflow request. The agent keeps its conversation
//! memory between lines, so follow-up questions see earlier turns.

use anyhow::Result;
use colored::Colorize;
use mentor_core::{ReviewTool, Workflow, WorkflowInput};
use std::io::{BufRead, Write};

use super::{Context, Format};
use crate::ai::Agent;
use crate::output;

const EXIT_COMMANDS: &[&str] = &["exit", "quit"];
const CLEAR_COMMAND: &str = "/clear";

pub fn run(ctx: &Context) -> Result<()> {
    let agent = Agent::from_config(&ctx.config.ai)?;
    eprintln!(
        "  {} {} ({}) · type {} to leave",
        "chat:".bold(),
        agent.provider().name(),
        agent.model(),
        "exit".cyan()
    );
    let workflow = Workflow::new(agent, ReviewTool::from_config(&ctx.config));

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("{} ", ">".green().bold());
        std::io::stderr().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if EXIT_COMMANDS.contains(&line) {
            break;
        }
        if line == CLEAR_COMMAND {
            workflow.collaborator().clear_memory();
            eprintln!("  {}", "conversation cleared".dimmed());
            continue;
        }

        match workflow.handle(&WorkflowInput::new(line, None)) {
            Ok(result) => match ctx.format {
                Format::Json => output::json::print(&result)?,
                Format::Terminal => output::terminal::print_workflow(&result),
            },
            Err(e) => {
                tracing::warn!(error = %e, "request failed");
                eprintln!("  {}: {}", "error".red(), e);
            }
        }
        println!();
    }

    tracing::debug!(turns = workflow.collaborator().memory_len(), "chat ended");
    Ok(())
}
