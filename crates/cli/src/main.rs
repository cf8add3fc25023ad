//! Mentor CLI - study assistant

use anyhow::Result;
use clap::Parser;
use mentor_cli::commands::{self, Context};
use mentor_cli::{logging, Cli, Commands};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let ctx = Context::load(&cli)?;
    logging::init_logging(logging::LoggingConfig::resolve(cli.verbose, &ctx.config.logging));

    match cli.command {
        Commands::Ask {
            ref question,
            ref subject,
            difficulty,
            ref json,
        } => {
            commands::ask::run(
                &ctx,
                question.as_deref(),
                subject.as_deref(),
                difficulty,
                json.as_deref(),
            )?;
        }
        Commands::Review {
            ref paths,
            ref language,
            ref context,
            ref json,
            ref fail_on,
        } => {
            let args = commands::review::ReviewArgs {
                paths,
                language: language.as_deref(),
                context: context.as_deref(),
                json: json.as_deref(),
                fail_on: fail_on.as_deref(),
            };
            if !commands::review::run(&ctx, &args)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Run {
            ref input,
            request_type,
            ref json,
        } => {
            commands::run::run(&ctx, input.as_deref(), request_type, json.as_deref())?;
        }
        Commands::Chat => {
            commands::chat::run(&ctx)?;
        }
        Commands::Init { ref path } => {
            commands::init::run(path.as_deref())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
