//! Mentor CLI library, exposed for integration tests

pub mod ai;
pub mod commands;
pub mod logging;
pub mod output;
pub mod progress;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mentor")]
#[command(about = "Study assistant: answers questions and reviews code", long_about = None)]
#[command(version = mentor_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to a .mentor.toml (default: search current directory and ancestors)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a study question and outline an answer (offline)
    Ask {
        /// The question to answer
        #[arg(required_unless_present = "json")]
        question: Option<String>,

        /// Subject area (e.g. 数学, physics)
        #[arg(long)]
        subject: Option<String>,

        /// Override the estimated difficulty
        #[arg(long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Full request as JSON: {"question", "subject"?, "difficulty"?}
        #[arg(long, conflicts_with_all = ["question", "subject", "difficulty"])]
        json: Option<String>,
    },

    /// Review source files, directories, or stdin (offline)
    Review {
        /// Files or directories to review (default: read stdin)
        paths: Vec<PathBuf>,

        /// Language of the code (default: from extension or content)
        #[arg(long)]
        language: Option<String>,

        /// What the code is meant to do
        #[arg(long)]
        context: Option<String>,

        /// Full request as JSON: {"code", "language"?, "context"?}
        #[arg(long, conflicts_with_all = ["paths", "language", "context"])]
        json: Option<String>,

        /// Finding threshold for non-zero exit: error, warning, suggestion, never
        #[arg(long)]
        fail_on: Option<String>,
    },

    /// Send one request through the assistant workflow (calls the LLM)
    Run {
        /// Question or code (default: read stdin)
        input: Option<String>,

        /// Skip request type detection
        #[arg(long = "type", value_enum)]
        request_type: Option<RequestTypeArg>,

        /// Full request as JSON: {"userInput", "requestType"?}
        #[arg(long, conflicts_with_all = ["input", "request_type"])]
        json: Option<String>,
    },

    /// Interactive session with conversation memory (calls the LLM)
    Chat,

    /// Initialize .mentor.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for mentor_core::Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => mentor_core::Difficulty::Easy,
            DifficultyArg::Medium => mentor_core::Difficulty::Medium,
            DifficultyArg::Hard => mentor_core::Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RequestTypeArg {
    Question,
    CodeReview,
}

impl From<RequestTypeArg> for mentor_core::RequestType {
    fn from(arg: RequestTypeArg) -> Self {
        match arg {
            RequestTypeArg::Question => mentor_core::RequestType::Question,
            RequestTypeArg::CodeReview => mentor_core::RequestType::CodeReview,
        }
    }
}
