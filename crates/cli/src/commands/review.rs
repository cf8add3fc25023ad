//! Review code from files, directories, stdin or a JSON request

use anyhow::{bail, Result};
use colored::Colorize;
use mentor_core::tools::FileReview;
use mentor_core::{
    discover_sources, parse_request, AnalysisResult, Language, ReviewRequest, ReviewSummary,
    ReviewTool,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::{read_stdin, Context, Format};
use crate::output;

pub struct ReviewArgs<'a> {
    pub paths: &'a [PathBuf],
    pub language: Option<&'a str>,
    pub context: Option<&'a str>,
    pub json: Option<&'a str>,
    pub fail_on: Option<&'a str>,
}

/// Returns `false` when findings reach the `fail_on` threshold
pub fn run(ctx: &Context, args: &ReviewArgs<'_>) -> Result<bool> {
    let reviewer = ReviewTool::from_config(&ctx.config);
    tracing::debug!(rules = ?reviewer.rules().rule_ids(), "active rules");

    let fail_on = args.fail_on.unwrap_or(&ctx.config.general.fail_on);

    let summary = if args.json.is_some() || args.paths.is_empty() {
        let request: ReviewRequest = match args.json {
            Some(json) => parse_request(json)?,
            None => ReviewRequest {
                code: read_stdin()?,
                language: args.language.map(str::to_string),
                context: args.context.map(str::to_string),
            },
        };
        review_request(ctx, &reviewer, &request)?
    } else {
        let files = collect_files(args.paths, &ctx.config.review.ignore_paths)?;
        if files.is_empty() {
            bail!("No supported source files found");
        }
        let language = args
            .language
            .filter(|l| !l.is_empty())
            .map(Language::from_hint);
        review_paths(ctx, &reviewer, &files, language)?
    };

    Ok(!summary.exceeds_threshold(fail_on))
}

fn review_request(
    ctx: &Context,
    reviewer: &ReviewTool,
    request: &ReviewRequest,
) -> Result<ReviewSummary> {
    let result = reviewer.review(request);
    let summary = result.summary();

    match ctx.format {
        Format::Json => output::json::print(&result)?,
        Format::Terminal => {
            output::terminal::print_analysis(&result, None);
            println!();
            output::terminal::print_summary(&summary);
        }
    }

    Ok(summary)
}

/// Expand directories into their source files; explicit files are kept
/// whatever their extension. Paths are canonical and each file appears once,
/// at its first position.
pub fn collect_files(paths: &[PathBuf], ignore_paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(discover_sources(path, ignore_paths)?);
        } else if path.is_file() {
            files.push(path.canonicalize()?);
        } else {
            bail!("No such file or directory: {}", path.display());
        }
    }

    let mut seen = HashSet::new();
    files.retain(|f| seen.insert(f.clone()));
    Ok(files)
}

fn review_paths(
    ctx: &Context,
    reviewer: &ReviewTool,
    files: &[PathBuf],
    language: Option<Language>,
) -> Result<ReviewSummary> {
    let reviews = reviewer.review_files(files, language);

    let mut summary = ReviewSummary::default();
    for review in &reviews {
        if let Ok(result) = &review.result {
            summary.add(&result.issues);
            summary.files_reviewed += 1;
        }
    }

    match ctx.format {
        Format::Json => output::json::print(&to_json_review(&reviews, &summary))?,
        Format::Terminal => {
            let cwd = std::env::current_dir().unwrap_or_default();
            for review in &reviews {
                print_file_review(review, &cwd);
                println!();
            }
            output::terminal::print_summary(&summary);
        }
    }

    Ok(summary)
}

fn display_path(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}

fn print_file_review(review: &FileReview, cwd: &Path) {
    let label = display_path(&review.path, cwd);
    match &review.result {
        Ok(result) => output::terminal::print_analysis(result, Some(&label)),
        Err(e) => eprintln!("  {}: {}: {}", "warn".yellow(), label, e),
    }
}

fn to_json_review(reviews: &[FileReview], summary: &ReviewSummary) -> output::json::JsonReview {
    output::json::JsonReview {
        files: reviews
            .iter()
            .map(|r| {
                let (result, error): (Option<AnalysisResult>, Option<String>) = match &r.result {
                    Ok(result) => (Some(result.clone()), None),
                    Err(e) => (None, Some(e.to_string())),
                };
                output::json::JsonFileReview {
                    path: r.path.display().to_string(),
                    result,
                    error,
                }
            })
            .collect(),
        summary: summary.clone(),
    }
}
