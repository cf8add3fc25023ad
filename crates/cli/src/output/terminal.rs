//! Terminal output formatting

use colored::Colorize;
use mentor_core::{
    AnalysisResult, Finding, FindingKind, Maintainability, QaAnswer, ReviewSummary, WorkflowOutput,
};

pub fn format_finding(finding: &Finding) -> String {
    let icon = match finding.kind {
        FindingKind::Error => "❌",
        FindingKind::Warning => "⚠️ ",
        FindingKind::Suggestion => "💡",
    };
    let location = match finding.line {
        Some(line) => format!("line {}", line),
        None => "file".to_string(),
    };

    format!(
        "  {} {} {} {}\n       {} {}",
        icon,
        format!("[{}]", finding.severity).dimmed(),
        finding.message,
        format!("({})", location).dimmed(),
        "→".cyan(),
        finding.suggestion
    )
}

fn score_colored(score: u8) -> String {
    let text = format!("{}/100", score);
    match score {
        80..=100 => text.green().to_string(),
        60..=79 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

fn bullet_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("  {}", title.bold());
    for item in items {
        println!("    - {}", item);
    }
}

pub fn print_analysis(result: &AnalysisResult, label: Option<&str>) {
    let header = match label {
        Some(label) => format!("{} · {}", label, result.language),
        None => result.language.to_string(),
    };
    println!(
        "  {} · score {}",
        header.bold(),
        score_colored(result.overall_score)
    );
    println!();

    for finding in &result.issues {
        println!("{}", format_finding(finding));
    }
    if !result.issues.is_empty() {
        println!();
    }

    let tier = match result.complexity.maintainability {
        Maintainability::Good => "good".green(),
        Maintainability::Fair => "fair".yellow(),
        Maintainability::Poor => "poor".red(),
    };
    println!(
        "  {} cyclomatic {} · cognitive {} · maintainability {}",
        "complexity:".bold(),
        result.complexity.cyclomatic,
        result.complexity.cognitive,
        tier
    );
    println!(
        "  {} time {} · space {} {}",
        "performance:".bold(),
        result.performance.time_complexity,
        result.performance.space_complexity,
        "(fixed labels)".dimmed()
    );
    for hint in &result.performance.optimization {
        println!("    - {}", hint);
    }
    bullet_list("improvements:", &result.improvements);
    bullet_list("best practices:", &result.best_practices);
}

pub fn print_summary(summary: &ReviewSummary) {
    println!("  {}", "\u{2500}".repeat(60).dimmed());
    println!(
        "  {} \u{00b7} {} \u{00b7} {}",
        format!("{} error(s)", summary.errors).red(),
        format!("{} warning(s)", summary.warnings).yellow(),
        format!("{} suggestion(s)", summary.suggestions).blue()
    );
    if summary.files_reviewed > 0 {
        println!("  {} file(s) reviewed", summary.files_reviewed);
    }
}

pub fn print_qa(answer: &QaAnswer) {
    println!("  {}", answer.answer.bold());
    println!("  {}", answer.explanation);
    println!();
    println!(
        "  difficulty {} · confidence {:.2} {}",
        answer.difficulty.to_string().cyan(),
        answer.confidence,
        "(fixed per subject)".dimmed()
    );
    bullet_list("related concepts:", &answer.related_concepts);
}

pub fn print_workflow(output: &WorkflowOutput) {
    println!("{}", output.response);
    println!();

    if let Some(analysis) = &output.analysis {
        match analysis.score {
            Some(score) => println!(
                "  {} {} · score {}",
                "analysis:".bold(),
                analysis.kind,
                score_colored(score)
            ),
            None => println!("  {} {}", "analysis:".bold(), analysis.kind),
        }
        if let Some(suggestions) = &analysis.suggestions {
            for s in suggestions {
                println!("    - {}", s);
            }
        }
    }
    if !output.related_topics.is_empty() {
        println!(
            "  {} {}",
            "related topics:".bold(),
            output.related_topics.join(", ")
        );
    }
    println!(
        "  {} {:.2}",
        "confidence:".dimmed(),
        output.confidence
    );
}
