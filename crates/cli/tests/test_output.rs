//! Tests for output formatting and format selection

use mentor_cli::commands::{resolve_format, Format};
use mentor_cli::output::json::{to_json, JsonFileReview, JsonReview};
use mentor_cli::output::terminal::format_finding;
use mentor_cli::OutputFormat;
use mentor_core::{Finding, FindingKind, MentorConfig, ReviewRequest, ReviewSummary, ReviewTool};

fn finding(line: Option<usize>) -> Finding {
    Finding {
        kind: FindingKind::Warning,
        severity: mentor_core::Severity::Medium,
        message: "行长度超过120个字符".to_string(),
        line,
        suggestion: "考虑将长行拆分为多行以提高可读性".to_string(),
    }
}

#[test]
fn test_format_finding_with_line() {
    colored::control::set_override(false);
    let text = format_finding(&finding(Some(3)));
    assert!(text.contains("[medium]"));
    assert!(text.contains("行长度超过120个字符"));
    assert!(text.contains("(line 3)"));
    assert!(text.contains("→ 考虑将长行拆分为多行以提高可读性"));
}

#[test]
fn test_format_document_finding() {
    colored::control::set_override(false);
    let text = format_finding(&finding(None));
    assert!(text.contains("(file)"));
}

#[test]
fn test_json_review_shape() {
    let result = ReviewTool::new().review(&ReviewRequest::new("x = 12345"));
    let review = JsonReview {
        files: vec![
            JsonFileReview {
                path: "a.py".to_string(),
                result: Some(result.clone()),
                error: None,
            },
            JsonFileReview {
                path: "gone.py".to_string(),
                result: None,
                error: Some("Failed to read file".to_string()),
            },
        ],
        summary: ReviewSummary {
            files_reviewed: 1,
            ..result.summary()
        },
    };

    let json = to_json(&review).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["files"][0]["result"]["overallScore"], 85);
    assert!(value["files"][0].get("error").is_none());
    assert!(value["files"][1].get("result").is_none());
    assert_eq!(value["summary"]["suggestions"], 1);
    assert_eq!(value["summary"]["files_reviewed"], 1);
}

#[test]
fn test_flag_overrides_config_format() {
    let mut config = MentorConfig::default();
    assert_eq!(resolve_format(None, &config), Format::Terminal);

    config.output.format = "json".to_string();
    assert_eq!(resolve_format(None, &config), Format::Json);
    assert_eq!(
        resolve_format(Some(OutputFormat::Terminal), &config),
        Format::Terminal
    );
}
