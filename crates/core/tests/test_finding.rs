use mentor_core::{Finding, FindingKind, ReviewSummary, Severity};

fn finding(kind: FindingKind) -> Finding {
    Finding {
        kind,
        severity: Severity::Medium,
        message: "m".to_string(),
        line: Some(1),
        suggestion: "s".to_string(),
    }
}

#[test]
fn summary_counts_by_kind() {
    let findings = vec![
        finding(FindingKind::Error),
        finding(FindingKind::Warning),
        finding(FindingKind::Warning),
        finding(FindingKind::Suggestion),
    ];
    let summary = ReviewSummary::from_findings(&findings);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.warnings, 2);
    assert_eq!(summary.suggestions, 1);
    assert_eq!(summary.files_reviewed, 0);
}

#[test]
fn threshold_error_fails_on_errors() {
    let summary = ReviewSummary {
        errors: 1,
        ..Default::default()
    };
    assert!(summary.exceeds_threshold("error"));
}

#[test]
fn threshold_error_passes_on_warnings_only() {
    let summary = ReviewSummary {
        warnings: 5,
        suggestions: 3,
        ..Default::default()
    };
    assert!(!summary.exceeds_threshold("error"));
}

#[test]
fn threshold_warning_fails_on_warnings() {
    let summary = ReviewSummary {
        warnings: 2,
        ..Default::default()
    };
    assert!(summary.exceeds_threshold("warning"));
    assert!(!ReviewSummary {
        suggestions: 2,
        ..Default::default()
    }
    .exceeds_threshold("warning"));
}

#[test]
fn threshold_suggestion_fails_on_any_finding() {
    let summary = ReviewSummary {
        suggestions: 1,
        ..Default::default()
    };
    assert!(summary.exceeds_threshold("suggestion"));
}

#[test]
fn threshold_never_always_passes() {
    let summary = ReviewSummary {
        errors: 10,
        warnings: 20,
        suggestions: 30,
        ..Default::default()
    };
    assert!(!summary.exceeds_threshold("never"));
}

#[test]
fn unknown_threshold_behaves_like_error() {
    let summary = ReviewSummary {
        warnings: 1,
        ..Default::default()
    };
    assert!(!summary.exceeds_threshold("bogus"));
}

#[test]
fn severity_ordering() {
    assert!(Severity::High > Severity::Medium);
    assert!(Severity::Medium > Severity::Low);
}

#[test]
fn document_finding_omits_line() {
    let mut f = finding(FindingKind::Warning);
    f.line = None;
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(
        json,
        r#"{"type":"warning","severity":"medium","message":"m","suggestion":"s"}"#
    );
}
