//! Tests for the built-in rule analyzer

use mentor_core::analyzer::builtin::MAX_LINE_CHARS;
use mentor_core::{FindingKind, Language, MentorConfig, RuleSet, Severity};

fn analyze(code: &str, language: Language) -> Vec<mentor_core::Finding> {
    RuleSet::new().analyze(code, language)
}

// ── line-length ─────────────────────────────────────────────────────────

#[test]
fn test_line_at_limit_is_not_flagged() {
    let code = "a".repeat(MAX_LINE_CHARS);
    assert!(analyze(&code, Language::Unknown).is_empty());
}

#[test]
fn test_line_over_limit_is_flagged() {
    let code = format!("ok\n{}", "a".repeat(MAX_LINE_CHARS + 1));
    let findings = analyze(&code, Language::Unknown);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Warning);
    assert_eq!(findings[0].severity, Severity::Medium);
    assert_eq!(findings[0].line, Some(2));
    assert_eq!(findings[0].message, "行长度超过120个字符");
}

#[test]
fn test_line_length_counts_characters() {
    // 60 CJK characters are 180 bytes but well under the limit
    assert!(analyze(&"变".repeat(60), Language::Unknown).is_empty());
    assert_eq!(analyze(&"变".repeat(121), Language::Unknown).len(), 1);
}

// ── magic-number ────────────────────────────────────────────────────────

#[test]
fn test_magic_number_in_snippet() {
    let findings = analyze("function foo() { const x = 1000000; }", Language::Javascript);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Suggestion);
    assert_eq!(findings[0].severity, Severity::Low);
    assert_eq!(findings[0].line, Some(1));
    assert_eq!(findings[0].message, "发现可能的魔法数字");
}

#[test]
fn test_magic_number_skipped_on_commented_lines() {
    assert!(analyze("timeout = 5000 // ms", Language::Unknown).is_empty());
    assert!(analyze("x = 42", Language::Unknown).is_empty());
}

#[test]
fn test_magic_number_next_to_chinese_text() {
    let findings = analyze("let timeout = 超时3000毫秒;", Language::Unknown);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Suggestion);
}

#[test]
fn test_fullwidth_digits_are_not_magic_numbers() {
    assert!(analyze("x = １２３４", Language::Unknown).is_empty());
}

#[test]
fn test_magic_number_matches_years() {
    let findings = analyze("year = 2024", Language::Python);
    assert_eq!(findings.len(), 1);
}

// ── unused-variable ─────────────────────────────────────────────────────

#[test]
fn test_unassigned_const_in_javascript() {
    let findings = analyze("const ready;", Language::Javascript);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, FindingKind::Warning);
    assert_eq!(findings[0].message, "可能的未使用变量");
}

#[test]
fn test_unassigned_const_ignored_for_other_languages() {
    assert!(analyze("const ready;", Language::Cpp).is_empty());
    assert!(analyze("const ready;", Language::Unknown).is_empty());
}

// ── todo-marker ─────────────────────────────────────────────────────────

#[test]
fn test_todo_is_one_document_finding() {
    let code = "# TODO: split\nx = 1\n# FIXME later\n# TODO again";
    let findings = analyze(code, Language::Python);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].line, None);
    assert_eq!(findings[0].message, "发现TODO或FIXME标记");
}

#[test]
fn test_todo_marker_is_case_sensitive() {
    assert!(analyze("# todo: lowercase", Language::Python).is_empty());
}

// ── ordering and purity ─────────────────────────────────────────────────

#[test]
fn test_findings_in_line_order_document_last() {
    let code = format!(
        "// TODO tidy\nport = 8080\n{}\nconst pending;",
        "b".repeat(130)
    );
    let findings = analyze(&code, Language::Javascript);
    let lines: Vec<Option<usize>> = findings.iter().map(|f| f.line).collect();
    assert_eq!(lines, vec![Some(2), Some(3), Some(4), None]);
}

#[test]
fn test_rule_order_within_a_line() {
    let code = format!("x = 123456 + {}", "c".repeat(120));
    let findings = analyze(&code, Language::Unknown);
    assert_eq!(findings.len(), 2);
    assert_eq!(findings[0].kind, FindingKind::Warning);
    assert_eq!(findings[1].kind, FindingKind::Suggestion);
}

#[test]
fn test_analysis_is_idempotent() {
    let code = "// TODO\nconst x = 99999;\nconst y;";
    let rules = RuleSet::new();
    assert_eq!(
        rules.analyze(code, Language::Javascript),
        rules.analyze(code, Language::Javascript)
    );
}

#[test]
fn test_clean_code_has_no_findings() {
    let code = "def add(a, b):\n    # sum two numbers\n    return a + b\n";
    assert!(analyze(code, Language::Python).is_empty());
}

// ── rule set configuration ──────────────────────────────────────────────

#[test]
fn test_builtin_rule_ids() {
    assert_eq!(
        RuleSet::new().rule_ids(),
        vec!["line-length", "magic-number", "unused-variable", "todo-marker"]
    );
}

#[test]
fn test_disabled_rules_do_not_fire() {
    let config: MentorConfig = toml::from_str(
        r#"
[review]
disabled_rules = ["magic-number", "no-such-rule"]
"#,
    )
    .unwrap();
    let rules = RuleSet::from_config(&config);
    assert_eq!(rules.len(), 3);
    assert!(rules.analyze("port = 8080", Language::Unknown).is_empty());
}
