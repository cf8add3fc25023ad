//! Built-in review rules
//!
//! These are substring and regex heuristics, not parsing. The magic-number
//! rule fires on any standalone run of four or more ASCII digits (years,
//! ports and ids included). Word boundaries are ASCII too, so digits glued to
//! CJK text still count. The unused-variable rule only notices a `const`
//! without an `=` on the same line.

use crate::analyzer::{Rule, RuleScope};
use crate::category::Language;
use crate::finding::{FindingKind, Severity};
use regex::Regex;
use std::sync::OnceLock;

/// Lines longer than this many characters are flagged
pub const MAX_LINE_CHARS: usize = 120;

/// A fixed rule whose predicate is a plain function
pub struct BuiltinRule {
    pub id: &'static str,
    pub scope: RuleScope,
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: &'static str,
    pub suggestion: &'static str,
    /// Restrict the rule to these languages; `None` runs it for all
    pub languages: Option<&'static [Language]>,
    check: fn(&str) -> bool,
}

impl Rule for BuiltinRule {
    fn id(&self) -> &str {
        self.id
    }

    fn scope(&self) -> RuleScope {
        self.scope
    }

    fn applies_to(&self, language: Language, _file_name: Option<&str>) -> bool {
        self.languages.map_or(true, |langs| langs.contains(&language))
    }

    fn is_match(&self, text: &str) -> bool {
        (self.check)(text)
    }

    fn kind(&self) -> FindingKind {
        self.kind
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        self.message
    }

    fn suggestion(&self) -> &str {
        self.suggestion
    }
}

fn magic_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?-u:\b)[0-9]{4,}(?-u:\b)").unwrap())
}

fn is_long_line(line: &str) -> bool {
    line.chars().count() > MAX_LINE_CHARS
}

fn has_magic_number(line: &str) -> bool {
    magic_number_regex().is_match(line) && !line.contains("//")
}

fn has_unassigned_const(line: &str) -> bool {
    line.contains("const ") && !line.contains('=')
}

fn has_todo_marker(text: &str) -> bool {
    text.contains("TODO") || text.contains("FIXME")
}

static RULES: &[BuiltinRule] = &[
    BuiltinRule {
        id: "line-length",
        scope: RuleScope::Line,
        kind: FindingKind::Warning,
        severity: Severity::Medium,
        message: "行长度超过120个字符",
        suggestion: "考虑将长行拆分为多行以提高可读性",
        languages: None,
        check: is_long_line,
    },
    BuiltinRule {
        id: "magic-number",
        scope: RuleScope::Line,
        kind: FindingKind::Suggestion,
        severity: Severity::Low,
        message: "发现可能的魔法数字",
        suggestion: "考虑将数字定义为常量以提高代码可维护性",
        languages: None,
        check: has_magic_number,
    },
    BuiltinRule {
        id: "unused-variable",
        scope: RuleScope::Line,
        kind: FindingKind::Warning,
        severity: Severity::Medium,
        message: "可能的未使用变量",
        suggestion: "检查变量是否被使用，如果未使用请删除",
        languages: Some(&[Language::Javascript]),
        check: has_unassigned_const,
    },
    BuiltinRule {
        id: "todo-marker",
        scope: RuleScope::Document,
        kind: FindingKind::Warning,
        severity: Severity::Medium,
        message: "发现TODO或FIXME标记",
        suggestion: "请及时处理TODO和FIXME标记",
        languages: None,
        check: has_todo_marker,
    },
];

/// All built-in rules in evaluation order
pub fn rules() -> &'static [BuiltinRule] {
    RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_number_needs_four_digits() {
        assert!(has_magic_number("x = 1000"));
        assert!(!has_magic_number("x = 999"));
        assert!(!has_magic_number("x = 1000 // ms"));
    }

    #[test]
    fn magic_number_is_word_bounded() {
        assert!(!has_magic_number("let v1234 = 0;"));
        assert!(has_magic_number("port: 8080,"));
    }

    #[test]
    fn magic_number_boundaries_are_ascii() {
        assert!(has_magic_number("超时3000毫秒"));
        assert!(!has_magic_number("x = １２３４"));
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = rules().iter().map(|r| r.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), rules().len());
    }
}
