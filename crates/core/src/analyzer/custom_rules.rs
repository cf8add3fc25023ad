//! Custom rules: user-defined regex line rules from `.mentor.toml`
//!
//! Lets a class or team add its own conventions (banned APIs, naming
//! reminders) without writing Rust code. Custom rules run after the
//! built-in line rules on every line.

use crate::analyzer::{Rule, RuleScope};
use crate::category::Language;
use crate::config::CustomRule;
use crate::finding::{FindingKind, Severity};
use glob::Pattern;
use regex::Regex;

const DEFAULT_SUGGESTION: &str = "请根据团队规范修改此行";

/// A single compiled custom rule ready for matching
pub struct CompiledRule {
    id: String,
    regex: Regex,
    globs: Vec<Pattern>,
    kind: FindingKind,
    severity: Severity,
    message: String,
    suggestion: String,
    reject_if_contains: Option<String>,
}

/// Compile rules from config. Invalid regexes drop the rule and invalid
/// globs drop the glob, each with a warning.
pub fn compile(rules: &[CustomRule]) -> Vec<CompiledRule> {
    let mut compiled = Vec::new();

    for (idx, rule) in rules.iter().enumerate() {
        let id = rule
            .id
            .clone()
            .unwrap_or_else(|| format!("custom-{}", idx + 1));

        let regex = match Regex::new(&rule.pattern) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(rule = %id, error = %e, "skipping custom rule with invalid regex");
                continue;
            }
        };

        let mut globs = Vec::new();
        for path_glob in &rule.paths {
            match Pattern::new(path_glob) {
                Ok(p) => globs.push(p),
                Err(e) => {
                    tracing::warn!(rule = %id, glob = %path_glob, error = %e, "skipping invalid glob");
                }
            }
        }

        compiled.push(CompiledRule {
            id,
            regex,
            globs,
            kind: rule.kind,
            severity: rule.severity,
            message: rule.message.clone(),
            suggestion: rule
                .suggestion
                .clone()
                .unwrap_or_else(|| DEFAULT_SUGGESTION.to_string()),
            reject_if_contains: rule.reject_if_contains.clone(),
        });
    }

    compiled
}

impl Rule for CompiledRule {
    fn id(&self) -> &str {
        &self.id
    }

    fn scope(&self) -> RuleScope {
        RuleScope::Line
    }

    /// A rule with globs only runs on named files matching one of them
    fn applies_to(&self, _language: Language, file_name: Option<&str>) -> bool {
        if self.globs.is_empty() {
            return true;
        }
        match file_name {
            Some(name) => self.globs.iter().any(|g| g.matches(name)),
            None => false,
        }
    }

    fn is_match(&self, line: &str) -> bool {
        if !self.regex.is_match(line) {
            return false;
        }
        // Negative filter
        match self.reject_if_contains {
            Some(ref reject) => !line.contains(reject.as_str()),
            None => true,
        }
    }

    fn kind(&self) -> FindingKind {
        self.kind
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn suggestion(&self) -> &str {
        &self.suggestion
    }
}
