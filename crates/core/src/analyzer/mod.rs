//! Rule-based text analyzer
//!
//! A [`RuleSet`] scans code line by line against its line rules, then runs
//! its document rules once over the whole text. Every rule maps to exactly
//! one [`FindingKind`]/[`Severity`] pair, so findings never depend on each
//! other. Findings come back in source-line order, document findings last.

pub mod builtin;
pub mod complexity;
pub mod custom_rules;
pub mod performance;
pub mod practices;

use crate::category::Language;
use crate::config::MentorConfig;
use crate::finding::{Finding, FindingKind, Severity};

pub use builtin::BuiltinRule;
pub use complexity::{ComplexityMetrics, Maintainability};
pub use custom_rules::CompiledRule;
pub use performance::PerformanceMetrics;

/// Where a rule is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Once per line; findings carry a 1-based line number
    Line,
    /// Once over the whole text; findings carry no line number
    Document,
}

/// Trait for a single stateless rule
pub trait Rule: Send + Sync {
    /// Stable identifier (e.g. "line-length")
    fn id(&self) -> &str;

    fn scope(&self) -> RuleScope;

    /// Whether this rule runs for the given language and (optional) file name
    fn applies_to(&self, language: Language, file_name: Option<&str>) -> bool;

    /// Test a single line or the whole text, depending on [`Rule::scope`]
    fn is_match(&self, text: &str) -> bool;

    fn kind(&self) -> FindingKind;

    fn severity(&self) -> Severity;

    fn message(&self) -> &str;

    fn suggestion(&self) -> &str;
}

/// Build the finding a rule emits at `line`
pub(crate) fn make_finding(rule: &dyn Rule, line: Option<usize>) -> Finding {
    Finding {
        kind: rule.kind(),
        severity: rule.severity(),
        message: rule.message().to_string(),
        line,
        suggestion: rule.suggestion().to_string(),
    }
}

/// The active rules for a process: enabled built-ins followed by custom rules
pub struct RuleSet {
    builtin: Vec<&'static BuiltinRule>,
    custom: Vec<CompiledRule>,
}

impl RuleSet {
    /// All built-in rules, no custom rules
    pub fn new() -> Self {
        Self {
            builtin: builtin::rules().iter().collect(),
            custom: Vec::new(),
        }
    }

    /// Built-ins minus `review.disabled_rules`, plus `[[rules]]` from config
    pub fn from_config(config: &MentorConfig) -> Self {
        let disabled = &config.review.disabled_rules;
        for id in disabled {
            if !builtin::rules().iter().any(|r| r.id == id.as_str()) {
                tracing::warn!(rule = %id, "unknown rule id in review.disabled_rules");
            }
        }

        let builtin = builtin::rules()
            .iter()
            .filter(|r| !disabled.iter().any(|d| d == r.id))
            .collect();

        Self {
            builtin,
            custom: custom_rules::compile(&config.rules),
        }
    }

    pub fn len(&self) -> usize {
        self.builtin.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of all active rules, in evaluation order
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules().map(|r| r.id()).collect()
    }

    fn rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.builtin
            .iter()
            .map(|r| *r as &dyn Rule)
            .chain(self.custom.iter().map(|r| r as &dyn Rule))
    }

    /// Analyze a snippet with no file name
    pub fn analyze(&self, code: &str, language: Language) -> Vec<Finding> {
        self.analyze_named(code, language, None)
    }

    /// Analyze text that came from `file_name` (used by path-scoped custom rules)
    pub fn analyze_named(
        &self,
        code: &str,
        language: Language,
        file_name: Option<&str>,
    ) -> Vec<Finding> {
        let active: Vec<&dyn Rule> = self
            .rules()
            .filter(|r| r.applies_to(language, file_name))
            .collect();

        let mut findings = Vec::new();

        for (idx, line) in code.split('\n').enumerate() {
            for rule in active.iter().filter(|r| r.scope() == RuleScope::Line) {
                if rule.is_match(line) {
                    findings.push(make_finding(*rule, Some(idx + 1)));
                }
            }
        }

        for rule in active.iter().filter(|r| r.scope() == RuleScope::Document) {
            if rule.is_match(code) {
                findings.push(make_finding(*rule, None));
            }
        }

        tracing::debug!(%language, findings = findings.len(), "rule analysis finished");
        findings
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}
