//! Finding types produced by the rule analyzer

use serde::{Deserialize, Serialize};

/// Kind of issue a rule reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Error,
    #[default]
    Warning,
    Suggestion,
}

impl std::fmt::Display for FindingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingKind::Error => write!(f, "error"),
            FindingKind::Warning => write!(f, "warning"),
            FindingKind::Suggestion => write!(f, "suggestion"),
        }
    }
}

/// Severity level of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

/// A single finding, produced by one rule firing on one location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,

    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// 1-based line number; `None` for whole-document findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Fixed remediation suggestion of the firing rule
    pub suggestion: String,
}

/// Counts of findings by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub errors: usize,
    pub warnings: usize,
    pub suggestions: usize,
    pub files_reviewed: usize,
}

impl ReviewSummary {
    pub fn from_findings<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut summary = Self::default();
        summary.add(findings);
        summary
    }

    pub fn add<'a>(&mut self, findings: impl IntoIterator<Item = &'a Finding>) {
        for f in findings {
            match f.kind {
                FindingKind::Error => self.errors += 1,
                FindingKind::Warning => self.warnings += 1,
                FindingKind::Suggestion => self.suggestions += 1,
            }
        }
    }

    /// Check whether findings exceed the configured threshold.
    ///
    /// - `"error"` → fail if errors > 0
    /// - `"warning"` → fail if errors or warnings > 0
    /// - `"suggestion"` → fail if any findings
    /// - `"never"` → always pass
    pub fn exceeds_threshold(&self, fail_on: &str) -> bool {
        match fail_on {
            "error" => self.errors > 0,
            "warning" => self.errors > 0 || self.warnings > 0,
            "suggestion" => self.errors > 0 || self.warnings > 0 || self.suggestions > 0,
            "never" => false,
            _ => self.errors > 0, // default to "error" for unknown values
        }
    }
}
