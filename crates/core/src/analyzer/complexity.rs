//! Complexity metrics from a branch-counting heuristic over raw lines.
//!
//! Not syntax-aware: a keyword inside a string or comment counts, and a line
//! with several keywords still adds only one.

use serde::{Deserialize, Serialize};

// ── Thresholds ────────────────────────────────────────────────────────────────

const FAIR_ABOVE: usize = 5;
const POOR_ABOVE: usize = 10;

/// Substrings that mark a line as a branch point
const BRANCH_KEYWORDS: &[&str] = &["if ", "else if ", "for ", "while ", "case ", "catch "];

/// Maintainability tier derived from cyclomatic complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maintainability {
    Good,
    Fair,
    Poor,
}

impl Maintainability {
    pub fn from_cyclomatic(cyclomatic: usize) -> Self {
        if cyclomatic > POOR_ABOVE {
            Maintainability::Poor
        } else if cyclomatic > FAIR_ABOVE {
            Maintainability::Fair
        } else {
            Maintainability::Good
        }
    }
}

impl std::fmt::Display for Maintainability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Maintainability::Good => write!(f, "good"),
            Maintainability::Fair => write!(f, "fair"),
            Maintainability::Poor => write!(f, "poor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityMetrics {
    pub cyclomatic: usize,
    /// floor(cyclomatic × 0.8)
    pub cognitive: usize,
    pub maintainability: Maintainability,
}

impl ComplexityMetrics {
    pub fn from_cyclomatic(cyclomatic: usize) -> Self {
        Self {
            cyclomatic,
            cognitive: cyclomatic * 4 / 5,
            maintainability: Maintainability::from_cyclomatic(cyclomatic),
        }
    }
}

/// Starts at 1 (base path), then adds 1 per line containing a branch keyword.
pub fn cyclomatic_complexity(code: &str) -> usize {
    1 + code
        .split('\n')
        .filter(|line| BRANCH_KEYWORDS.iter().any(|kw| line.contains(kw)))
        .count()
}

pub fn measure(code: &str) -> ComplexityMetrics {
    ComplexityMetrics::from_cyclomatic(cyclomatic_complexity(code))
}
