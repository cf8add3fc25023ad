//! Review result record and its aggregation

use crate::analyzer::{ComplexityMetrics, PerformanceMetrics};
use crate::category::Language;
use crate::finding::{Finding, ReviewSummary};
use serde::{Deserialize, Serialize};

/// Full output of one code review. Built once per request, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub language: Language,
    /// 0–100
    pub overall_score: u8,
    /// Findings in source-line order, whole-document findings last
    pub issues: Vec<Finding>,
    pub improvements: Vec<String>,
    pub best_practices: Vec<String>,
    pub complexity: ComplexityMetrics,
    pub performance: PerformanceMetrics,
}

impl AnalysisResult {
    pub fn summary(&self) -> ReviewSummary {
        ReviewSummary::from_findings(&self.issues)
    }
}

/// Assemble an [`AnalysisResult`]. Pure structural combination.
pub fn aggregate(
    language: Language,
    overall_score: u8,
    issues: Vec<Finding>,
    improvements: Vec<String>,
    best_practices: Vec<String>,
    complexity: ComplexityMetrics,
    performance: PerformanceMetrics,
) -> AnalysisResult {
    AnalysisResult {
        language,
        overall_score,
        issues,
        improvements,
        best_practices,
        complexity,
        performance,
    }
}
