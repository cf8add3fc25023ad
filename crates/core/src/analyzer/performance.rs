//! Performance hints from whole-text substring checks
//!
//! The complexity labels are constants. Nothing here measures the
//! asymptotic behavior of the code.

use serde::{Deserialize, Serialize};

pub const TIME_COMPLEXITY_LABEL: &str = "O(n)";
pub const SPACE_COMPLEXITY_LABEL: &str = "O(1)";

pub const NESTED_LOOP_HINT: &str = "避免嵌套循环，考虑使用更高效的算法";
pub const DOM_QUERY_HINT: &str = "缓存DOM查询结果以提高性能";
pub const SELECT_ALL_HINT: &str = "避免使用SELECT *，只查询需要的字段";
pub const NO_ISSUES_HINT: &str = "代码性能表现良好";

/// (substring, occurrences needed, hint), checked in order
const HINT_RULES: &[(&str, usize, &str)] = &[
    ("for ", 2, NESTED_LOOP_HINT),
    ("document.getElementById", 2, DOM_QUERY_HINT),
    ("SELECT *", 1, SELECT_ALL_HINT),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub time_complexity: String,
    pub space_complexity: String,
    /// Never empty: holds [`NO_ISSUES_HINT`] when no hint fired
    pub optimization: Vec<String>,
}

pub fn measure(code: &str) -> PerformanceMetrics {
    let mut optimization: Vec<String> = HINT_RULES
        .iter()
        .filter(|(needle, min, _)| code.matches(needle).count() >= *min)
        .map(|(_, _, hint)| hint.to_string())
        .collect();

    if optimization.is_empty() {
        optimization.push(NO_ISSUES_HINT.to_string());
    }

    PerformanceMetrics {
        time_complexity: TIME_COMPLEXITY_LABEL.to_string(),
        space_complexity: SPACE_COMPLEXITY_LABEL.to_string(),
        optimization,
    }
}
