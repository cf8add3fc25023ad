//! Difficulty, confidence and overall-score estimators
//!
//! All three are rule tables over the input. None of them look at the
//! meaning of the text, and confidence does not look at the text at all.

use crate::category::Subject;
use crate::table::{Classifier, KeywordRule, Lookup};
use serde::{Deserialize, Serialize};

/// Difficulty tier of a study question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phrase table for difficulty, checked in order; `medium` when nothing hits
pub static DIFFICULTY: Classifier<Difficulty> = Classifier::new(
    &[
        KeywordRule {
            category: Difficulty::Easy,
            keywords: &["什么是", "解释", "定义"],
        },
        KeywordRule {
            category: Difficulty::Medium,
            keywords: &["如何", "为什么", "比较"],
        },
        KeywordRule {
            category: Difficulty::Hard,
            keywords: &["证明", "推导", "分析"],
        },
    ],
    Difficulty::Medium,
);

pub fn assess_difficulty(question: &str) -> Difficulty {
    DIFFICULTY.classify(question)
}

/// Fixed per-subject answer confidence.
///
/// This is a static prior, not a measurement of the answer: callers must not
/// read it as a quality score.
pub static CONFIDENCE: Lookup<Subject, f64> = Lookup::new(
    &[
        (Subject::Programming, 0.85),
        (Subject::Math, 0.90),
        (Subject::Physics, 0.88),
        (Subject::Chemistry, 0.87),
        (Subject::General, 0.80),
    ],
    0.80,
);

pub fn confidence(subject: Subject) -> f64 {
    CONFIDENCE.get(&subject)
}

/// Line statistics of a code snippet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeStats {
    pub total_lines: usize,
    pub comment_lines: usize,
    pub code_lines: usize,
    pub comment_ratio: f64,
}

impl CodeStats {
    /// Count lines by splitting on `\n`, so empty input is a single line.
    pub fn measure(code: &str) -> Self {
        let mut total_lines = 0usize;
        let mut comment_lines = 0usize;

        for line in code.split('\n') {
            total_lines += 1;
            if is_comment_line(line) {
                comment_lines += 1;
            }
        }

        Self::from_counts(total_lines, comment_lines)
    }

    pub fn from_counts(total_lines: usize, comment_lines: usize) -> Self {
        let comment_ratio = if total_lines == 0 {
            0.0
        } else {
            comment_lines as f64 / total_lines as f64
        };
        Self {
            total_lines,
            comment_lines,
            code_lines: total_lines.saturating_sub(comment_lines),
            comment_ratio,
        }
    }
}

fn is_comment_line(line: &str) -> bool {
    let t = line.trim();
    t.starts_with("//") || t.starts_with('#') || t.starts_with("/*") || t.starts_with('*')
}

// ── Score deductions ──────────────────────────────────────────────────────────

const LONG_FILE_LINES: usize = 100;
const LONG_FILE_PENALTY: i32 = 10;
const HUGE_FILE_LINES: usize = 500;
const HUGE_FILE_PENALTY: i32 = 20;
const SPARSE_COMMENT_RATIO: f64 = 0.1;
const SPARSE_COMMENT_PENALTY: i32 = 15;
const DENSE_COMMENT_RATIO: f64 = 0.3;
const DENSE_COMMENT_PENALTY: i32 = 5;

/// Overall quality score: 100 minus fixed deductions, clamped to [0, 100]
pub fn overall_score(stats: &CodeStats) -> u8 {
    let mut score: i32 = 100;

    if stats.total_lines > LONG_FILE_LINES {
        score -= LONG_FILE_PENALTY;
    }
    if stats.total_lines > HUGE_FILE_LINES {
        score -= HUGE_FILE_PENALTY;
    }
    if stats.comment_ratio < SPARSE_COMMENT_RATIO {
        score -= SPARSE_COMMENT_PENALTY;
    }
    if stats.comment_ratio > DENSE_COMMENT_RATIO {
        score -= DENSE_COMMENT_PENALTY;
    }

    score.clamp(0, 100) as u8
}
