//! Q&A tool: classifies a question and returns a structured answer outline
//!
//! The answer and explanation are fixed templates. The natural-language
//! answer itself comes from the workflow's collaborator.

use crate::category::{detect_subject, Subject};
use crate::estimate::{assess_difficulty, confidence, Difficulty};
use crate::schema::QaRequest;
use crate::table::Lookup;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QaAnswer {
    pub answer: String,
    pub explanation: String,
    pub related_concepts: Vec<String>,
    pub difficulty: Difficulty,
    /// Fixed per-subject value, see [`crate::estimate::CONFIDENCE`]
    pub confidence: f64,
}

static RELATED_CONCEPTS: Lookup<Subject, &[&str]> = Lookup::<Subject, &[&str]>::new(
    &[
        (
            Subject::Programming,
            &["变量", "函数", "循环", "条件语句", "面向对象"],
        ),
        (Subject::Math, &["代数", "几何", "微积分", "概率统计"]),
        (Subject::Physics, &["力学", "电学", "光学", "热学"]),
        (Subject::Chemistry, &["分子结构", "化学反应", "元素周期表"]),
        (Subject::General, &["基础概念", "核心原理", "应用方法"]),
    ],
    &["基础概念", "核心原理", "应用方法"],
);

pub fn related_concepts(subject: Subject) -> Vec<String> {
    RELATED_CONCEPTS
        .get(&subject)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn answer_outline(question: &str, subject: &str) -> String {
    format!("这是关于{}的问题“{}”的解答要点。", subject, question)
}

fn explanation_outline(subject: &str) -> String {
    format!(
        "解题思路：首先分析问题的核心要点，然后按照{}的相关原理和方法来逐步解答。",
        subject
    )
}

/// Answer a validated Q&A request. A non-empty subject hint takes
/// precedence over detection and is quoted verbatim in the outline text; the
/// tables fall back to [`Subject::General`] for labels they do not know.
pub fn answer_question(request: &QaRequest) -> QaAnswer {
    let (label, subject) = match request.subject.as_deref().filter(|s| !s.is_empty()) {
        Some(hint) => (hint.to_string(), Subject::from_hint(hint)),
        None => {
            let subject = detect_subject(&request.question);
            (subject.label().to_string(), subject)
        }
    };
    let difficulty = request
        .difficulty
        .unwrap_or_else(|| assess_difficulty(&request.question));

    QaAnswer {
        answer: answer_outline(&request.question, &label),
        explanation: explanation_outline(&label),
        related_concepts: related_concepts(subject),
        difficulty,
        confidence: confidence(subject),
    }
}
