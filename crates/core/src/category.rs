//! Closed category sets and their keyword classifiers
//!
//! Two independent category sets exist: the programming [`Language`] of a
//! code snippet and the [`Subject`] area of a study question. Both are
//! assigned by ordered first-match keyword tables and default to a catch-all
//! value, so assignment never fails.

use crate::table::{Classifier, KeywordRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Source language detected in (or declared for) a code snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Java,
    Cpp,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Unknown => "unknown",
        }
    }

    /// Look up a caller-supplied language name. Only the exact canonical
    /// names match; anything else is [`Language::Unknown`].
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "python" => Language::Python,
            "javascript" => Language::Javascript,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            _ => Language::Unknown,
        }
    }

    /// Map a file extension to a language, if it is one we review
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py") | Some("pyi") => Some(Language::Python),
            Some("js") | Some("jsx") | Some("mjs") | Some("cjs") | Some("ts") | Some("tsx") => {
                Some(Language::Javascript)
            }
            Some("java") => Some(Language::Java),
            Some("c") | Some("cc") | Some("cpp") | Some("cxx") | Some("h") | Some("hpp") => {
                Some(Language::Cpp)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language detection table, checked in order
pub static LANGUAGES: Classifier<Language> = Classifier::new(
    &[
        KeywordRule {
            category: Language::Python,
            keywords: &["def ", "import ", "print(", "if __name__"],
        },
        KeywordRule {
            category: Language::Javascript,
            keywords: &["function ", "const ", "let ", "var ", "console.log"],
        },
        KeywordRule {
            category: Language::Java,
            keywords: &["public class", "public static void", "system.out.println"],
        },
        KeywordRule {
            category: Language::Cpp,
            keywords: &["#include", "int main", "std::cout"],
        },
    ],
    Language::Unknown,
);

/// Detect the language of a code snippet
pub fn detect_language(code: &str) -> Language {
    let language = LANGUAGES.classify(code);
    tracing::debug!(%language, "detected language");
    language
}

/// Subject area of a study question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    #[serde(rename = "编程")]
    Programming,
    #[serde(rename = "数学")]
    Math,
    #[serde(rename = "物理")]
    Physics,
    #[serde(rename = "化学")]
    Chemistry,
    #[serde(rename = "通用")]
    General,
}

impl Subject {
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Programming => "编程",
            Subject::Math => "数学",
            Subject::Physics => "物理",
            Subject::Chemistry => "化学",
            Subject::General => "通用",
        }
    }

    /// Look up a caller-supplied subject by its exact label. Anything else
    /// is [`Subject::General`].
    pub fn from_hint(hint: &str) -> Self {
        match hint {
            "编程" => Subject::Programming,
            "数学" => Subject::Math,
            "物理" => Subject::Physics,
            "化学" => Subject::Chemistry,
            _ => Subject::General,
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Subject detection table. Programming is checked before math.
pub static SUBJECTS: Classifier<Subject> = Classifier::new(
    &[
        KeywordRule {
            category: Subject::Programming,
            keywords: &["代码", "编程", "function", "class"],
        },
        KeywordRule {
            category: Subject::Math,
            keywords: &["数学", "计算", "公式", "方程"],
        },
        KeywordRule {
            category: Subject::Physics,
            keywords: &["物理", "力学", "电学", "光学"],
        },
        KeywordRule {
            category: Subject::Chemistry,
            keywords: &["化学", "分子", "反应", "元素"],
        },
    ],
    Subject::General,
);

/// Detect the subject area of a question
pub fn detect_subject(question: &str) -> Subject {
    let subject = SUBJECTS.classify(question);
    tracing::debug!(%subject, "detected subject");
    subject
}
