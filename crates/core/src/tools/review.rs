//! Code review tool: language detection and rule analysis, then scoring

use crate::analyzer::{complexity, performance, practices, RuleSet};
use crate::category::{detect_language, Language};
use crate::config::MentorConfig;
use crate::error::MentorError;
use crate::estimate::{overall_score, CodeStats};
use crate::report::{aggregate, AnalysisResult};
use crate::schema::ReviewRequest;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Outcome of reviewing one file
#[derive(Debug)]
pub struct FileReview {
    pub path: PathBuf,
    pub result: Result<AnalysisResult, MentorError>,
}

/// Reviews code against a fixed [`RuleSet`]
pub struct ReviewTool {
    rules: RuleSet,
}

impl ReviewTool {
    /// Reviewer with all built-in rules
    pub fn new() -> Self {
        Self::with_rules(RuleSet::new())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn from_config(config: &MentorConfig) -> Self {
        Self::with_rules(RuleSet::from_config(config))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Review a validated request. A non-empty `language` hint wins over
    /// detection; names outside the known set review as `unknown`.
    pub fn review(&self, request: &ReviewRequest) -> AnalysisResult {
        let hint = request
            .language
            .as_deref()
            .filter(|l| !l.is_empty())
            .map(Language::from_hint);
        self.review_source(&request.code, hint, None)
    }

    /// Review raw source. `file_name` scopes path-restricted custom rules.
    pub fn review_source(
        &self,
        code: &str,
        language: Option<Language>,
        file_name: Option<&str>,
    ) -> AnalysisResult {
        let language = language.unwrap_or_else(|| detect_language(code));
        let stats = CodeStats::measure(code);

        aggregate(
            language,
            overall_score(&stats),
            self.rules.analyze_named(code, language, file_name),
            practices::improvements(language),
            practices::best_practices(language),
            complexity::measure(code),
            performance::measure(code),
        )
    }

    /// Review a file. `language` wins over the file extension, which wins
    /// over content detection.
    pub fn review_file(
        &self,
        path: &Path,
        language: Option<Language>,
    ) -> Result<AnalysisResult, MentorError> {
        let code = std::fs::read_to_string(path)?;
        let file_name = path.file_name().and_then(|n| n.to_str());
        let language = language.or_else(|| Language::from_path(path));
        Ok(self.review_source(&code, language, file_name))
    }

    /// Review files in parallel, each as an independent request. Results
    /// keep the input order.
    pub fn review_files(&self, files: &[PathBuf], language: Option<Language>) -> Vec<FileReview> {
        files
            .par_iter()
            .map(|path| FileReview {
                path: path.clone(),
                result: self.review_file(path, language),
            })
            .collect()
    }
}

impl Default for ReviewTool {
    fn default() -> Self {
        Self::new()
    }
}
