//! Source file discovery for directory reviews
//!
//! Walks a directory with the `ignore` crate, so `.gitignore`, `.ignore` and
//! `.git/info/exclude` apply, and keeps the files whose extension maps to a
//! reviewable [`Language`].

use crate::category::Language;
use anyhow::Result;
use ignore::overrides::{Override, OverrideBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Reviewable source files under `root`, skipping `ignore_patterns`
/// (gitignore syntax; a trailing `/` ignores the whole directory).
///
/// Returns absolute paths sorted alphabetically.
pub fn discover_sources(root: &Path, ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let root = root.canonicalize()?;

    let mut builder = WalkBuilder::new(&root);
    builder.hidden(true).git_ignore(true).git_exclude(true);
    if let Some(overrides) = excludes(&root, ignore_patterns)? {
        builder.overrides(overrides);
    }

    let mut files: Vec<PathBuf> = builder
        .build()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(|e| e.into_path())
        .filter(|path| Language::from_path(path).is_some())
        .map(|path| if path.is_absolute() { path } else { root.join(path) })
        .collect();

    files.sort();
    tracing::debug!(root = %root.display(), files = files.len(), "discovered sources");
    Ok(files)
}

/// Override set where every pattern is negated, i.e. excluded
fn excludes(root: &Path, patterns: &[String]) -> Result<Option<Override>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut overrides = OverrideBuilder::new(root);
    for pattern in patterns {
        if pattern.ends_with('/') {
            overrides.add(&format!("!{}**", pattern))?;
        } else {
            overrides.add(&format!("!{}", pattern))?;
        }
    }
    Ok(Some(overrides.build()?))
}
