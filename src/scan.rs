//! Project scanner — finds the scripts to document.

use crate::config::DocConfig;
use crate::paths::{has_extension, to_link};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A compiled ignore pattern.
enum IgnoreRule {
    /// Plain text anywhere in the project-relative path.
    Substring(String),
    /// Glob matched against the whole project-relative path.
    Glob(glob::Pattern),
}

impl IgnoreRule {
    fn parse(pattern: &str) -> Result<Self> {
        if pattern.contains(['*', '?', '[']) {
            let glob = glob::Pattern::new(pattern)
                .with_context(|| format!("invalid ignore pattern: {}", pattern))?;
            Ok(IgnoreRule::Glob(glob))
        } else {
            Ok(IgnoreRule::Substring(pattern.to_string()))
        }
    }

    fn matches(&self, relative: &str) -> bool {
        match self {
            IgnoreRule::Substring(text) => relative.contains(text.as_str()),
            IgnoreRule::Glob(glob) => glob.matches(relative),
        }
    }
}

/// Collect every script under `root`, sorted by path, skipping ignored ones.
pub fn scan(root: &Path, config: &DocConfig) -> Result<Vec<PathBuf>> {
    let rules = config
        .ignores
        .iter()
        .map(|p| IgnoreRule::parse(p))
        .collect::<Result<Vec<_>>>()?;

    let mut scripts = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("failed to scan directory: {}", root.display()))?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), &config.source_extension) {
            continue;
        }
        let relative = to_link(entry.path().strip_prefix(root).unwrap_or(entry.path()));
        if rules.iter().any(|rule| rule.matches(&relative)) {
            tracing::debug!(path = %relative, "ignored");
            continue;
        }
        scripts.push(entry.into_path());
    }
    Ok(scripts)
}
