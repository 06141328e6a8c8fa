//! Ignore pattern sources.
//!
//! Patterns are flat shell globs collected from three places, in this order:
//! the `--ignore` values, the root's `.gitignore`, and [`BUILTIN_PATTERNS`].
//! No gitignore negation, anchoring or directory-only rules are interpreted.

use crate::error::ProjpromptError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Name of the ignore file read from the scan root.
pub const IGNORE_FILE: &str = ".gitignore";

/// File printed ahead of the tree when it sits next to the scan root.
pub const REQUIREMENTS_FILE: &str = "project-requirements.md";

/// Patterns that are always part of a [`PatternSet`].
pub const BUILTIN_PATTERNS: [&str; 3] = [".git/*", IGNORE_FILE, REQUIREMENTS_FILE];

/// An ordered, de-duplicated list of glob patterns.
///
/// Built once per scan and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Builds a set from raw patterns, keeping the first occurrence of each.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: dedup_patterns(patterns.into_iter().map(Into::into).collect()),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.iter().any(|p| p == pattern)
    }
}

/// Splits a comma-separated `--ignore` value. An empty value yields nothing.
pub fn split_cli_patterns(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(',').map(str::to_string).collect()
}

/// Extracts patterns from ignore-file text, skipping blank and `#` lines.
pub fn parse_ignore_file(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads and parses `<dir>/.gitignore`.
pub fn read_ignore_file(dir: &Path) -> Result<Vec<String>, ProjpromptError> {
    let path = dir.join(IGNORE_FILE);
    let bytes = fs::read(&path).map_err(|e| ProjpromptError::io(&path, e))?;
    Ok(parse_ignore_file(&String::from_utf8_lossy(&bytes)))
}

/// Removes repeated patterns, keeping first-seen order.
pub fn dedup_patterns(patterns: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(patterns.len());
    patterns
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Builds the pattern set for a scan of `dir`.
///
/// A missing or unreadable ignore file contributes no patterns.
pub fn load_patterns(dir: &Path, cli_patterns: &[String], respect_gitignore: bool) -> PatternSet {
    let from_file = if respect_gitignore {
        read_ignore_file(dir).unwrap_or_else(|_e| {
            #[cfg(feature = "logging")]
            tracing::debug!("No ignore patterns loaded: {}", _e);
            Vec::new()
        })
    } else {
        Vec::new()
    };
    let all = cli_patterns
        .iter()
        .cloned()
        .chain(from_file)
        .chain(BUILTIN_PATTERNS.iter().map(|p| p.to_string()));
    let set = PatternSet::new(all);
    #[cfg(feature = "logging")]
    tracing::debug!("Loaded {} ignore patterns", set.len());
    set
}
