use crate::patterns::PatternSet;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Compiled form of a [`PatternSet`].
///
/// `*` and `?` never match `/`, so `test/*` only matches direct children of
/// `test` while `*.txt` matches any file name through the base-name check.
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
}

impl IgnoreMatcher {
    /// Compiles every pattern. Malformed patterns are dropped, so they never match.
    pub fn new(patterns: &PatternSet) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns.iter() {
            match GlobBuilder::new(&shell_glob(pattern))
                .literal_separator(true)
                .build()
            {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Invalid glob pattern '{}': {}", pattern, _e);
                }
            }
        }
        let set = builder.build().unwrap_or_else(|_e| {
            #[cfg(feature = "logging")]
            tracing::warn!("Failed to build glob set: {}", _e);
            GlobSet::empty()
        });
        Self { set }
    }

    /// True when any pattern matches the base name of `path` or `path` itself.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if let Some(name) = path.file_name() {
            if self.set.is_match(name) {
                return true;
            }
        }
        self.set.is_match(path)
    }
}

/// Rewrites a shell glob so `globset` reads it without its extensions.
///
/// Braces become literal classes and runs of `*` collapse to one `*`, so
/// `{a,b}` alternation and `**` never take effect. Class contents and
/// backslash escapes are copied untouched.
pub fn shell_glob(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut chars = pattern.chars();
    let mut in_class = false;
    let mut prev_star = false;
    while let Some(c) = chars.next() {
        let star = c == '*' && !in_class;
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ if in_class => {
                if c == ']' {
                    in_class = false;
                }
                out.push(c);
            }
            '[' => {
                in_class = true;
                out.push(c);
            }
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '*' if prev_star => {}
            _ => out.push(c),
        }
        prev_star = star;
    }
    out
}

/// One-off check of `path` against `patterns`.
pub fn is_ignored(path: impl AsRef<Path>, patterns: &PatternSet) -> bool {
    IgnoreMatcher::new(patterns).is_ignored(path)
}
