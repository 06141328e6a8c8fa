use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// How a file is classified as binary before its content is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Any NUL byte anywhere in the file.
    Simple,
    /// `content_inspector` heuristic over the whole file.
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub ignore_patterns: Vec<String>,
    pub respect_gitignore: bool,
    pub follow_links: bool,
    pub binary_detection: BinaryDetection,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ignore_patterns: Vec::new(),
            respect_gitignore: true,
            follow_links: true,
            binary_detection: BinaryDetection::Simple,
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    options: ScanOptions,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    /// Appends the patterns of one comma-separated `--ignore` value.
    pub fn ignore_list(mut self, value: &str) -> Self {
        self.options
            .ignore_patterns
            .extend(crate::patterns::split_cli_patterns(value));
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
