use crate::detect::is_binary_content;
use crate::error::ProjpromptError;
use crate::matcher::IgnoreMatcher;
use crate::options::{BinaryDetection, ScanOptions};
use crate::patterns::{REQUIREMENTS_FILE, load_patterns};
use crate::tree::render_tree;
use crate::types::{FileEntry, ScanResult, WalkEntry};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}
impl Walker {
    fn new(root: &Path, matcher: IgnoreMatcher, follow_links: bool) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let filter_root = root.to_path_buf();
        builder.filter_entry(move |entry| match entry.path().strip_prefix(&filter_root) {
            Ok(rel) if rel.as_os_str().is_empty() => true,
            Ok(rel) => !matcher.is_ignored(rel),
            Err(_) => true,
        });
        Self {
            inner: builder.build(),
            root: root.to_path_buf(),
        }
    }
    fn collect_entries(self) -> Vec<WalkEntry> {
        let root = self.root;
        self.inner
            .filter_map(|result| match result {
                Ok(entry) => walk_entry(&root, &entry),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping unreadable entry: {}", _e);
                    None
                }
            })
            .collect()
    }
}
/// Converts a walked entry, dropping the root itself and entries that cannot be stat'ed.
fn walk_entry(root: &Path, entry: &ignore::DirEntry) -> Option<WalkEntry> {
    if entry.depth() == 0 {
        return None;
    }
    let is_dir = if entry.path_is_symlink() {
        match fs::metadata(entry.path()) {
            Ok(meta) => meta.is_dir(),
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Cannot stat {}: {}", entry.path().display(), _e);
                return None;
            }
        }
    } else {
        entry.file_type()?.is_dir()
    };
    let path = entry
        .path()
        .strip_prefix(root)
        .unwrap_or(entry.path())
        .to_path_buf();
    Some(WalkEntry {
        path,
        depth: entry.depth(),
        is_dir,
    })
}
/// Walks `root` depth-first in file-name order, pruning ignored entries and their descendants.
pub fn walk(root: impl AsRef<Path>, matcher: &IgnoreMatcher, follow_links: bool) -> Vec<WalkEntry> {
    Walker::new(root.as_ref(), matcher.clone(), follow_links).collect_entries()
}
fn read_file(path: &Path) -> Result<Vec<u8>, ProjpromptError> {
    fs::read(path).map_err(|e| ProjpromptError::io(path, e))
}
/// Re-terminates every line with `\n`, dropping a trailing `\r` from each line.
///
/// Works on raw bytes so text in any encoding passes through unchanged.
pub fn normalize_lines(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + 1);
    if bytes.is_empty() {
        return out;
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    for line in body.split(|&b| b == b'\n') {
        out.extend_from_slice(line.strip_suffix(b"\r").unwrap_or(line));
        out.push(b'\n');
    }
    out
}
/// Reads the requirements file that sits next to `root`.
pub fn read_requirements(root: &Path) -> Option<Vec<u8>> {
    let path = root.join("..").join(REQUIREMENTS_FILE);
    match read_file(&path) {
        Ok(bytes) => Some(bytes),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("No requirements file: {}", _e);
            None
        }
    }
}
/// Loads the text files among `entries`, skipping directories, binaries and unreadable files.
pub fn collect_files(
    root: &Path,
    entries: &[WalkEntry],
    binary_detection: BinaryDetection,
) -> Vec<FileEntry> {
    let mut files = Vec::new();
    for entry in entries.iter().filter(|e| !e.is_dir) {
        let bytes = match read_file(&root.join(&entry.path)) {
            Ok(bytes) => bytes,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping {}", _e);
                continue;
            }
        };
        if is_binary_content(&bytes, binary_detection) {
            #[cfg(feature = "logging")]
            tracing::debug!("Binary file detected: {}", entry.path.display());
            continue;
        }
        files.push(FileEntry {
            path: entry.path.clone(),
            content: normalize_lines(&bytes),
        });
    }
    files
}
pub fn scan(options: ScanOptions) -> Result<ScanResult, ProjpromptError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let root = options.root.as_path();
    let metadata = fs::metadata(root).map_err(|e| ProjpromptError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ProjpromptError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    let patterns = load_patterns(root, &options.ignore_patterns, options.respect_gitignore);
    let matcher = IgnoreMatcher::new(&patterns);
    let requirements = read_requirements(root);
    let entries = walk(root, &matcher, options.follow_links);
    let tree = render_tree(&entries);
    let files = collect_files(root, &entries, options.binary_detection);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Scanned {} entries, {} text files",
        entries.len(),
        files.len()
    );
    Ok(ScanResult {
        requirements,
        tree,
        files,
    })
}
