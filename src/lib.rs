//! # projprompt
//!
//! `projprompt` walks a project directory, renders an ASCII tree of it and
//! concatenates the contents of its text files into one blob, ready to be
//! pasted into a prompt.
//!
//! Entries are skipped when they match an ignore pattern (the root's
//! `.gitignore`, user patterns and a few built-ins) and files are skipped
//! when they look binary. Unreadable entries are silently left out; the scan
//! never aborts because of a single file.
//!
//! # Features
//!
//! - `logging`: Emits debug logging via the `tracing` crate for every skipped entry.
//!
//! # Example
//!
//! ```no_run
//! use projprompt::{ScanBuilder, output, scan};
//!
//! let options = ScanBuilder::new(".")
//!     .ignore_list("*.md,target")
//!     .build();
//!
//! let result = scan(options).expect("Failed to scan directory");
//! output::write_prompt(&result, &mut std::io::stdout()).expect("Failed to write prompt");
//! ```

mod detect;
mod engine;
mod error;
mod matcher;
mod options;
pub mod output;
pub mod patterns;
mod tree;
mod types;

pub use detect::{is_binary, is_binary_content};
pub use engine::{collect_files, normalize_lines, read_requirements, scan, walk};
pub use error::ProjpromptError;
pub use matcher::{IgnoreMatcher, is_ignored, shell_glob};
pub use options::{BinaryDetection, ScanBuilder, ScanOptions};
pub use patterns::{PatternSet, load_patterns};
pub use tree::render_tree;
pub use types::{FileEntry, ScanResult, WalkEntry};
