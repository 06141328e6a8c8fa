//! Internal module for rendering the walk entries as an ASCII tree.

use crate::types::WalkEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

/// Renders pre-ordered entries the way the `tree` command does.
///
/// The first line is the `.` root marker. Children of the root are indented
/// by four spaces; below that a non-last sibling passes `│   ` to its
/// children and a last sibling passes four spaces.
pub fn render_tree(entries: &[WalkEntry]) -> String {
    let last = last_sibling_flags(entries);
    let mut out = String::with_capacity(64 * (entries.len() + 1));
    out.push_str(".\n");

    // prefixes[d] is the indentation used by entries at depth d.
    let mut prefixes: Vec<String> = vec![String::new(), SPACE_INDENT.to_string()];
    for (entry, is_last) in entries.iter().zip(last) {
        let depth = entry.depth.max(1);
        if prefixes.len() <= depth {
            // Depth jumped without a parent line; reuse the deepest known prefix.
            let deepest = prefixes.last().cloned().unwrap_or_default();
            prefixes.resize(depth + 1, deepest);
        }
        prefixes.truncate(depth + 1);
        let prefix = &prefixes[depth];
        let name = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| entry.path.to_string_lossy());

        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(&name);
        out.push('\n');

        let child = format!("{}{}", prefix, if is_last { SPACE_INDENT } else { PIPE_INDENT });
        prefixes.push(child);
    }
    out
}

/// For each entry, whether no later sibling follows it under the same parent.
fn last_sibling_flags(entries: &[WalkEntry]) -> Vec<bool> {
    let mut flags = vec![false; entries.len()];
    // seen[d]: a sibling at depth d has already been passed (walking backwards).
    let mut seen: Vec<bool> = Vec::new();
    for (i, entry) in entries.iter().enumerate().rev() {
        let depth = entry.depth.max(1);
        seen.resize(depth + 1, false);
        flags[i] = !seen[depth];
        seen[depth] = true;
    }
    flags
}
