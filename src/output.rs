//! Output formatting for scan results.
//!
//! The prompt format is the tool's primary output: an optional requirements
//! section, the directory tree, then every included file between fences.
//! JSON is offered for programmatic consumers.

use crate::{ProjpromptError, ScanResult};
use std::io::{self, Write};

/// Heading printed above the requirements file content.
pub const REQUIREMENTS_HEADING: &str = "# Project requirements";

const FENCE: &str = "```";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Prompt,
    Json,
}

/// Writes the prompt text for `result` to `out`.
pub fn write_prompt<W: Write>(result: &ScanResult, out: &mut W) -> io::Result<()> {
    if let Some(requirements) = &result.requirements {
        writeln!(out, "{}", REQUIREMENTS_HEADING)?;
        out.write_all(requirements)?;
        if !requirements.is_empty() && !requirements.ends_with(b"\n") {
            out.write_all(b"\n")?;
        }
    }
    out.write_all(result.tree.as_bytes())?;
    for file in &result.files {
        writeln!(out, "\n\n>>>> {} <<<<", file.path.display())?;
        writeln!(out, "{}", FENCE)?;
        out.write_all(&file.content)?;
        writeln!(out, "{}", FENCE)?;
    }
    Ok(())
}

/// Formats the prompt text into a byte buffer. File bytes are copied verbatim.
pub fn format_prompt(result: &ScanResult) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(1024);
    write_prompt(result, &mut buf)?;
    Ok(buf)
}

pub fn format_json(result: &ScanResult, pretty: bool) -> Result<String, ProjpromptError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Formats and writes `result` in the chosen format.
pub fn write_result<W: Write>(
    result: &ScanResult,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ProjpromptError> {
    match format {
        OutputFormat::Prompt => write_prompt(result, out).map_err(ProjpromptError::Output),
        OutputFormat::Json => {
            let json = format_json(result, true)?;
            writeln!(out, "{}", json).map_err(ProjpromptError::Output)
        }
    }
}
