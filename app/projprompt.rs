//! Command-line interface for projprompt.
//!
//! Prints the requirements file (when one sits next to the project), the
//! directory tree and the content of every text file to standard output.

use clap::{Parser, ValueEnum};
use projprompt::{BinaryDetection, ScanBuilder, ScanOptions, output, scan};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;

/// projprompt: turn a project directory into a single prompt
#[derive(Parser)]
#[command(
    name = "projprompt",
    version,
    about,
    long_about = "Prints a tree view of a project directory followed by the content of its \
non-binary files. Entries matching .gitignore or --ignore patterns are left out. If a file \
named project-requirements.md exists next to the project directory, it is printed first.",
    after_help = "Examples:\n    projprompt\n    projprompt --ignore '*.md,*.log'"
)]
struct Cli {
    /// Project directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Comma-separated extra ignore patterns (can be repeated)
    #[arg(long = "ignore", value_name = "PATTERN1,PATTERN2,...")]
    ignore: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Prompt)]
    format: OutputFormat,

    /// Binary detection strategy
    #[arg(long, default_value = "simple", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Do not read patterns from .gitignore
    #[arg(long)]
    no_gitignore: bool,

    /// Do not descend into symlinked directories
    #[arg(long)]
    no_follow_links: bool,

    /// Log skipped entries to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Prompt,
    Json,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Prompt => output::OutputFormat::Prompt,
            OutputFormat::Json => output::OutputFormat::Json,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_options(self) -> (ScanOptions, OutputFormat, bool) {
        let builder = self.ignore.iter().fold(
            ScanBuilder::new(self.root)
                .respect_gitignore(!self.no_gitignore)
                .follow_links(!self.no_follow_links)
                .binary_detection(self.binary_detection),
            |builder, value| builder.ignore_list(value),
        );
        (builder.build(), self.format, self.verbose)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, format, _verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(_verbose);

    let result = match scan(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let stdout = io::stdout();
    let mut handle = BufWriter::new(stdout.lock());
    let written = output::write_result(&result, format.into(), &mut handle)
        .and_then(|()| handle.flush().map_err(projprompt::ProjpromptError::Output));
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
