use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ProjpromptError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
impl ProjpromptError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProjpromptError::Io {
            path: path.into(),
            source,
        }
    }
}
