//! Binary file detection.

use crate::options::BinaryDetection;
use std::fs;
use std::path::Path;

/// Classifies an in-memory buffer. The whole buffer is inspected.
pub fn is_binary_content(bytes: &[u8], detection: BinaryDetection) -> bool {
    match detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(bytes).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Reads all of `path` and classifies it. Unreadable files count as text.
pub fn is_binary(path: impl AsRef<Path>, detection: BinaryDetection) -> bool {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => is_binary_content(&bytes, detection),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Cannot read {} for binary detection: {}", path.display(), _e);
            false
        }
    }
}
