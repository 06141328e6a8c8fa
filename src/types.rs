use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Serde adapter for raw file bytes: JSON carries them as lossy UTF-8 text.
mod lossy_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&String::from_utf8_lossy(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer).map(String::into_bytes)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            bytes: &Option<Vec<u8>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match bytes {
                Some(bytes) => serializer.serialize_some(&String::from_utf8_lossy(bytes)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Vec<u8>>, D::Error> {
            Option::<String>::deserialize(deserializer).map(|text| text.map(String::into_bytes))
        }
    }
}

/// One surviving entry of the depth-first walk, in pre-order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkEntry {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Distance from the root; direct children of the root have depth 1.
    pub depth: usize,
    pub is_dir: bool,
}

/// A text file included in the content dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Raw file bytes with every line terminated by `\n`.
    ///
    /// `\r\n` endings are reduced to `\n` and a missing final newline is added.
    /// Nothing else is decoded or rewritten.
    #[serde(with = "lossy_text")]
    pub content: Vec<u8>,
}

/// The complete result of a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Content of the requirements file next to the root, if it exists.
    #[serde(
        default,
        with = "lossy_text::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub requirements: Option<Vec<u8>>,
    /// The `.` marker line followed by one line per entry.
    pub tree: String,
    /// Included files in traversal order.
    pub files: Vec<FileEntry>,
}
