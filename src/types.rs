use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How an included file is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Text,
    Image,
}

/// Image dimensions as read from the PNG header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimensions {
    Known { width: u32, height: u32 },
    /// The file has zero bytes.
    Empty,
    Unknown,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimensions::Known { width, height } => write!(f, "{}×{}", width, height),
            Dimensions::Empty => f.write_str("unknown (empty file)"),
            Dimensions::Unknown => f.write_str("unknown"),
        }
    }
}

/// What was obtained for a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FileContent {
    Text {
        /// Decoded file content; empty when the file was skipped.
        content: String,
        /// Why the content was not embedded, if it was not.
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Image { dimensions: Dimensions },
}

/// A single included file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub relative: String,
    /// Size in bytes, `None` if the file could not be stat'ed.
    pub size: Option<u64>,
    pub content: FileContent,
}

impl FileEntry {
    pub fn kind(&self) -> FileKind {
        match self.content {
            FileContent::Text { .. } => FileKind::Text,
            FileContent::Image { .. } => FileKind::Image,
        }
    }
}

/// Everything needed to render the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    pub root: PathBuf,
    /// Local timestamp, `YYYY-MM-DDTHH:MM:SS`.
    pub generated: String,
    pub file_size_limit: u64,
    /// Files in document order, case-insensitively sorted by relative path.
    pub files: Vec<FileEntry>,
}
