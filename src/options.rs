use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Text files larger than this are noted instead of embedded.
pub const DEFAULT_FILE_SIZE_LIMIT: u64 = 5_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the first 4096 bytes marks the file as binary.
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleOptions {
    pub root: PathBuf,
    /// Output Markdown file. `None` means `<root>/doc/doc.md`.
    pub output: Option<PathBuf>,
    pub file_size_limit: u64,
    pub binary_detection: BinaryDetection,
    /// Extra glob exclusions on top of the fixed ignored directories.
    pub ignore_patterns: Vec<String>,
    pub follow_links: bool,
    pub respect_gitignore: bool,
}
impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
            binary_detection: BinaryDetection::Simple,
            ignore_patterns: Vec::new(),
            follow_links: false,
            respect_gitignore: false,
        }
    }
}
#[derive(Debug, Default)]
pub struct BundleBuilder {
    options: BundleOptions,
}
impl BundleBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: BundleOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output = Some(path.into());
        self
    }
    pub fn file_size_limit(mut self, limit: u64) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn build(self) -> BundleOptions {
        self.options
    }
}
