//! Fixed allow-lists deciding which paths end up in the bundle.

use crate::types::FileKind;
use std::path::Path;

/// Lowercased extensions (without the dot) embedded as text.
pub const TEXT_EXTENSIONS: &[&str] = &[
    "css", "cmd", "js", "php", "hpp", "cpp", "md", "py", "txt", "ps1", "json", "html", "h",
];

pub const IMAGE_EXTENSIONS: &[&str] = &["png"];

/// Extensionless files that are still worth bundling.
pub const SPECIAL_FILENAMES: &[&str] = &[".env", ".gitignore"];

/// Directory names whose subtrees are never visited. Kept in sorted order,
/// which is also the order they are listed in the document header.
/// `doc` is the default output directory.
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".idea",
    ".svn",
    ".venv",
    ".vscode",
    "__pycache__",
    "build",
    "dist",
    "doc",
    "node_modules",
    "vendor",
    "venv",
];

pub fn is_ignored_dir(name: &str) -> bool {
    IGNORE_DIRS.contains(&name)
}

/// Lowercased extension, or an empty string for dotfiles and extensionless names.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Returns how a file would be bundled, or `None` when it is not included.
pub fn classify(path: &Path) -> Option<FileKind> {
    let name = path.file_name()?.to_string_lossy();
    if SPECIAL_FILENAMES.contains(&name.as_ref()) {
        return Some(FileKind::Text);
    }
    let ext = extension_of(path);
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Image)
    } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
        Some(FileKind::Text)
    } else {
        None
    }
}
