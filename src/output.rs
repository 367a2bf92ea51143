//! Markdown rendering of a [`Bundle`].
//!
//! The document has a metadata header, the filesystem tree of included
//! paths, a table of contents, then one section per file. Sections are
//! anchored as `file-<n>` by their 1-based position in the bundle.

use crate::fence::fenced_block;
use crate::filter::{IGNORE_DIRS, extension_of};
use crate::tree::render_tree;
use crate::types::{Bundle, FileContent, FileEntry};
use crate::BundleError;
use std::fs;
use std::path::{Component, Path};

/// Renders the whole document. Image links are relative to `doc_dir`, the
/// directory the document will be written to.
pub fn format_markdown(bundle: &Bundle, doc_dir: &Path) -> String {
    let mut out = String::with_capacity(4096);

    out.push_str("# Documentation Bundle\n\n");
    out.push_str(&format!("- **Root:** `{}`\n", bundle.root.display()));
    out.push_str(&format!("- **Generated:** `{}`\n", bundle.generated));
    out.push_str(&format!("- **Included files:** `{}`\n", bundle.files.len()));
    out.push_str(&format!(
        "- **Max text file bytes:** `{}`\n",
        bundle.file_size_limit
    ));
    out.push_str(&format!("- **Ignored dirs:** `{}`\n\n", IGNORE_DIRS.join(", ")));

    let relatives: Vec<&str> = bundle.files.iter().map(|f| f.relative.as_str()).collect();
    out.push_str("## Filesystem Tree (included paths)\n\n");
    out.push_str(&fenced_block(&render_tree(&root_title(&bundle.root), &relatives), "text"));
    out.push('\n');

    out.push_str("## Table of Contents\n\n");
    for (i, relative) in relatives.iter().enumerate() {
        let n = i + 1;
        out.push_str(&format!("{}. [`{}`](#file-{})\n", n, relative, n));
    }
    out.push('\n');

    out.push_str("## File Contents\n\n");
    for (i, file) in bundle.files.iter().enumerate() {
        format_file_section(&mut out, i + 1, file, doc_dir);
    }
    out
}

fn format_file_section(out: &mut String, n: usize, file: &FileEntry, doc_dir: &Path) {
    out.push_str(&format!("<a id=\"file-{}\"></a>\n", n));
    out.push_str(&format!("### [{}] `{}`\n\n", n, file.relative));
    match file.size {
        Some(size) => out.push_str(&format!("- **Bytes:** `{}`\n", size)),
        None => out.push_str("- **Bytes:** `unknown`\n"),
    }

    match &file.content {
        FileContent::Image { dimensions } => {
            out.push_str("- **Type:** `png`\n");
            out.push_str(&format!("- **Dimensions:** `{}`\n", dimensions));
            let from_doc = relative_path(doc_dir, &file.path);
            out.push_str(&format!("- **Path (from doc):** `{}`\n\n", from_doc));
            out.push_str(&format!("![{}]({})\n\n", file.relative, from_doc));
        }
        FileContent::Text { content, note } => {
            out.push_str("- **Type:** `text`\n");
            if let Some(note) = note {
                out.push_str(&format!("- **NOTE:** {}\n", note));
            }
            out.push('\n');
            if content.is_empty() {
                out.push_str("_No content (skipped or empty)._ \n\n");
            } else {
                let lang = language_from_extension(&extension_of(&file.path));
                out.push_str(&fenced_block(content, lang));
                out.push('\n');
            }
        }
    }
}

/// Writes the rendered document to `path`, creating parent directories.
pub fn write_bundle_to_file(bundle: &Bundle, path: impl AsRef<Path>) -> Result<(), BundleError> {
    let path = path.as_ref();
    let doc_dir = path.parent().unwrap_or(Path::new(""));
    fs::create_dir_all(doc_dir).map_err(|e| BundleError::output(doc_dir, e))?;
    let doc_dir = dunce::canonicalize(doc_dir).unwrap_or_else(|_| doc_dir.to_path_buf());
    let content = format_markdown(bundle, &doc_dir);
    fs::write(path, content).map_err(|e| BundleError::output(path, e))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {} files to {}", bundle.files.len(), path.display());
    Ok(())
}

fn root_title(root: &Path) -> String {
    match root.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => to_slash(root),
    }
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// `to` relative to the directory `from`, `/`-separated, with `..` for each
/// level climbed. Falls back to `to` itself when the two share no prefix
/// (e.g. different drives).
fn relative_path(from: &Path, to: &Path) -> String {
    let from: Vec<Component> = from.components().filter(|c| *c != Component::CurDir).collect();
    let to_parts: Vec<Component> = to.components().filter(|c| *c != Component::CurDir).collect();
    if from.first() != to_parts.first() {
        return to_slash(to);
    }
    let common = from
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();
    let mut parts: Vec<String> = vec!["..".to_string(); from.len() - common];
    parts.extend(
        to_parts[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );
    if parts.is_empty() {
        ".".to_string()
    } else {
        parts.join("/")
    }
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "py" => "python", "js" => "javascript", "ts" => "typescript", "json" => "json",
        "html" => "html", "css" => "css", "ps1" => "powershell", "cmd" => "bat",
        "cpp" | "hpp" => "cpp", "php" => "php", "md" => "markdown",
        _ => "text",
    }
}
