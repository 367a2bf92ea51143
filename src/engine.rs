use crate::error::BundleError;
use crate::filter::{classify, is_ignored_dir};
use crate::options::{BinaryDetection, BundleOptions};
use crate::png::describe_dimensions;
use crate::types::{Bundle, FileContent, FileEntry, FileKind};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Component, Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

const SNIFF_LEN: u64 = 4096;

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .git_ignore(options.respect_gitignore)
            .require_git(false)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let matcher = exclusion_set(&options.ignore_patterns)?;
        let root = options.root.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir && is_ignored_dir(&entry.file_name().to_string_lossy()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruning ignored directory {}", entry.path().display());
                return false;
            }
            match &matcher {
                Some(matcher) => {
                    let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
                    !matcher.is_match(relative)
                }
                None => true,
            }
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    /// Included files with their kind. Unreadable entries are skipped.
    fn collect_files(self) -> Vec<(PathBuf, FileKind)> {
        self.inner
            .filter_map(|result| match result {
                Ok(entry) => Some(entry.into_path()),
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Skipping unreadable entry: {}", _e);
                    None
                }
            })
            .filter(|path| path.is_file())
            .filter_map(|path| classify(&path).map(|kind| (path, kind)))
            .collect()
    }
}

/// Compiles the caller's extra exclusions; `None` when there are none.
fn exclusion_set(patterns: &[String]) -> Result<Option<GlobSet>, BundleError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut set = GlobSetBuilder::new();
    for pattern in patterns {
        set.add(Glob::new(pattern)?);
    }
    Ok(Some(set.build()?))
}

/// `path` relative to `root`, joined with `/`.
pub(crate) fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Collapses `\r\n` and lone `\r` into `\n`.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Reads a text file, returning `(content, note)`. Never fails: problems are
/// reported through the note.
pub(crate) fn read_text_content(
    path: &Path,
    size: Option<u64>,
    binary_detection: BinaryDetection,
    size_limit: u64,
) -> (String, Option<String>) {
    match try_read_text(path, size, binary_detection, size_limit) {
        Ok(result) => result,
        Err(e) => (String::new(), Some(format!("Error reading: {}", e))),
    }
}

fn try_read_text(
    path: &Path,
    size: Option<u64>,
    binary_detection: BinaryDetection,
    size_limit: u64,
) -> std::io::Result<(String, Option<String>)> {
    let size = match size {
        Some(size) => size,
        None => fs::metadata(path)?.len(),
    };
    if size > size_limit {
        #[cfg(feature = "logging")]
        tracing::debug!(
            "File too large ({} > {}), skipping content",
            size,
            size_limit
        );
        return Ok((
            String::new(),
            Some(format!(
                "Skipped (too large): {} bytes > {}",
                size, size_limit
            )),
        ));
    }
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    reader.by_ref().take(SNIFF_LEN).read_to_end(&mut bytes)?;
    let is_binary = match binary_detection {
        BinaryDetection::Simple => bytes.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(&bytes).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return Ok((String::new(), Some("Skipped (binary detected)".to_string())));
    }
    reader.read_to_end(&mut bytes)?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    Ok((normalize_newlines(content), None))
}

fn process_file(
    path: PathBuf,
    relative: String,
    kind: FileKind,
    options: &BundleOptions,
) -> FileEntry {
    let metadata = fs::metadata(&path);
    let size = metadata.as_ref().ok().map(|m| m.len());
    let content = match kind {
        FileKind::Image => FileContent::Image {
            dimensions: describe_dimensions(&path, size),
        },
        FileKind::Text => {
            let (content, note) = match metadata {
                Err(e) => (String::new(), Some(format!("Error reading: {}", e))),
                Ok(_) => read_text_content(
                    &path,
                    size,
                    options.binary_detection,
                    options.file_size_limit,
                ),
            };
            #[cfg(feature = "logging")]
            if let Some(note) = &note {
                tracing::info!("{}: {}", relative, note);
            }
            FileContent::Text { content, note }
        }
    };
    FileEntry {
        path,
        relative,
        size,
        content,
    }
}

/// Walks `options.root` and reads every included file, in document order.
pub fn bundle(options: &BundleOptions) -> Result<Bundle, BundleError> {
    let root =
        dunce::canonicalize(&options.root).map_err(|e| BundleError::root(&options.root, e))?;
    if !root.is_dir() {
        return Err(BundleError::NotADirectory(root));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting bundle with root: {}", root.display());
    let walker = Walker::new(&BundleOptions {
        root: root.clone(),
        ..options.clone()
    })?;
    let mut found: Vec<(String, PathBuf, FileKind)> = walker
        .collect_files()
        .into_iter()
        .map(|(path, kind)| (relative_slash_path(&root, &path), path, kind))
        .collect();
    found.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()).then_with(|| a.0.cmp(&b.0)));

    let files = found
        .into_iter()
        .map(|(relative, path, kind)| process_file(path, relative, kind, options))
        .collect();
    Ok(Bundle {
        root,
        generated: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        file_size_limit: options.file_size_limit,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn vanished_file_gets_error_note() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.py");
        let entry = process_file(
            path,
            "gone.py".to_string(),
            FileKind::Text,
            &BundleOptions::default(),
        );
        assert_eq!(entry.size, None);
        match entry.content {
            FileContent::Text { content, note } => {
                assert!(content.is_empty());
                assert!(note.unwrap().starts_with("Error reading: "));
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }

    #[test]
    fn unreadable_text_gets_error_note() {
        let dir = tempdir().unwrap();
        let (content, note) =
            read_text_content(dir.path(), Some(0), BinaryDetection::Simple, 100);
        assert!(content.is_empty());
        assert!(note.unwrap().starts_with("Error reading: "));
    }

    #[test]
    fn exclusion_set_rejects_bad_glob() {
        assert!(exclusion_set(&[]).unwrap().is_none());
        assert!(matches!(
            exclusion_set(&["a[".to_string()]),
            Err(BundleError::Pattern(_))
        ));
    }
}
