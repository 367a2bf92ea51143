//! # Docbundle
//!
//! `docbundle` walks a directory tree, picks out text sources and PNG images by
//! extension, and writes a single Markdown document containing a tree of the
//! included paths, a table of contents, and every file's content. Text is
//! inlined in code fences; PNGs are embedded by reference with their
//! dimensions read from the IHDR chunk.
//!
//! Problems with individual files (too large, binary, unreadable) become notes
//! in the document. Only failing to write the document is an error.
//!
//! # Features
//!
//! - `logging` (default): Enables logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use docbundle::{BundleBuilder, generate};
//!
//! let options = BundleBuilder::new(".")
//!     .output("doc/doc.md")
//!     .build();
//!
//! let written = generate(&options).expect("Failed to bundle directory");
//! println!("Documentation written to {}", written.display());
//! ```

mod engine;
mod error;
pub mod fence;
pub mod filter;
mod options;
pub mod output;
pub mod png;
pub mod tree;
mod types;

pub use engine::bundle;
pub use error::BundleError;
pub use options::{BinaryDetection, BundleBuilder, BundleOptions, DEFAULT_FILE_SIZE_LIMIT};
pub use types::{Bundle, Dimensions, FileContent, FileEntry, FileKind};

use std::path::PathBuf;

/// Bundles `options.root` and writes the document, returning its path.
pub fn generate(options: &BundleOptions) -> Result<PathBuf, BundleError> {
    let bundle = bundle(options)?;
    let out = match &options.output {
        Some(path) => std::path::absolute(path).map_err(|e| BundleError::output(path, e))?,
        None => bundle.root.join("doc").join("doc.md"),
    };
    output::write_bundle_to_file(&bundle, &out)?;
    Ok(out)
}
