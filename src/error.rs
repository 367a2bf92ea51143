//! Fatal failures. Anything that goes wrong with a single bundled file is
//! reported inside the document instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("cannot open scan root {path}: {source}")]
    Root {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("scan root {0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("invalid ignore pattern: {0}")]
    Pattern(#[from] globset::Error),
    /// The output directory or file could not be created or written.
    #[error("cannot write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot locate the running executable: {0}")]
    CurrentExe(#[source] io::Error),
}

impl BundleError {
    pub(crate) fn root(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BundleError::Root {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BundleError::Output {
            path: path.into(),
            source,
        }
    }
}
