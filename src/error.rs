//! Error types for newmm-rs

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or loading a dictionary.
///
/// Segmentation itself never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// Dictionary source could not be opened or read
    #[error("cannot read dictionary '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Allocation failed while growing the trie
    #[error("out of memory while building dictionary: {0}")]
    Capacity(#[from] TryReserveError),
}

impl Error {
    /// Create an I/O error for a dictionary source
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error means the source was unreadable (as opposed to fatal)
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io { .. })
    }
}
