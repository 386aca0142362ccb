use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to acquire an OS resource (file, mapping or memory reservation).
///
/// These are always returned as values; nothing in the platform layer panics
/// on a failed system call.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to query file size: {0}")]
    Metadata(#[source] io::Error),

    #[error("failed to map file: {0}")]
    Map(#[source] io::Error),

    #[error("cannot map an empty file")]
    EmptyFile,

    #[error("zero-sized allocation requested")]
    ZeroSized,

    #[error("failed to allocate {size} bytes: {source}")]
    Allocate {
        size: usize,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PlatformError>;
