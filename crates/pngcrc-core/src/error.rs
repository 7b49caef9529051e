//! Error types for checksum generation and sidecar parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning an image into a sidecar file.
///
/// `NotFound` is reported separately from `Read` so the CLI can name the
/// missing path before prompting about the extension.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input path does not exist.
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    /// The input exists but could not be opened or read (permissions, a directory, ...).
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The sidecar could not be created or written (permissions, disk full, path is a directory).
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Sidecar content that is not a CRC32 hex value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CRC32 value {input:?}: {reason}")]
pub struct ParseCrc32Error {
    pub input: String,
    pub reason: &'static str,
}

impl ParseCrc32Error {
    pub(crate) fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
