//! Error type for mesh generation and mesh file I/O.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building, writing or reading a surface mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A size, length or spacing parameter is out of range.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The mesh file could not be created or written.
    #[error("Failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input file is malformed.
    #[error("Parse error in {origin} line {line}: {reason}")]
    FileParse {
        origin: String,
        line: usize,
        reason: String,
    },
}

impl MeshError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create a write error for `path`.
    pub fn file_write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a read error for `path`.
    pub fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a parse error at a 1-based line number.
    pub fn file_parse(origin: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::FileParse {
            origin: origin.into(),
            line,
            reason: reason.into(),
        }
    }
}
