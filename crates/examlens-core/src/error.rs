//! Document loading error types.
//!
//! Extraction and scoring have no error channel; only getting a document
//! tree into memory can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a parsed document tree.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("failed to read document {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid JSON element tree.
    #[error("failed to parse document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DocumentError {
    /// Path of the document that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            DocumentError::Read { path, .. } | DocumentError::Parse { path, .. } => path,
        }
    }
}
