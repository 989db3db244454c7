//! @acp:module "Errors"
//! @acp:summary "Crate-wide error taxonomy for save, rename, ingest and packaging failures"
//! @acp:domain cli
//! @acp:layer api
//!
//! No variant here is fatal to the process: filesystem and parse errors abort
//! only the operation that raised them, and asset-processing errors abort only
//! the file they concern. The binary decides exit codes; the library reports.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, ModError>;

/// @acp:summary "All errors surfaced by the mod engine"
#[derive(Debug, Error)]
pub enum ModError {
    /// Create/move/copy failure. Aborts the current save or rename; prior
    /// on-disk state is left intact.
    #[error("filesystem {op} failed for {}: {source}", .path.display())]
    Filesystem {
        /// Operation that failed ("create", "move", "copy", "write", ...)
        op: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decode or resample failure for a single asset file. Skips that file
    /// only; the rest of the save proceeds.
    #[error("failed to process asset {}: {reason}", .path.display())]
    AssetProcessing {
        /// Source file that could not be processed
        path: PathBuf,
        /// Underlying decoder/encoder message
        reason: String,
    },

    /// Non-numeric value in an integer field. Rejects the save wholesale
    /// before anything touches disk.
    #[error("field '{field}' expects a number, got '{value}'")]
    Parse {
        /// Dotted field path that failed to parse
        field: String,
        /// Raw text the user entered
        value: String,
    },

    /// Load requested but the project has no manifest yet. Callers treat
    /// this as "start from field defaults".
    #[error("no manifest found at {}", .0.display())]
    MissingManifest(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("{0}")]
    Other(String),
}

impl ModError {
    /// Wrap an io::Error with the operation and path that produced it
    pub fn fs(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            op,
            path: path.into(),
            source,
        }
    }
}
