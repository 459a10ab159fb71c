//! Error types for `megatron-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message before exiting.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The browse root has no entries to navigate.
    #[error("directory is empty: {0}")]
    EmptyDirectory(PathBuf),

    /// No root directory was given and none is configured.
    #[error("no root directory configured (set general.root_dir in {0})")]
    MissingRootDir(PathBuf),

    /// Failed to parse or serialize a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The walk went deeper than the tree depth limit.
    #[error("maximum tree depth ({limit}) exceeded at {}", path.display())]
    TooDeep { limit: usize, path: PathBuf },

    /// The external player could not be started.
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(err),
        }
    }
}

/// Convenience alias used throughout `megatron-core`.
pub type CoreResult<T> = Result<T, CoreError>;
