use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the role profile store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The user home directory could not be resolved for the default store path.
    #[error("unable to get user directories")]
    NoHomeDir,

    /// The store file exists but could not be opened or parsed.
    #[error("failed to read role profile store {}: {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },

    /// The store file could not be rewritten.
    #[error("failed to write role profile store {}: {}", .path.display(), .message)]
    Write { path: PathBuf, message: String },
}
