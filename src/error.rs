//! Error types shared across the crate
//!
//! Most failures in the shell are user-facing transcript lines rather than
//! errors. [`FolioError`] covers the few things that can genuinely fail:
//! reading and writing the state file, and selecting a theme that does not
//! exist.

use std::path::PathBuf;

/// Errors produced by the theme store, configuration and CLI layers
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// The state file could not be read or written
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The state file exists but is not a JSON object of strings
    #[error("malformed state file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A theme id that is not in the registry
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    /// Terminal setup or teardown failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FolioError>;
