//! Tracing subscriber setup
//!
//! The TUI owns stdout, so logs only ever go to a file. `RUST_LOG` overrides
//! the default filter.

use crate::error::{FolioError, Result};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "termfolio=info";

/// Install the global subscriber writing to `log_file_path`
pub fn init_global(log_file_path: &Path) -> Result<()> {
    if let Some(parent) = log_file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| FolioError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    let log_file = File::create(log_file_path).map_err(|source| FolioError::Io {
        path: log_file_path.to_path_buf(),
        source,
    })?;

    build_subscriber(log_file).init();
    tracing::info!(path = %log_file_path.display(), "logging initialised");
    Ok(())
}

/// Subscriber shared by the binary and tests
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_reach_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.log");
        let file = File::create(&path).unwrap();

        tracing::subscriber::with_default(build_subscriber(file), || {
            tracing::warn!(target: "termfolio", "hello from the test");
        });

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("hello from the test"));
    }
}
