//! Context storage: one JSON array of strings per file in a flat directory.
//!
//! The free functions operate on explicit paths (used by "load from file"
//! flows); `ContextStore` binds them to the configured contexts directory and
//! resolves context names to files.

mod codec;
mod discovery;
mod repository;

use std::path::PathBuf;

use thiserror::Error;

pub use codec::{load_context, save_context};
pub use discovery::{is_context_file, list_contexts};
pub use repository::ContextStore;

/// File extension of context files, without the dot.
pub const CONTEXT_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to list contexts in {dir}: {source}")]
    List {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to load context {path}: {cause}")]
    Load {
        path: PathBuf,
        #[source]
        cause: LoadCause,
    },

    #[error("failed to save context {path}: {source}")]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to delete context {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("context not found: {0}")]
    NotFound(String),

    #[error("invalid context name '{0}'")]
    InvalidName(String),
}

/// Underlying reason a context file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("expected a JSON array of strings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Names must stay inside the directory: not blank, no separators, not `.`/`..`.
pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    let trimmed = name.trim();
    let bad = trimmed.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']);
    if bad { Err(StoreError::InvalidName(name.to_string())) } else { Ok(()) }
}
