use std::fs;
use std::path::Path;

use tracing::debug;

use super::{LoadCause, StoreError};

/// Read a context file.
///
/// The whole document must be a JSON array of strings; anything else is a
/// load error and no items are returned.
pub fn load_context(path: &Path) -> Result<Vec<String>, StoreError> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::Load {
        path: path.to_path_buf(),
        cause: LoadCause::Io(e),
    })?;

    let items: Vec<String> = serde_json::from_str(&content).map_err(|e| {
        StoreError::Load { path: path.to_path_buf(), cause: LoadCause::Parse(e) }
    })?;

    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Write `items` to `path` as an indented JSON array, replacing any existing file.
pub fn save_context(path: &Path, items: &[String]) -> Result<(), StoreError> {
    let save_err =
        |source: std::io::Error| StoreError::Save { path: path.to_path_buf(), source };

    let mut json = serde_json::to_string_pretty(items)
        .map_err(|e| save_err(std::io::Error::other(e)))?;
    json.push('\n');

    fs::write(path, json).map_err(save_err)?;

    debug!("Saved {} items to {}", items.len(), path.display());
    Ok(())
}
