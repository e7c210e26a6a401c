use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::{CONTEXT_EXTENSION, StoreError, validate_name};

/// List the context names in `dir`, sorted ascending.
///
/// Only regular files directly inside `dir` with the context extension
/// count; the name is the file name without that extension. A missing
/// directory yields an empty list. Entries that cannot be read are skipped;
/// only a failure to read `dir` itself is an error.
pub fn list_contexts(dir: &Path) -> Result<Vec<String>, StoreError> {
    if !dir.is_dir() {
        debug!("Contexts directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(StoreError::List { dir: dir.to_path_buf(), source: e });
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_context_file(entry.path()) {
            continue;
        }

        match context_name(entry.path()) {
            Some(name) => names.push(name.to_string()),
            None => debug!("Skipping unusable file name {}", entry.path().display()),
        }
    }

    names.sort();
    Ok(names)
}

/// Whether `path` carries the context file extension.
pub fn is_context_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&format!(".{CONTEXT_EXTENSION}")))
}

/// Name a context file is addressed by, if it can be addressed at all.
fn context_name(path: &Path) -> Option<&str> {
    let name = path
        .file_name()?
        .to_str()?
        .strip_suffix(&format!(".{CONTEXT_EXTENSION}"))?;
    validate_name(name).ok().map(|()| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_ignores_other_extensions_and_dirs() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("keep.json"), "[]").unwrap();
        fs::write(tmp.path().join("notes.txt"), "").unwrap();
        fs::write(tmp.path().join("upper.JSON"), "[]").unwrap();
        fs::create_dir(tmp.path().join("folder.json")).unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("deep.json"), "[]").unwrap();

        let names = list_contexts(tmp.path()).unwrap();
        assert_eq!(names, vec!["keep"]);
    }

    #[test]
    fn test_keeps_inner_dots() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("v1.2.json"), "[]").unwrap();

        assert_eq!(list_contexts(tmp.path()).unwrap(), vec!["v1.2"]);
    }

    #[test]
    fn test_lists_padded_names_and_skips_bare_extension() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(" padded.json"), "[]").unwrap();
        fs::write(tmp.path().join(".json"), "[]").unwrap();

        assert_eq!(list_contexts(tmp.path()).unwrap(), vec![" padded"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_does_not_hide_other_contexts() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("work.json"), "[]").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("gone"), tmp.path().join("stale.json"))
            .unwrap();

        assert_eq!(list_contexts(tmp.path()).unwrap(), vec!["work"]);
    }

    #[test]
    fn test_is_context_file() {
        assert!(is_context_file(Path::new("/x/work.json")));
        assert!(!is_context_file(Path::new("/x/work.json.bak")));
        assert!(!is_context_file(Path::new("/x/work")));
    }
}
