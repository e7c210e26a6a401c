use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{
    CONTEXT_EXTENSION, StoreError, list_contexts, load_context, save_context, validate_name,
};

/// Contexts stored in one directory, addressed by name.
#[derive(Debug, Clone)]
pub struct ContextStore {
    dir: PathBuf,
}

impl ContextStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Context names available in the directory, sorted.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        list_contexts(&self.dir)
    }

    /// File path a context name maps to.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{CONTEXT_EXTENSION}")))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|p| p.is_file())
    }

    pub fn load(&self, name: &str) -> Result<Vec<String>, StoreError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        load_context(&path)
    }

    /// Save under `name`, returning the file written.
    pub fn save(&self, name: &str, items: &[String]) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name)?;
        save_context(&path, items)?;
        Ok(path)
    }

    /// Remove a context file, returning the path that was deleted.
    pub fn delete(&self, name: &str) -> Result<PathBuf, StoreError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(&path)
            .map_err(|e| StoreError::Delete { path: path.clone(), source: e })?;
        info!("Deleted context {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_path_for_appends_extension() {
        let store = ContextStore::new("/ctx");
        assert_eq!(store.path_for("work").unwrap(), PathBuf::from("/ctx/work.json"));
    }

    #[test]
    fn test_rejects_names_escaping_dir() {
        let store = ContextStore::new("/ctx");
        for name in ["", " ", ".", "..", "a/b", "..\\x"] {
            assert!(
                matches!(store.path_for(name), Err(StoreError::InvalidName(_))),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_listed_padded_name_can_be_loaded() {
        let tmp = tempdir().unwrap();
        let store = ContextStore::new(tmp.path());
        std::fs::write(tmp.path().join(" padded.json"), r#"["https://a.example"]"#).unwrap();

        let names = store.list().unwrap();
        assert_eq!(names, vec![" padded"]);
        assert_eq!(store.load(&names[0]).unwrap(), vec!["https://a.example"]);
    }

    #[test]
    fn test_load_unknown_name_is_not_found() {
        let tmp = tempdir().unwrap();
        let store = ContextStore::new(tmp.path());

        assert!(matches!(store.load("ghost"), Err(StoreError::NotFound(_))));
        assert!(!store.exists("ghost"));
    }

    #[test]
    fn test_save_list_delete() {
        let tmp = tempdir().unwrap();
        let store = ContextStore::new(tmp.path());

        store.save("morning", &["https://news.example".to_string()]).unwrap();
        assert!(store.exists("morning"));
        assert_eq!(store.list().unwrap(), vec!["morning"]);

        store.delete("morning").unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(store.delete("morning"), Err(StoreError::NotFound(_))));
    }
}
