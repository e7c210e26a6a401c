use std::path::{Path, PathBuf};
use std::{env, fs, io};

use dirs::{document_dir, home_dir};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::types::{PreferenceFile, Settings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to resolve directory {0}: {1}")]
    Resolve(String, #[source] io::Error),

    #[error("failed to create contexts directory {0}: {1}")]
    CreateDir(String, #[source] io::Error),
}

pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from `settings_path` (or the default preference file).
    pub fn load(settings_path: Option<&Path>) -> Settings {
        let path = match settings_path {
            Some(p) => p.to_path_buf(),
            None => default_settings_path(),
        };
        Self::load_with_default(&path, default_contexts_dir())
    }

    /// Load settings, using `default_dir` whenever the preference file is
    /// missing, malformed, or names a directory that no longer exists.
    pub fn load_with_default(settings_path: &Path, default_dir: PathBuf) -> Settings {
        let contexts_dir = match read_preferences(settings_path) {
            Some(PreferenceFile { contexts_dir: Some(dir) }) if dir.is_dir() => dir,
            Some(PreferenceFile { contexts_dir: Some(dir) }) => {
                debug!("Preferred directory {} is gone, using default", dir.display());
                default_dir
            }
            _ => default_dir,
        };

        Settings { contexts_dir, settings_path: settings_path.to_path_buf() }
    }
}

fn read_preferences(path: &Path) -> Option<PreferenceFile> {
    if !path.is_file() {
        return None;
    }
    let content = fs::read_to_string(path)
        .map_err(|e| debug!("Ignoring unreadable preferences {}: {e}", path.display()))
        .ok()?;
    serde_json::from_str(&content)
        .map_err(|e| debug!("Ignoring malformed preferences {}: {e}", path.display()))
        .ok()
}

impl Settings {
    /// Make sure the contexts directory exists on disk.
    pub fn ensure_contexts_dir(&self) -> Result<(), SettingsError> {
        fs::create_dir_all(&self.contexts_dir).map_err(|e| {
            SettingsError::CreateDir(self.contexts_dir.display().to_string(), e)
        })
    }

    /// Switch to a new contexts directory.
    ///
    /// The directory is created if needed and the preference is persisted
    /// right away. Failing to write the preference file is logged, not
    /// returned.
    pub fn set_contexts_dir(&mut self, dir: &Path) -> Result<(), SettingsError> {
        let dir = std::path::absolute(dir)
            .map_err(|e| SettingsError::Resolve(dir.display().to_string(), e))?;
        fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::CreateDir(dir.display().to_string(), e))?;

        self.contexts_dir = dir;
        info!("Contexts directory set to {}", self.contexts_dir.display());

        if let Err(e) = self.persist() {
            warn!("Failed to save preferences to {}: {e}", self.settings_path.display());
        }
        Ok(())
    }

    fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let pref = PreferenceFile { contexts_dir: Some(self.contexts_dir.clone()) };
        let json = serde_json::to_string_pretty(&pref).map_err(io::Error::other)?;
        fs::write(&self.settings_path, json)
    }
}

pub fn default_settings_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("contextkit").join("settings.json");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("contextkit").join("settings.json")
}

/// `Contexts` under the user's documents folder.
pub fn default_contexts_dir() -> PathBuf {
    let documents = document_dir().unwrap_or_else(|| {
        home_dir().unwrap_or_else(|| PathBuf::from("~")).join("Documents")
    });
    documents.join("Contexts")
}
