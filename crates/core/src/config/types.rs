use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::ContextStore;

/// On-disk shape of the preference file.
///
/// Unknown keys are ignored so older or hand-edited files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexts_dir: Option<PathBuf>,
}

/// Resolved settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the context files.
    pub contexts_dir: PathBuf,
    /// Preference file these settings are persisted to.
    pub settings_path: PathBuf,
}

impl Settings {
    pub fn store(&self) -> ContextStore {
        ContextStore::new(&self.contexts_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_file_shape() {
        let pref = PreferenceFile { contexts_dir: Some(PathBuf::from("/data/ctx")) };
        let json = serde_json::to_string(&pref).unwrap();
        assert_eq!(json, r#"{"contexts_dir":"/data/ctx"}"#);
    }

    #[test]
    fn test_preference_file_ignores_unknown_keys() {
        let pref: PreferenceFile =
            serde_json::from_str(r#"{"contexts_dir": "/x", "theme": "dark"}"#).unwrap();
        assert_eq!(pref.contexts_dir, Some(PathBuf::from("/x")));
    }

    #[test]
    fn test_logging_defaults_to_warn() {
        assert_eq!(LoggingConfig::default().level, "warn");
    }
}
