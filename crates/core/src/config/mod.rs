//! Persisted preferences.
//!
//! The only preference is the contexts directory. Loading never fails: any
//! problem with the preference file falls back to the default location.

pub mod loader;
pub mod types;

pub use loader::{
    SettingsError, SettingsLoader, default_contexts_dir, default_settings_path,
};
pub use types::{LoggingConfig, PreferenceFile, Settings};
