pub mod create;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod list;
pub mod open;
pub mod output;
pub mod settings;
pub mod show;

use std::path::{Path, PathBuf};

use contextkit_core::config::Settings;
use contextkit_core::store::load_context;

/// A context read either by name from the contexts directory or from a file.
pub struct LoadedContext {
    pub label: String,
    pub path: PathBuf,
    pub items: Vec<String>,
}

/// Load the context named on the command line, exiting with a message on failure.
pub fn load_or_exit(
    settings: &Settings,
    name: Option<&str>,
    file: Option<&Path>,
) -> LoadedContext {
    let store = settings.store();
    let (label, path) = match (name, file) {
        (_, Some(file)) => (file.display().to_string(), file.to_path_buf()),
        (Some(name), None) => match store.path_for(name) {
            Ok(path) if path.is_file() => (name.to_string(), path),
            Ok(_) => {
                eprintln!("Context not found: {name}");
                eprintln!("Run 'ctxk list' to see available contexts.");
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        (None, None) => {
            eprintln!("No context given.");
            std::process::exit(2);
        }
    };

    match load_context(&path) {
        Ok(items) => LoadedContext { label, path, items },
        Err(e) => {
            eprintln!("Failed to load file:\n{e}");
            std::process::exit(1);
        }
    }
}
