//! Create command: build a new context from references and save it.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use contextkit_core::config::Settings;
use contextkit_core::session::Session;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::debug;

use crate::CreateArgs;

pub fn run(settings: &Settings, args: &CreateArgs) {
    let mut session = Session::create();
    for reference in &args.refs {
        if let Err(e) = session.add(reference) {
            eprintln!("Skipping '{reference}': {e}");
        }
    }
    debug!("New context with {} items", session.len());

    let destination = match destination(settings, args) {
        Ok(path) => path,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    if destination.exists() && !args.force {
        eprintln!("Context already exists: {}", destination.display());
        eprintln!("Use --force to replace it, or 'ctxk add' to extend it.");
        std::process::exit(1);
    }

    match session.save_as(&destination) {
        Ok(saved) => {
            println!("Context saved:\n{}", saved.path.display());
            println!("-- {} items --", saved.items.len());
        }
        Err(unsaved) => {
            eprintln!("Failed to save file:\n{}", unsaved.error);
            std::process::exit(1);
        }
    }
}

/// Where the new context goes: an explicit file, a given name, or a prompted name.
fn destination(settings: &Settings, args: &CreateArgs) -> Result<PathBuf, String> {
    if let Some(output) = &args.output {
        return Ok(output.clone());
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };

    settings.store().path_for(&name).map_err(|e| e.to_string())
}

fn prompt_name() -> Result<String, String> {
    if !io::stdin().is_terminal() {
        return Err("No context name given.\n  Hint: ctxk create <NAME>".to_string());
    }

    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Context name")
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(|e| format!("Input cancelled: {e}"))
}
