//! Add and remove commands: load a context, change it, save it back.

use contextkit_core::config::Settings;
use contextkit_core::session::{Session, SessionError};

use crate::{AddArgs, RemoveArgs};

pub fn add(settings: &Settings, args: &AddArgs) {
    let mut session = open_session(settings, &args.name);

    let mut added = 0;
    for reference in &args.refs {
        match session.add(reference) {
            Ok(_) => added += 1,
            Err(e) => eprintln!("Skipping '{reference}': {e}"),
        }
    }

    if added == 0 {
        eprintln!("Nothing to add.");
        std::process::exit(1);
    }

    save(session);
    println!("Added {added} items to {}.", args.name);
}

pub fn remove(settings: &Settings, args: &RemoveArgs) {
    let mut session = open_session(settings, &args.name);

    if let Err(e) = session.remove(&args.indices) {
        eprintln!("{e}");
        if matches!(e, SessionError::IndexOutOfRange { .. }) {
            eprintln!("Run 'ctxk show {}' to see item positions.", args.name);
        }
        std::process::exit(1);
    }

    let left = session.len();
    save(session);
    println!("Removed items from {}; {left} left.", args.name);
}

fn open_session(settings: &Settings, name: &str) -> Session {
    let store = settings.store();
    if !store.exists(name) {
        eprintln!("Context not found: {name}");
        std::process::exit(1);
    }

    let path = match store.path_for(name) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match Session::edit(&path) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Failed to load file:\n{e}");
            std::process::exit(1);
        }
    }
}

fn save(session: Session) {
    if let Err(unsaved) = session.save() {
        eprintln!("Failed to save file:\n{}", unsaved.error);
        std::process::exit(1);
    }
}
