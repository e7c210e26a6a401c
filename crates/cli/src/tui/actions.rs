//! Execution logic behind the TUI's open, edit and save actions.

use contextkit_core::opener::{Launcher, Opener};
use contextkit_core::session::{Session, SessionError};
use contextkit_core::store::ContextStore;

use super::app::StatusMessage;

/// Open every reference of a stored context.
pub fn open_context<L: Launcher>(
    store: &ContextStore,
    opener: &Opener<L>,
    name: &str,
) -> StatusMessage {
    let items = match store.load(name) {
        Ok(items) => items,
        Err(e) => return StatusMessage::error(format!("Failed to load file: {e}")),
    };

    if items.is_empty() {
        return StatusMessage::info("No URLs or files/folders loaded to open.");
    }

    let report = opener.open_all(&items);
    if report.is_success() {
        return StatusMessage::info(format!("All {} items opened successfully.", items.len()));
    }

    let failures: Vec<String> = report
        .failures
        .iter()
        .map(|f| format!("{}: {}", f.reference, f.error))
        .collect();
    StatusMessage::error(format!("Some items failed to open: {}", failures.join("; ")))
}

/// Load a stored context into a new session.
pub fn start_edit(store: &ContextStore, name: &str) -> Result<Session, StatusMessage> {
    let path = store.path_for(name).map_err(|e| StatusMessage::error(e.to_string()))?;
    Session::edit(&path)
        .map_err(|e| StatusMessage::error(format!("Failed to load file: {e}")))
}

/// Save a session, either to its bound file or under `name` in the store.
///
/// An existing context is only replaced when `overwrite` is set. On failure
/// the session is handed back so the user can keep editing.
pub fn save_session(
    store: &ContextStore,
    session: Session,
    name: Option<&str>,
    overwrite: bool,
) -> Result<StatusMessage, (Session, StatusMessage)> {
    let result = match (session.path().is_some(), name) {
        (true, _) => session.save(),
        (false, Some(name)) if !overwrite && store.exists(name) => {
            let status = StatusMessage::error(format!("Context already exists: {name}"));
            return Err((session, status));
        }
        (false, Some(name)) => match store.path_for(name) {
            Ok(path) => session.save_as(path),
            Err(e) => return Err((session, StatusMessage::error(e.to_string()))),
        },
        (false, None) => {
            return Err((
                session,
                StatusMessage::error(SessionError::NeedsDestination.to_string()),
            ));
        }
    };

    match result {
        Ok(saved) => Ok(StatusMessage::info(format!("Context saved: {}", saved.path.display()))),
        Err(unsaved) => Err((
            unsaved.session,
            StatusMessage::error(format!("Failed to save file: {}", unsaved.error)),
        )),
    }
}
