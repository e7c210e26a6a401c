//! Editable working copy of a context.
//!
//! A session owns its items until it is saved. Every mutation returns the
//! resulting item list so a front-end can re-render from it rather than
//! sharing the container. Saving consumes the session; a failed save hands it
//! back together with the error.

use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::reference::Reference;
use crate::store::{StoreError, load_context, save_context};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("please provide a URL or path")]
    BlankReference,

    #[error("no item selected")]
    EmptySelection,

    #[error("item {index} is out of range (context has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("this context has not been saved yet; choose a destination")]
    NeedsDestination,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where a session stands relative to its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Not bound to a file yet.
    New,
    /// Bound to a file and unchanged since it was read.
    Loaded,
    /// Bound to a file and modified since it was read.
    Dirty,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SessionState::New => "new",
            SessionState::Loaded => "loaded",
            SessionState::Dirty => "modified",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    items: Vec<String>,
    path: Option<PathBuf>,
    dirty: bool,
}

/// A save that did not go through. The session is returned intact.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct Unsaved {
    pub session: Session,
    #[source]
    pub error: SessionError,
}

/// Result of a completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedContext {
    pub path: PathBuf,
    pub items: Vec<String>,
}

impl Session {
    /// Start an empty, unbound session.
    pub fn create() -> Self {
        Self { items: Vec::new(), path: None, dirty: false }
    }

    /// Start a session from an existing context file.
    ///
    /// A file that fails to load yields no session at all.
    pub fn edit(path: &Path) -> Result<Self, SessionError> {
        let items = load_context(path)?;
        debug!("Editing {} ({} items)", path.display(), items.len());
        Ok(Self { items, path: Some(path.to_path_buf()), dirty: false })
    }

    pub fn state(&self) -> SessionState {
        match (&self.path, self.dirty) {
            (None, _) => SessionState::New,
            (Some(_), false) => SessionState::Loaded,
            (Some(_), true) => SessionState::Dirty,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Append a reference. Surrounding whitespace is trimmed; blank input is rejected.
    pub fn add(&mut self, input: &str) -> Result<&[String], SessionError> {
        let reference = Reference::parse(input).ok_or(SessionError::BlankReference)?;
        debug!("Adding {} reference {}", reference.kind(), reference);
        self.items.push(reference.into_inner());
        self.dirty = true;
        Ok(self.items.as_slice())
    }

    /// Remove the items at `indices`, keeping the rest in order.
    ///
    /// Nothing changes unless every index is valid.
    pub fn remove(&mut self, indices: &[usize]) -> Result<&[String], SessionError> {
        if indices.is_empty() {
            return Err(SessionError::EmptySelection);
        }

        let len = self.items.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(SessionError::IndexOutOfRange { index, len });
        }

        let selected: BTreeSet<usize> = indices.iter().copied().collect();
        for &index in selected.iter().rev() {
            self.items.remove(index);
        }
        debug!("Removed {} items", selected.len());
        self.dirty = true;
        Ok(self.items.as_slice())
    }

    /// Save to the bound file.
    ///
    /// An unbound session fails with [`SessionError::NeedsDestination`]; use
    /// [`Session::save_as`] to pick a path.
    pub fn save(self) -> Result<SavedContext, Unsaved> {
        match self.path.clone() {
            Some(path) => self.write(path),
            None => Err(Unsaved { session: self, error: SessionError::NeedsDestination }),
        }
    }

    /// Save to `path` and bind the context to it.
    pub fn save_as(self, path: impl Into<PathBuf>) -> Result<SavedContext, Unsaved> {
        self.write(path.into())
    }

    fn write(self, path: PathBuf) -> Result<SavedContext, Unsaved> {
        match save_context(&path, &self.items) {
            Ok(()) => {
                info!("Context saved: {}", path.display());
                Ok(SavedContext { path, items: self.items })
            }
            Err(e) => Err(Unsaved { session: self, error: e.into() }),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::create()
    }
}
