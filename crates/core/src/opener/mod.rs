//! Open references with the host's handlers.
//!
//! URLs go to the default URL handler, local paths to the platform's native
//! "open" mechanism. Every reference is attempted independently so that a
//! context with one broken entry still opens the rest.

mod launcher;

use std::borrow::Cow;
use std::env;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::reference::{ReferenceKind, classify};

pub use launcher::{DryRunLauncher, LaunchRecord, Launcher, SystemLauncher};

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no handler available: {source}")]
    NoHandler {
        #[source]
        source: io::Error,
    },

    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("failed to open {}: {source}", path.display())]
    Launch {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A reference that could not be opened.
#[derive(Debug)]
pub struct OpenFailure {
    pub reference: String,
    pub error: OpenError,
}

/// Outcome of opening every reference in a context.
#[derive(Debug, Default)]
pub struct OpenReport {
    pub opened: Vec<String>,
    pub failures: Vec<OpenFailure>,
}

impl OpenReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.opened.len() + self.failures.len()
    }
}

/// Dispatches references to a [`Launcher`].
#[derive(Debug, Clone, Default)]
pub struct Opener<L = SystemLauncher> {
    launcher: L,
}

impl Opener<SystemLauncher> {
    /// Opener backed by the host platform's handlers.
    pub fn system() -> Self {
        Self { launcher: SystemLauncher }
    }
}

impl<L: Launcher> Opener<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Open a single reference.
    ///
    /// Local paths are expanded and must exist before they are handed off;
    /// the launched process is not waited on.
    pub fn open(&self, reference: &str) -> Result<(), OpenError> {
        match classify(reference) {
            ReferenceKind::Url => {
                debug!("Opening URL {reference}");
                self.launcher
                    .open_url(reference)
                    .map_err(|source| OpenError::NoHandler { source })
            }
            ReferenceKind::LocalPath => {
                let path = expand_local_path(reference);
                if !path.exists() {
                    return Err(OpenError::PathNotFound(path));
                }
                debug!("Opening path {}", path.display());
                self.launcher
                    .open_path(&path)
                    .map_err(|source| OpenError::Launch { path, source })
            }
        }
    }

    /// Open every reference in order, collecting failures instead of stopping.
    pub fn open_all<I, S>(&self, references: I) -> OpenReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = OpenReport::default();
        for reference in references {
            let reference = reference.as_ref();
            match self.open(reference) {
                Ok(()) => report.opened.push(reference.to_string()),
                Err(error) => {
                    debug!("Failed to open {reference}: {error}");
                    report
                        .failures
                        .push(OpenFailure { reference: reference.to_string(), error });
                }
            }
        }
        report
    }
}

/// Expand `~` and environment variables in a local path reference.
///
/// Variables that are not set are left as written.
pub fn expand_local_path(reference: &str) -> PathBuf {
    let expanded: Cow<'_, str> = shellexpand::full_with_context_no_errors(
        reference,
        || dirs::home_dir().map(|h| h.to_string_lossy().into_owned()),
        |var| env::var(var).ok(),
    );
    PathBuf::from(expanded.into_owned())
}
