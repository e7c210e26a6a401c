use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Platform capability for handing references to external programs.
///
/// Implementations return as soon as the handoff is made; they never wait for
/// the launched program.
pub trait Launcher {
    /// Hand a URL to the default handler for its scheme.
    fn open_url(&self, url: &str) -> io::Result<()>;

    /// Hand an existing file or directory to the OS "open" mechanism.
    fn open_path(&self, path: &Path) -> io::Result<()>;
}

/// Launcher for the host platform, chosen at compile time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&self, url: &str) -> io::Result<()> {
        webbrowser::open(url)
    }

    fn open_path(&self, path: &Path) -> io::Result<()> {
        open_command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}

#[cfg(target_os = "macos")]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn open_command(path: &Path) -> Command {
    // No cmd.exe in between, so `&` and `^` in names stay literal.
    // Explorer only accepts `\` separators.
    let native: PathBuf = path.components().collect();
    let mut cmd = Command::new("explorer");
    cmd.arg(native);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// What a [`DryRunLauncher`] was asked to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRecord {
    Url(String),
    Path(PathBuf),
}

/// Launcher that records requests instead of starting anything.
#[derive(Debug, Default)]
pub struct DryRunLauncher {
    launched: RefCell<Vec<LaunchRecord>>,
}

impl DryRunLauncher {
    pub fn launched(&self) -> Vec<LaunchRecord> {
        self.launched.borrow().clone()
    }
}

impl Launcher for DryRunLauncher {
    fn open_url(&self, url: &str) -> io::Result<()> {
        self.launched.borrow_mut().push(LaunchRecord::Url(url.to_string()));
        Ok(())
    }

    fn open_path(&self, path: &Path) -> io::Result<()> {
        self.launched.borrow_mut().push(LaunchRecord::Path(path.to_path_buf()));
        Ok(())
    }
}
