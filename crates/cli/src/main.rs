mod cmd;
mod logging;
mod tui;

use clap::{Args, Parser, Subcommand};
use contextkit_core::config::{LoggingConfig, SettingsLoader};
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Parser)]
#[command(
    name = "ctxk",
    version,
    about = "Save lists of URLs, files and folders, then open them all at once"
)]
struct Cli {
    /// Preference file to use instead of the default location
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the contexts in the contexts directory
    List(ListArgs),

    /// Print the references of a context
    Show(ShowArgs),

    /// Open every reference of a context
    Open(OpenArgs),

    /// Create a new context
    Create(CreateArgs),

    /// Append references to an existing context
    Add(AddArgs),

    /// Remove references from a context by position
    Remove(RemoveArgs),

    /// Delete a context file
    Delete(DeleteArgs),

    /// Show or change the contexts directory
    Settings(SettingsArgs),

    /// Print resolved settings and paths
    Doctor,

    /// Browse and edit contexts interactively
    Tui,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Context name (file name without .json)
    #[arg(required_unless_present = "file")]
    pub name: Option<String>,

    /// Read a context file from an explicit path instead
    #[arg(long, conflicts_with = "name")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Context name (file name without .json)
    #[arg(required_unless_present = "file")]
    pub name: Option<String>,

    /// Open a context file from an explicit path instead
    #[arg(long, conflicts_with = "name")]
    pub file: Option<PathBuf>,

    /// Report what would be opened without launching anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Context name; prompted for when omitted on a terminal
    pub name: Option<String>,

    /// References to add (URLs, files or folders)
    #[arg(long = "ref", short = 'r', value_name = "REF")]
    pub refs: Vec<String>,

    /// Save to an explicit file path instead of the contexts directory
    #[arg(long, conflicts_with = "name")]
    pub output: Option<PathBuf>,

    /// Replace an existing context with the same name
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Context name
    pub name: String,

    /// References to append
    #[arg(required = true, value_name = "REF")]
    pub refs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Context name
    pub name: String,

    /// Zero-based positions to remove (see `ctxk show`)
    #[arg(required = true, value_name = "INDEX")]
    pub indices: Vec<usize>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Context name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    /// New contexts directory (created if missing)
    #[arg(long, value_name = "DIR")]
    pub set: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal; stderr logging would draw over it.
    let level = match cli.command {
        Commands::Tui => "off".to_string(),
        _ => cli.log_level.clone(),
    };
    let log_cfg = LoggingConfig { level, file: cli.log_file.clone() };
    logging::init(&log_cfg);

    let settings = SettingsLoader::load(cli.settings.as_deref());
    if let Err(e) = settings.ensure_contexts_dir() {
        warn!("{e}");
    }

    match cli.command {
        Commands::List(args) => cmd::list::run(&settings, &args),
        Commands::Show(args) => cmd::show::run(&settings, &args),
        Commands::Open(args) => cmd::open::run(&settings, &args),
        Commands::Create(args) => cmd::create::run(&settings, &args),
        Commands::Add(args) => cmd::edit::add(&settings, &args),
        Commands::Remove(args) => cmd::edit::remove(&settings, &args),
        Commands::Delete(args) => cmd::delete::run(&settings, &args),
        Commands::Settings(args) => cmd::settings::run(settings, &args),
        Commands::Doctor => cmd::doctor::run(&settings),
        Commands::Tui => {
            if let Err(e) = tui::run(settings) {
                eprintln!("Error: {e:?}");
                std::process::exit(1);
            }
        }
    }
}
