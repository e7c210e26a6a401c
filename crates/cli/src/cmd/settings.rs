//! Settings command: show or change the contexts directory.

use contextkit_core::config::Settings;

use crate::SettingsArgs;

pub fn run(mut settings: Settings, args: &SettingsArgs) {
    match &args.set {
        Some(dir) => {
            if let Err(e) = settings.set_contexts_dir(dir) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            println!("Default folder set to:\n{}", settings.contexts_dir.display());
        }
        None => println!("{}", settings.contexts_dir.display()),
    }
}
