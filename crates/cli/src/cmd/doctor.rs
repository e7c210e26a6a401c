use contextkit_core::config::{default_settings_path, Settings};

pub fn run(settings: &Settings) {
    println!("OK   ctxk doctor");
    println!("version: {}", contextkit_core::version());
    println!("settings: {}", settings.settings_path.display());
    if settings.settings_path != default_settings_path() {
        println!("default settings: {}", default_settings_path().display());
    }
    println!("contexts_dir: {}", settings.contexts_dir.display());

    match settings.store().list() {
        Ok(names) => println!("contexts: {}", names.len()),
        Err(e) => {
            println!("FAIL ctxk doctor");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
