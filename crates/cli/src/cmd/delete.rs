use contextkit_core::config::Settings;

use crate::DeleteArgs;

pub fn run(settings: &Settings, args: &DeleteArgs) {
    match settings.store().delete(&args.name) {
        Ok(path) => println!("Deleted: {}", path.display()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
