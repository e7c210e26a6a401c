use contextkit_core::config::Settings;

use crate::ListArgs;

pub fn run(settings: &Settings, args: &ListArgs) {
    let names = match settings.store().list() {
        Ok(names) => names,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&names).unwrap_or_default());
        return;
    }

    if names.is_empty() {
        println!("(no contexts found in {})", settings.contexts_dir.display());
        return;
    }
    for name in &names {
        println!("{name}");
    }
    println!("-- {} contexts --", names.len());
}
