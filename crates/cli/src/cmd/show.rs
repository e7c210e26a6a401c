use contextkit_core::config::Settings;

use super::output::{items_table, print_items_json};
use crate::ShowArgs;

pub fn run(settings: &Settings, args: &ShowArgs) {
    let ctx = super::load_or_exit(settings, args.name.as_deref(), args.file.as_deref());

    if args.json {
        print_items_json(&ctx.items);
        return;
    }

    if ctx.items.is_empty() {
        println!("(context '{}' is empty)", ctx.label);
        return;
    }
    println!("{}", items_table(&ctx.items));
}
