//! Open command: hand every reference of a context to the system.

use contextkit_core::config::Settings;
use contextkit_core::opener::{DryRunLauncher, LaunchRecord, OpenReport, Opener};
use tracing::info;

use crate::OpenArgs;

pub fn run(settings: &Settings, args: &OpenArgs) {
    let ctx = super::load_or_exit(settings, args.name.as_deref(), args.file.as_deref());

    if ctx.items.is_empty() {
        println!("No URLs or files/folders loaded to open.");
        return;
    }

    info!("Opening {} items from {}", ctx.items.len(), ctx.path.display());

    let report = if args.dry_run {
        let opener = Opener::new(DryRunLauncher::default());
        let report = opener.open_all(&ctx.items);
        for record in opener.launcher().launched() {
            match record {
                LaunchRecord::Url(url) => println!("would open url:  {url}"),
                LaunchRecord::Path(path) => println!("would open path: {}", path.display()),
            }
        }
        report
    } else {
        Opener::system().open_all(&ctx.items)
    };

    print_report(&report);
    if !report.is_success() {
        std::process::exit(1);
    }
}

fn print_report(report: &OpenReport) {
    if report.is_success() {
        println!("All items opened successfully.");
        return;
    }

    eprintln!("Some items failed to open:");
    for failure in &report.failures {
        eprintln!("{}: {}", failure.reference, failure.error);
    }
    println!("Opened {} of {} items.", report.opened.len(), report.attempted());
}
